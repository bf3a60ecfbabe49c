//! Top-level CLI definition and dispatch.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::Colorize;
use colored::control;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use woof::assets::{AssetResolver, StaticAssets};
use woof::core::config::Config;
use woof::core::errors::WoofError;
use woof::logger::JsonlConfig;
use woof::store::ProfileStore;
use woof::tui::theme::AccessibilityProfile;
use woof::tui::{ScreenRuntimeConfig, run_screen};

/// woof — browse the kennel's adoptable dogs from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "woof",
    author,
    version,
    about = "Woof - Dog Profile Browser",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Increase verbosity.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Open the profile screen.
    View(ViewArgs),
    /// Print the dog roster.
    Records(RecordsArgs),
    /// View resolved configuration state.
    Config(ConfigArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args, Serialize, Default)]
struct ViewArgs {
    /// Override the event poll interval in milliseconds.
    #[arg(long, value_name = "MS")]
    poll_ms: Option<u64>,
    /// Use the high-contrast palette.
    #[arg(long)]
    high_contrast: bool,
    /// Disable the JSONL activity log for this session.
    #[arg(long)]
    no_log: bool,
    /// Hide the key-hint footer.
    #[arg(long)]
    no_hints: bool,
}

#[derive(Debug, Clone, Args, Serialize, Default)]
struct RecordsArgs {
    /// Show raw resource handle ids instead of resolved text.
    #[arg(long)]
    ids: bool,
}

#[derive(Debug, Clone, Args, Serialize, Default)]
struct ConfigArgs {
    /// Print only the config file path.
    #[arg(long)]
    path: bool,
}

#[derive(Debug, Clone, Args, Serialize, Default)]
struct VersionArgs {}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// CLI-layer errors: library failures plus dispatch-level rejections.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Woof(#[from] WoofError),
    #[error("{command} does not support --json output")]
    JsonUnsupported { command: &'static str },
    #[error("output failure: {0}")]
    Io(#[from] io::Error),
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    }

    match &cli.command {
        Command::Completions(args) => {
            generate(args.shell, &mut Cli::command(), "woof", &mut io::stdout());
            Ok(())
        }
        Command::Version(_) => run_version(cli),
        Command::Config(args) => run_config(cli, args),
        Command::Records(args) => run_records(cli, args),
        Command::View(args) => run_view(cli, args),
    }
}

fn load_config(cli: &Cli) -> Result<Config, WoofError> {
    Config::load(cli.config.as_deref())
}

fn run_version(cli: &Cli) -> Result<(), CliError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "name": name, "version": version }))
                .map_err(WoofError::from)?
        );
    } else {
        println!("{} {}", name.bold(), version);
    }
    Ok(())
}

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<(), CliError> {
    let cfg = load_config(cli)?;
    if args.path {
        println!("{}", cfg.paths.config_file.display());
        return Ok(());
    }
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cfg).map_err(WoofError::from)?
        );
    } else {
        print!("{}", cfg.to_toml()?);
    }
    Ok(())
}

fn run_records(cli: &Cli, args: &RecordsArgs) -> Result<(), CliError> {
    let assets = StaticAssets;
    let records = ProfileStore::all();

    if cli.json {
        let payload: Vec<_> = records
            .iter()
            .map(|r| {
                json!({
                    "name": r.name,
                    "name_text": assets.text_or_id(r.name),
                    "age": r.age,
                    "image": r.image,
                    "hobby": r.hobby,
                    "hobby_text": assets.text_or_id(r.hobby),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(WoofError::from)?
        );
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for record in records {
        let (name, hobby) = if args.ids {
            (record.name.id().to_owned(), record.hobby.id().to_owned())
        } else {
            (
                assets.text_or_id(record.name).to_owned(),
                assets.text_or_id(record.hobby).to_owned(),
            )
        };
        if cli.quiet {
            writeln!(stdout, "{name}")?;
        } else {
            writeln!(
                stdout,
                "{:<20} {:>2} years old   {}",
                name.bold(),
                record.age,
                hobby.dimmed()
            )?;
        }
        if cli.verbose {
            writeln!(
                stdout,
                "    {} {} {}",
                record.name.id().dimmed(),
                record.image.id().dimmed(),
                record.hobby.id().dimmed()
            )?;
        }
    }
    Ok(())
}

fn run_view(cli: &Cli, args: &ViewArgs) -> Result<(), CliError> {
    if cli.json {
        return Err(CliError::JsonUnsupported { command: "view" });
    }
    let cfg = load_config(cli)?;

    let poll_ms = args.poll_ms.unwrap_or(cfg.ui.poll_interval_ms);
    if !(10..=10_000).contains(&poll_ms) {
        return Err(WoofError::InvalidConfig {
            details: format!("--poll-ms must be within 10..=10000, got {poll_ms}"),
        }
        .into());
    }

    let log = (cfg.log.enabled && !args.no_log).then(|| JsonlConfig {
        path: cfg.paths.jsonl_log.clone(),
        fallback_path: Some(std::env::temp_dir().join("woof.jsonl")),
        stderr_notices: cfg.log.fallback_to_stderr,
    });

    let runtime = ScreenRuntimeConfig {
        poll_interval: Duration::from_millis(poll_ms),
        accessibility: AccessibilityProfile::from_environment(
            args.high_contrast || cfg.ui.high_contrast,
            cli.no_color,
        ),
        log,
        config_hash: Some(cfg.stable_hash()?),
        show_hints: cfg.ui.show_hints && !args.no_hints,
    };
    run_screen(&runtime)?;
    Ok(())
}

// ──────────────────── tests ────────────────────
