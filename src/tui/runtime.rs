//! Screen runtime: terminal setup, the single-threaded event loop, and
//! command execution.
//!
//! The loop is strictly sequential: poll one event, apply [`update`], execute
//! the returned command, redraw. A toggle is therefore always fully applied —
//! including its re-render — before the next event is read.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::assets::StaticAssets;
use crate::core::errors::{Result, WoofError};
use crate::logger::{EventType, JsonlConfig, JsonlWriter, LogEntry, Severity};
use crate::store::ProfileStore;

use super::model::{AppCmd, AppModel, AppMsg, UiEvent};
use super::render;
use super::terminal_guard::TerminalGuard;
use super::theme::{AccessibilityProfile, Theme};
use super::update::update;

/// Runtime configuration for one screen session.
#[derive(Debug, Clone)]
pub struct ScreenRuntimeConfig {
    /// Event poll timeout; bounds idle redraw latency.
    pub poll_interval: Duration,
    /// Contrast and color knobs applied to the theme.
    pub accessibility: AccessibilityProfile,
    /// JSONL sink for UI events. `None` disables the activity log.
    pub log: Option<JsonlConfig>,
    /// Stable hash of the effective config, recorded on the start event.
    pub config_hash: Option<String>,
    /// Render the key-hint footer.
    pub show_hints: bool,
}

impl Default for ScreenRuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
            accessibility: AccessibilityProfile::default(),
            log: None,
            config_hash: None,
            show_hints: true,
        }
    }
}

/// Run the profile screen until the user quits.
///
/// # Errors
/// Returns terminal-layer failures from setup, drawing, or event polling.
/// The activity log never fails the screen.
pub fn run_screen(config: &ScreenRuntimeConfig) -> Result<()> {
    let records = ProfileStore::all();
    let assets = StaticAssets;
    let mut logger = config.log.clone().map(JsonlWriter::open);

    let _guard = TerminalGuard::new().map_err(|e| WoofError::terminal("setup", e))?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).map_err(|e| WoofError::terminal("backend", e))?;

    let size = terminal
        .size()
        .map_err(|e| WoofError::terminal("size", e))?;
    // Fresh screen: the model (and with it the expansion flag) is rebuilt
    // from scratch on every run.
    let mut model = AppModel::new(records.len(), (size.width, size.height));

    if let Some(logger) = logger.as_mut() {
        let mut entry = LogEntry::new(EventType::AppStart, Severity::Info)
            .with_size(size.width, size.height);
        entry.records = Some(records.len());
        entry.config_hash = config.config_hash.clone();
        logger.write_entry(&entry);
    }

    while !model.quit {
        let theme = Theme::for_terminal(model.terminal_size.0, config.accessibility);
        terminal
            .draw(|frame| {
                render::draw(frame, &model, records, &assets, &theme, config.show_hints);
            })
            .map_err(|e| WoofError::terminal("draw", e))?;

        if !event::poll(config.poll_interval).map_err(|e| WoofError::terminal("poll", e))? {
            continue;
        }
        let msg = match event::read().map_err(|e| WoofError::terminal("read", e))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => AppMsg::Key(key),
            Event::Resize(cols, rows) => AppMsg::Resize { cols, rows },
            _ => continue,
        };

        let cmd = update(&mut model, msg);
        execute_cmd(&cmd, logger.as_mut());
    }

    if let Some(logger) = logger.as_mut() {
        logger.write_entry(&LogEntry::new(EventType::AppStop, Severity::Info));
        logger.flush();
    }
    Ok(())
}

/// Execute a command returned by the update function.
fn execute_cmd(cmd: &AppCmd, logger: Option<&mut JsonlWriter>) {
    match cmd {
        AppCmd::None | AppCmd::Quit => {}
        AppCmd::Log(event) => {
            if let Some(logger) = logger {
                logger.write_entry(&log_entry_for(*event));
            }
        }
    }
}

fn log_entry_for(event: UiEvent) -> LogEntry {
    match event {
        UiEvent::Toggled { expanded } => {
            LogEntry::new(EventType::ExpansionToggle, Severity::Info).with_expanded(expanded)
        }
        UiEvent::Resized { cols, rows } => {
            LogEntry::new(EventType::Resize, Severity::Info).with_size(cols, rows)
        }
    }
}

// ──────────────────── tests ────────────────────
