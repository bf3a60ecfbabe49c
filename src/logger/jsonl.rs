//! JSONL logger: append-only line-delimited JSON for the UI event trail.
//!
//! Each line is a self-contained JSON object. Lines are assembled in memory
//! and written atomically via `write_all` to prevent interleaved partial lines
//! when the file is being tailed by another process.
//!
//! Four-level fallback chain:
//! 1. Primary file path
//! 2. Fallback path (e.g. `/tmp/woof.jsonl`)
//! 3. stderr with `[WOOF-JSONL]` prefix
//! 4. Silent discard (the screen must never crash for logging failures)

#![allow(missing_docs)]

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Severity level for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Log event types matching the woof activity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    AppStart,
    AppStop,
    ExpansionToggle,
    Resize,
    Error,
}

/// A single JSONL log entry — all fields optional except `ts`, `event`,
/// `severity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    /// Event type identifier.
    pub event: EventType,
    /// Severity level.
    pub severity: Severity,
    /// Expansion flag value after the event (toggle events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    /// Terminal columns (resize and start events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<u16>,
    /// Terminal rows (resize and start events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u16>,
    /// Number of records in the roster (start events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    /// Stable hash of the effective config (start events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
    /// WOOF error code if the event reports a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Freeform details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogEntry {
    /// Create a new entry stamped with the current UTC time.
    #[must_use]
    pub fn new(event: EventType, severity: Severity) -> Self {
        Self {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
            severity,
            expanded: None,
            cols: None,
            rows: None,
            records: None,
            config_hash: None,
            error_code: None,
            error_message: None,
            details: None,
        }
    }

    /// Attach the expansion flag value.
    #[must_use]
    pub const fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    /// Attach terminal dimensions.
    #[must_use]
    pub const fn with_size(mut self, cols: u16, rows: u16) -> Self {
        self.cols = Some(cols);
        self.rows = Some(rows);
        self
    }
}

/// Degradation state of the JSONL writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// Writing to primary path.
    Normal,
    /// Primary failed, writing to fallback path.
    Fallback,
    /// Both files failed, writing to stderr.
    Stderr,
    /// Everything failed, silently discarding.
    Discard,
}

/// Configuration for the JSONL writer.
#[derive(Debug, Clone)]
pub struct JsonlConfig {
    /// Primary log file path.
    pub path: PathBuf,
    /// Optional fallback path (e.g. on a different filesystem).
    pub fallback_path: Option<PathBuf>,
    /// Mirror degradation notices to stderr.
    pub stderr_notices: bool,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/tmp/woof-activity.jsonl"),
            fallback_path: Some(PathBuf::from("/tmp/woof.jsonl")),
            stderr_notices: true,
        }
    }
}

/// Append-only JSONL log writer with multi-level fallback.
pub struct JsonlWriter {
    config: JsonlConfig,
    writer: Option<BufWriter<File>>,
    state: WriterState,
    lines_written: u64,
}

impl JsonlWriter {
    /// Open the JSONL log file. Falls through the degradation chain on failure.
    #[must_use]
    pub fn open(config: JsonlConfig) -> Self {
        let mut w = Self {
            config,
            writer: None,
            state: WriterState::Discard,
            lines_written: 0,
        };
        w.try_open_primary();
        w
    }

    /// Write a single log entry as one atomic JSONL line.
    pub fn write_entry(&mut self, entry: &LogEntry) {
        let line = match serde_json::to_string(entry) {
            Ok(json) => format!("{json}\n"),
            Err(e) => {
                // Serialization failure is a programming error; note it and bail.
                self.notice(&format!("serialize error: {e}"));
                return;
            }
        };
        self.write_line(&line);
    }

    /// Flush buffers.
    pub fn flush(&mut self) {
        if let Some(w) = self.writer.as_mut() {
            let _ = w.flush();
        }
    }

    /// Current degradation state, for diagnostics.
    #[must_use]
    pub const fn state(&self) -> &'static str {
        match self.state {
            WriterState::Normal => "normal",
            WriterState::Fallback => "fallback",
            WriterState::Stderr => "stderr",
            WriterState::Discard => "discard",
        }
    }

    /// Number of lines accepted by the current sink.
    #[must_use]
    pub const fn lines_written(&self) -> u64 {
        self.lines_written
    }

    // ──────────────────── internals ────────────────────

    fn write_line(&mut self, line: &str) {
        match self.state {
            WriterState::Normal | WriterState::Fallback => {
                if let Some(w) = self.writer.as_mut() {
                    if w.write_all(line.as_bytes()).is_err() {
                        self.degrade();
                        self.write_line(line); // retry at next level
                        return;
                    }
                    self.lines_written += 1;
                } else {
                    self.degrade();
                    self.write_line(line);
                }
            }
            WriterState::Stderr => {
                let _ = write!(io::stderr(), "[WOOF-JSONL] {line}");
                self.lines_written += 1;
            }
            WriterState::Discard => {
                // Silently drop.
            }
        }
    }

    fn try_open_primary(&mut self) {
        match open_append(&self.config.path) {
            Ok(file) => {
                self.writer = Some(BufWriter::new(file));
                self.state = WriterState::Normal;
            }
            Err(_) => self.try_open_fallback(),
        }
    }

    fn try_open_fallback(&mut self) {
        if let Some(fb) = self.config.fallback_path.clone() {
            match open_append(&fb) {
                Ok(file) => {
                    self.notice(&format!(
                        "primary path failed, using fallback: {}",
                        fb.display()
                    ));
                    self.writer = Some(BufWriter::new(file));
                    self.state = WriterState::Fallback;
                }
                Err(_) => {
                    self.state = WriterState::Stderr;
                    self.notice("both primary and fallback paths failed, using stderr");
                }
            }
        } else {
            self.state = WriterState::Stderr;
            self.notice("primary path failed and no fallback configured, using stderr");
        }
    }

    fn degrade(&mut self) {
        self.writer = None;
        match self.state {
            WriterState::Normal => self.try_open_fallback(),
            WriterState::Fallback => {
                self.state = WriterState::Stderr;
                self.notice("fallback path failed, using stderr");
            }
            WriterState::Stderr => self.state = WriterState::Discard,
            WriterState::Discard => {}
        }
    }

    fn notice(&self, message: &str) {
        if self.config.stderr_notices {
            let _ = writeln!(io::stderr(), "[WOOF-JSONL] {message}");
        }
    }
}

impl Drop for JsonlWriter {
    fn drop(&mut self) {
        self.flush();
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_config(dir: &tempfile::TempDir) -> JsonlConfig {
        JsonlConfig {
            path: dir.path().join("activity.jsonl"),
            fallback_path: Some(dir.path().join("fallback.jsonl")),
            stderr_notices: false,
        }
    }

    #[test]
    fn writes_parseable_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);
        let path = config.path.clone();

        let mut writer = JsonlWriter::open(config);
        assert_eq!(writer.state(), "normal");
        writer.write_entry(
            &LogEntry::new(EventType::ExpansionToggle, Severity::Info).with_expanded(true),
        );
        writer.write_entry(&LogEntry::new(EventType::AppStop, Severity::Info));
        writer.flush();

        let raw = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: LogEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.event, EventType::ExpansionToggle);
        assert_eq!(first.expanded, Some(true));

        let second: LogEntry = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.event, EventType::AppStop);
        assert_eq!(second.expanded, None);
    }

    #[test]
    fn appends_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);
        let path = config.path.clone();

        {
            let mut w = JsonlWriter::open(config.clone());
            w.write_entry(&LogEntry::new(EventType::AppStart, Severity::Info));
        }
        {
            let mut w = JsonlWriter::open(config);
            w.write_entry(&LogEntry::new(EventType::AppStop, Severity::Info));
        }

        let raw = fs::read_to_string(path).unwrap();
        assert_eq!(raw.lines().count(), 2);
    }

    #[test]
    fn unwritable_primary_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let config = JsonlConfig {
            // A directory cannot be opened for append.
            path: dir.path().to_path_buf(),
            fallback_path: Some(dir.path().join("fallback.jsonl")),
            stderr_notices: false,
        };
        let fallback = config.fallback_path.clone().unwrap();

        let mut writer = JsonlWriter::open(config);
        assert_eq!(writer.state(), "fallback");
        writer.write_entry(&LogEntry::new(EventType::AppStart, Severity::Info));
        writer.flush();

        assert_eq!(fs::read_to_string(fallback).unwrap().lines().count(), 1);
    }

    #[test]
    fn skipped_optionals_are_omitted_from_json() {
        let entry = LogEntry::new(EventType::Resize, Severity::Info).with_size(80, 24);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"cols\":80"));
        assert!(json.contains("\"rows\":24"));
        assert!(!json.contains("expanded"));
        assert!(!json.contains("error_code"));
    }
}
