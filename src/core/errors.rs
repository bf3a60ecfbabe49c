//! Woof-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, WoofError>;

/// Top-level error type for the woof binary and library.
#[derive(Debug, Error)]
pub enum WoofError {
    #[error("[WOOF-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[WOOF-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[WOOF-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[WOOF-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[WOOF-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[WOOF-3101] terminal failure during {stage}: {source}")]
    Terminal {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("[WOOF-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl WoofError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "WOOF-1001",
            Self::MissingConfig { .. } => "WOOF-1002",
            Self::ConfigParse { .. } => "WOOF-1003",
            Self::Serialization { .. } => "WOOF-2101",
            Self::Io { .. } => "WOOF-3002",
            Self::Terminal { .. } => "WOOF-3101",
            Self::Runtime { .. } => "WOOF-3900",
        }
    }

    /// Whether retrying might resolve the failure.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Terminal { .. } | Self::Runtime { .. }
        )
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for terminal-layer failures.
    #[must_use]
    pub const fn terminal(stage: &'static str, source: std::io::Error) -> Self {
        Self::Terminal { stage, source }
    }
}

impl From<serde_json::Error> for WoofError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for WoofError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<WoofError> {
        vec![
            WoofError::InvalidConfig {
                details: String::new(),
            },
            WoofError::MissingConfig {
                path: PathBuf::new(),
            },
            WoofError::ConfigParse {
                context: "",
                details: String::new(),
            },
            WoofError::Serialization {
                context: "",
                details: String::new(),
            },
            WoofError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other("test"),
            },
            WoofError::Terminal {
                stage: "setup",
                source: std::io::Error::other("test"),
            },
            WoofError::Runtime {
                details: String::new(),
            },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let errors = sample_errors();
        let codes: Vec<&str> = errors.iter().map(WoofError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_woof_prefix() {
        for err in &sample_errors() {
            assert!(
                err.code().starts_with("WOOF-"),
                "code {} must start with WOOF-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = WoofError::InvalidConfig {
            details: "bad value".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("WOOF-1001"),
            "display should contain error code: {msg}"
        );
        assert!(
            msg.contains("bad value"),
            "display should contain details: {msg}"
        );
    }

    #[test]
    fn retryable_errors_are_correct() {
        assert!(WoofError::io("/tmp/x", std::io::Error::other("test")).is_retryable());
        assert!(WoofError::terminal("teardown", std::io::Error::other("test")).is_retryable());
        assert!(
            WoofError::Runtime {
                details: String::new()
            }
            .is_retryable()
        );

        assert!(
            !WoofError::InvalidConfig {
                details: String::new()
            }
            .is_retryable()
        );
        assert!(
            !WoofError::MissingConfig {
                path: PathBuf::new()
            }
            .is_retryable()
        );
    }

    #[test]
    fn io_convenience_constructor() {
        let err = WoofError::io(
            "/tmp/test.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "WOOF-3002");
        assert!(err.to_string().contains("/tmp/test.txt"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: WoofError = json_err.into();
        assert_eq!(err.code(), "WOOF-2101");
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: WoofError = toml_err.into();
        assert_eq!(err.code(), "WOOF-1003");
    }
}
