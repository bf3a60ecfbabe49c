//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use woof::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{Result, WoofError};

// Assets
pub use crate::assets::{AssetResolver, GlyphArt, ImageRes, StaticAssets, TextRes};

// Store
pub use crate::store::{DogRecord, ProfileStore};

// Logger
pub use crate::logger::{JsonlConfig, JsonlWriter, LogEntry};

// TUI
#[cfg(feature = "tui")]
pub use crate::tui::model::{AppModel, AppMsg};
#[cfg(feature = "tui")]
pub use crate::tui::update::update;
#[cfg(feature = "tui")]
pub use crate::tui::{ScreenRuntimeConfig, run_screen};
