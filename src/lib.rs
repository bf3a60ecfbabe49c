#![forbid(unsafe_code)]

//! Woof — terminal browser for a kennel's dog adoption profiles.
//!
//! One screen: a top bar and a scrollable list of profile cards (icon, name,
//! age). A single shared flag expands every card in place to reveal a hobby
//! blurb; toggling any card flips them all.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use woof::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use woof::core::config::Config;
//! use woof::store::ProfileStore;
//! ```

pub mod prelude;

pub mod assets;
pub mod core;
pub mod logger;
pub mod store;
#[cfg(feature = "tui")]
pub mod tui;
