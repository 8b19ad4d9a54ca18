//! Shared test utilities for the strata workspace.
//!
//! A dev-dependency only, never published.
//!
//! - [`config_dir`]: [`ConfigDir`] builder for trees of configuration documents on disk

pub mod config_dir;

pub use config_dir::ConfigDir;
