//! Command implementations for strata-cli

pub mod check;
pub mod resolve;

pub use check::run_check;
pub use resolve::run_resolve;
