//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, fixed output messages, exit codes)
//! - CLI option types and parsing
//! - Single-dash argument normalization

mod args;
mod constants;
mod types;

// Re-export all constants
pub use args::normalize_args;
pub use constants::*;
pub(crate) use types::non_empty;
pub use types::{Config, FailOn, LogFormat, LogLevel, Opt};
