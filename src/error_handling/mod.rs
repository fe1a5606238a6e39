//! Error handling.
//!
//! This module provides:
//! - The closed set of lookup failures and their printed text
//! - Initialization errors

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError};
