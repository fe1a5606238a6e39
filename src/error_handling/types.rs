//! Error type definitions.
//!
//! This module defines the error types used throughout the application.
//! `Display` on [`LookupError`] is the text printed on standard output, so it
//! must keep the historical wording.

use log::SetLoggerError;
use thiserror::Error;

use crate::config::{NO_SUCH_HOST, SRV_ARGUMENTS_REQUIRED, TIMEOUT_MESSAGE};

/// Why a single lookup produced no records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The resolver answered with an error (NXDOMAIN, SERVFAIL, unreachable, ...).
    #[error("lookup {target}: {reason}")]
    ResolutionFailed {
        /// Name or address that was queried
        target: String,
        /// Resolver's description of the failure
        reason: String,
    },

    /// An SRV lookup was requested without both `-p` and `-s`.
    #[error("{}", SRV_ARGUMENTS_REQUIRED)]
    MissingArgument,

    /// The lookup deadline elapsed.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,
}

impl LookupError {
    /// Resolution failure with an arbitrary reason.
    pub fn resolution_failed(target: impl Into<String>, reason: impl Into<String>) -> Self {
        LookupError::ResolutionFailed {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// NXDOMAIN or an empty answer.
    pub fn no_such_host(target: impl Into<String>) -> Self {
        Self::resolution_failed(target, NO_SUCH_HOST)
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
