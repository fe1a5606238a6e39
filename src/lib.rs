//! lookup library: succinct DNS record lookups for shell scripts
//!
//! This library selects one DNS lookup from the command-line configuration,
//! runs it through a resolver backend under a deadline and prints one
//! tab-separated line per record.
//!
//! # Example
//!
//! ```no_run
//! use lookup::{initialization::init_resolver, run, Config, HickoryBackend};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     mx: Some("example.com".to_string()),
//!     ..Default::default()
//! };
//!
//! let backend = HickoryBackend::new(init_resolver(config.timeout()));
//! let mut stdout = std::io::stdout();
//! let report = run(&config, &backend, &mut stdout).await?;
//! println!("{} record(s)", report.records);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod dispatch;
mod dns;
mod error_handling;
pub mod initialization;
mod query;
pub mod usage;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, Opt};
pub use dispatch::{dispatch, LookupReport};
pub use dns::{HickoryBackend, LookupBackend, Record};
pub use error_handling::{InitializationError, LookupError};
pub use query::{Query, RecordKind};
pub use run::{evaluate_exit_code, run};

// Internal run module (selection, dispatch and exit policy)
mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use log::debug;

    use crate::config::{Config, FailOn, EXIT_LOOKUP_FAILED, NO_QUERY_HINT};
    use crate::dispatch::{dispatch, LookupReport};
    use crate::dns::LookupBackend;
    use crate::query::Query;

    /// Runs the lookup described by `config`, writing results to `out`.
    ///
    /// When the configuration selects no lookup, writes the `-help` hint and
    /// returns an empty report.
    ///
    /// # Errors
    ///
    /// Only fails when writing to `out` fails; lookup failures are reported in
    /// the returned [`LookupReport`].
    pub async fn run<B, W>(config: &Config, backend: &B, out: &mut W) -> Result<LookupReport>
    where
        B: LookupBackend + ?Sized,
        W: Write,
    {
        let Some(query) = Query::select(config) else {
            debug!("No lookup requested");
            writeln!(out, "{NO_QUERY_HINT}").context("Failed to write hint")?;
            return Ok(LookupReport::default());
        };

        dispatch(&query, backend, config.timeout(), out).await
    }

    /// Maps a finished lookup to the process exit code under `fail_on`.
    pub fn evaluate_exit_code(fail_on: FailOn, report: &LookupReport) -> i32 {
        match fail_on {
            FailOn::Never => 0,
            FailOn::Error if report.failed() => EXIT_LOOKUP_FAILED,
            FailOn::Error => 0,
        }
    }
}
