//! Runs one query and prints its results.
//!
//! The resolver call runs under a single deadline; when it elapses the lookup
//! future is dropped, which cancels the in-flight query. Failures are written
//! to the same output as records.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::dns::LookupBackend;
use crate::error_handling::LookupError;
use crate::query::{Query, RecordKind};

/// What a single invocation did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupReport {
    /// Record type that was looked up, `None` when no lookup was requested
    pub kind: Option<RecordKind>,
    /// Number of record lines written
    pub records: usize,
    /// Why the lookup failed, if it did
    pub failure: Option<LookupError>,
}

impl LookupReport {
    /// True when a lookup was attempted and failed.
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Resolves `query` through `backend` within `timeout` and writes one line per
/// record, or the failure text, to `out`.
///
/// Lookup failures are part of the report, not errors.
///
/// # Errors
///
/// Only fails when writing to `out` fails.
pub async fn dispatch<B, W>(
    query: &Query,
    backend: &B,
    timeout: Duration,
    out: &mut W,
) -> Result<LookupReport>
where
    B: LookupBackend + ?Sized,
    W: Write,
{
    let mut report = LookupReport {
        kind: Some(query.kind()),
        ..Default::default()
    };

    let outcome = match query.validate() {
        Ok(()) => {
            debug!(
                "Looking up {} for {} (timeout {:?})",
                query.kind(),
                query.target(),
                timeout
            );
            if timeout.is_zero() {
                // A zero deadline has already passed; the resolver is never asked
                Err(LookupError::Timeout)
            } else {
                match tokio::time::timeout(timeout, backend.resolve(query)).await {
                    Ok(result) => result,
                    Err(_) => Err(LookupError::Timeout),
                }
            }
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(records) => {
            for record in &records {
                writeln!(out, "{}", record.to_line(query.target()))
                    .context("Failed to write record")?;
            }
            report.records = records.len();
            debug!("{} {} record(s) for {}", records.len(), query.kind(), query.target());
        }
        Err(e) => {
            warn!("{} lookup for {} failed: {e}", query.kind(), query.target());
            writeln!(out, "{e}").context("Failed to write lookup error")?;
            report.failure = Some(e);
        }
    }

    Ok(report)
}
