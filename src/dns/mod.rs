//! DNS resolution and record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Address lookups (A/AAAA records)
//! - Alias, mail exchanger, nameserver, service and text record queries
//! - Reverse lookups (PTR records)
//!
//! Lookups go through the [`LookupBackend`] trait so the dispatcher can be
//! exercised without a network.

mod backend;
mod records;
mod resolution;

// Re-export public API
pub use backend::LookupBackend;
pub use records::Record;
pub use resolution::HickoryBackend;

#[cfg(test)]
mod tests;
