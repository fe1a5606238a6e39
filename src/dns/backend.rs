//! Resolver seam.
//!
//! The dispatcher only talks to a [`LookupBackend`]; production code uses the
//! hickory-backed implementation, tests plug in canned answers.

use async_trait::async_trait;

use crate::dns::Record;
use crate::error_handling::LookupError;
use crate::query::Query;

/// Something that can answer a [`Query`].
#[async_trait]
pub trait LookupBackend: Send + Sync {
    /// Runs one query and returns every record of the requested type.
    ///
    /// NXDOMAIN and empty answers come back as
    /// [`LookupError::ResolutionFailed`] with the "no such host" reason.
    async fn resolve(&self, query: &Query) -> Result<Vec<Record>, LookupError>;
}
