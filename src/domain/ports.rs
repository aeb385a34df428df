use crate::domain::model::{AvailabilityStatus, DedupeResponse, Edition};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Holdings service: borrow-availability across all editions of a work.
#[async_trait]
pub trait WorkAvailability: Send + Sync {
    async fn work_availability(
        &self,
        work_id: &str,
    ) -> Result<HashMap<String, AvailabilityStatus>>;
}

/// Dedupe registry: is this ISBN already scanned, promised or sponsored?
#[async_trait]
pub trait DedupeRegistry: Send + Sync {
    async fn lookup_isbn(&self, isbn13: &str) -> Result<DedupeResponse>;
}

/// Secondhand-bookseller metadata: acquisition price estimate, if any.
#[async_trait]
pub trait BooksellerMetadata: Send + Sync {
    async fn price_estimate(&self, isbn13: &str) -> Result<Option<f64>>;
}

/// Operator-specific acceptance rule, applied after every other check has
/// passed. The rule itself is private to the program operator, so the core
/// only knows this boundary.
pub trait SponsorshipPolicy: Send + Sync {
    fn is_accepted(&self, edition: &Edition) -> bool;
}
