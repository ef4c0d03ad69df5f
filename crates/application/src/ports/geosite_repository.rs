use dnsplan_domain::{DomainError, GeositeEntry};
use std::sync::Arc;

/// Read-only access to a loaded domain-category database.
///
/// Implementations are loaded once and shared across builds, so lookups must
/// not mutate state.
pub trait GeositeRepository: Send + Sync {
    /// Entries stored under `category` (case-insensitive) in `asset`.
    ///
    /// Returns `Ok(None)` when the category does not exist and
    /// `Err(DomainError::GeositeUnavailable)` when the asset itself cannot be read.
    fn lookup(
        &self,
        asset: &str,
        category: &str,
    ) -> Result<Option<Arc<[GeositeEntry]>>, DomainError>;
}
