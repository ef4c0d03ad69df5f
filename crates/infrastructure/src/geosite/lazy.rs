use dnsplan_application::ports::GeositeRepository;
use dnsplan_domain::{DomainError, GeositeEntry};
use std::sync::{Arc, OnceLock};
use tracing::error;

use super::loader::DomainListLoader;
use super::repository::InMemoryGeositeRepository;

/// Reads the asset tree on the first lookup.
///
/// Configurations without geosite references never touch the disk, and a
/// missing asset directory only fails the build that needs it. The outcome
/// of the first load, success or failure, is reused by every later lookup.
/// Any defect in the asset tree, such as a malformed line or a dangling
/// include, is reported as `GeositeUnavailable`.
pub struct LazyGeositeRepository {
    loader: DomainListLoader,
    loaded: OnceLock<Result<InMemoryGeositeRepository, DomainError>>,
}

impl LazyGeositeRepository {
    pub fn new(loader: DomainListLoader) -> Self {
        Self {
            loader,
            loaded: OnceLock::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    fn repository(&self) -> Result<&InMemoryGeositeRepository, DomainError> {
        self.loaded
            .get_or_init(|| {
                self.loader.load().map_err(|e| {
                    let root = self.loader.root().display();
                    error!(root = %root, error = %e, "Failed to load geosite assets");
                    match e {
                        DomainError::GeositeUnavailable(_) => e,
                        other => DomainError::GeositeUnavailable(format!("{}: {}", root, other)),
                    }
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl GeositeRepository for LazyGeositeRepository {
    fn lookup(
        &self,
        asset: &str,
        category: &str,
    ) -> Result<Option<Arc<[GeositeEntry]>>, DomainError> {
        self.repository()?.lookup(asset, category)
    }
}
