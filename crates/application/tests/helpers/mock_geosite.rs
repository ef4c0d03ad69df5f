#![allow(dead_code)]

use dnsplan_application::ports::GeositeRepository;
use dnsplan_domain::{DomainError, DomainMatchingType, GeositeEntry};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockGeositeRepository {
    categories: Arc<RwLock<HashMap<(String, String), Arc<[GeositeEntry]>>>>,
    unavailable: Arc<RwLock<bool>>,
    lookups: Arc<AtomicUsize>,
}

impl MockGeositeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Database with the `tld-cn` category used across the scenario tests.
    pub fn with_tld_cn() -> Self {
        let repo = Self::new();
        repo.insert(
            "tld-cn",
            vec![
                GeositeEntry::new(DomainMatchingType::Subdomain, "cn"),
                GeositeEntry::new(DomainMatchingType::Subdomain, "中国"),
            ],
        );
        repo
    }

    pub fn insert(&self, category: &str, entries: Vec<GeositeEntry>) {
        self.insert_in_asset("geosite", category, entries);
    }

    pub fn insert_in_asset(&self, asset: &str, category: &str, entries: Vec<GeositeEntry>) {
        self.categories.write().unwrap().insert(
            (asset.to_string(), category.to_lowercase()),
            Arc::from(entries),
        );
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().unwrap() = unavailable;
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl GeositeRepository for MockGeositeRepository {
    fn lookup(
        &self,
        asset: &str,
        category: &str,
    ) -> Result<Option<Arc<[GeositeEntry]>>, DomainError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        if *self.unavailable.read().unwrap() {
            return Err(DomainError::GeositeUnavailable(format!(
                "{}: mock database closed",
                asset
            )));
        }

        Ok(self
            .categories
            .read()
            .unwrap()
            .get(&(asset.to_string(), category.to_lowercase()))
            .cloned())
    }
}
