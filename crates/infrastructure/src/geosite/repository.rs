use dnsplan_application::ports::GeositeRepository;
use dnsplan_domain::{DomainError, GeositeEntry};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Geosite categories held in memory, keyed by asset then category.
///
/// Category names are stored lowercased and looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGeositeRepository {
    assets: FxHashMap<String, FxHashMap<String, Arc<[GeositeEntry]>>>,
}

impl InMemoryGeositeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: &str, category: &str, entries: Vec<GeositeEntry>) {
        self.assets
            .entry(asset.to_string())
            .or_default()
            .insert(category.to_ascii_lowercase(), Arc::from(entries));
    }

    pub fn with_category(
        mut self,
        asset: &str,
        category: &str,
        entries: Vec<GeositeEntry>,
    ) -> Self {
        self.insert(asset, category, entries);
        self
    }

    pub fn contains(&self, asset: &str, category: &str) -> bool {
        self.assets
            .get(asset)
            .is_some_and(|categories| categories.contains_key(&category.to_ascii_lowercase()))
    }

    /// Category names of `asset`, sorted.
    pub fn categories(&self, asset: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .assets
            .get(asset)
            .map(|categories| categories.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Total number of categories across all assets.
    pub fn len(&self) -> usize {
        self.assets.values().map(|categories| categories.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GeositeRepository for InMemoryGeositeRepository {
    fn lookup(
        &self,
        asset: &str,
        category: &str,
    ) -> Result<Option<Arc<[GeositeEntry]>>, DomainError> {
        Ok(self
            .assets
            .get(asset)
            .and_then(|categories| categories.get(&category.to_ascii_lowercase()))
            .cloned())
    }
}
