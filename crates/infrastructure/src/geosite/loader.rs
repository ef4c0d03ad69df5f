use dnsplan_domain::{DomainError, GeositeEntry, GeositeReference};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::domain_list::{parse_domain_list, DomainListLine};
use super::repository::InMemoryGeositeRepository;

/// Loads geosite assets from a directory tree laid out as
/// `<root>/<asset>/<category>`, one domain-list file per category.
pub struct DomainListLoader {
    root: PathBuf,
}

impl DomainListLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads every asset directory under the root.
    pub fn load(&self) -> Result<InMemoryGeositeRepository, DomainError> {
        let mut repo = InMemoryGeositeRepository::new();

        for path in read_dir_paths(&self.root)? {
            if !path.is_dir() {
                continue;
            }
            let Some(asset) = file_name(&path) else {
                warn!(path = %path.display(), "Skipping asset directory with a non UTF-8 name");
                continue;
            };

            for (category, entries) in self.load_asset(asset)? {
                repo.insert(asset, &category, entries);
            }
        }

        info!(
            root = %self.root.display(),
            assets = repo.asset_count(),
            categories = repo.len(),
            "Geosite assets loaded"
        );
        Ok(repo)
    }

    /// Loads the categories of a single asset with all includes resolved.
    pub fn load_asset(
        &self,
        asset: &str,
    ) -> Result<FxHashMap<String, Vec<GeositeEntry>>, DomainError> {
        let dir = self.root.join(asset);
        let mut sources: FxHashMap<String, Vec<DomainListLine>> = FxHashMap::default();

        for path in read_dir_paths(&dir)? {
            if !path.is_file() {
                continue;
            }
            let Some(name) = file_name(&path).filter(|name| !name.starts_with('.')) else {
                continue;
            };

            let content = fs::read_to_string(&path).map_err(|e| {
                DomainError::GeositeUnavailable(format!("{}: {}", path.display(), e))
            })?;
            let lines = parse_domain_list(&content)?;

            if sources.insert(name.to_ascii_lowercase(), lines).is_some() {
                warn!(
                    asset = asset,
                    category = name,
                    "Category defined twice with different case, keeping the last file read"
                );
            }
        }

        let mut resolved = FxHashMap::default();
        let mut names: Vec<&String> = sources.keys().collect();
        names.sort_unstable();
        for name in names {
            resolve(asset, name, &sources, &mut resolved, &mut Vec::new())?;
        }

        debug!(asset = asset, categories = resolved.len(), "Geosite asset loaded");
        Ok(resolved)
    }
}

/// Resolves `category` and everything it includes, memoizing into `resolved`.
/// `stack` holds the include chain being expanded.
fn resolve(
    asset: &str,
    category: &str,
    sources: &FxHashMap<String, Vec<DomainListLine>>,
    resolved: &mut FxHashMap<String, Vec<GeositeEntry>>,
    stack: &mut Vec<String>,
) -> Result<Vec<GeositeEntry>, DomainError> {
    if let Some(entries) = resolved.get(category) {
        return Ok(entries.clone());
    }
    if stack.iter().any(|name| name == category) {
        return Err(DomainError::InvalidPattern(format!("include:{}", category)));
    }

    let lines = sources.get(category).ok_or_else(|| {
        DomainError::UnknownCategory(GeositeReference::new(category).in_asset(asset).to_string())
    })?;

    stack.push(category.to_string());
    let mut entries = Vec::with_capacity(lines.len());
    for line in lines {
        match line {
            DomainListLine::Entry(entry) => entries.push(entry.clone()),
            DomainListLine::Include {
                category: included,
                attributes,
            } => {
                let included = resolve(asset, included, sources, resolved, stack)?;
                entries.extend(
                    included
                        .into_iter()
                        .filter(|entry| entry.has_all_attributes(attributes)),
                );
            }
        }
    }
    stack.pop();

    resolved.insert(category.to_string(), entries.clone());
    Ok(entries)
}

fn read_dir_paths(dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
    let unavailable =
        |e: std::io::Error| DomainError::GeositeUnavailable(format!("{}: {}", dir.display(), e));

    let mut paths = fs::read_dir(dir)
        .map_err(unavailable)?
        .map(|entry| entry.map(|e| e.path()).map_err(unavailable))
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}
