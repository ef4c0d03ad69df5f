#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Asset directory tree written to a temporary location.
pub struct AssetTree {
    dir: TempDir,
}

impl AssetTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with_category(self, asset: &str, category: &str, content: &str) -> Self {
        let asset_dir = self.dir.path().join(asset);
        fs::create_dir_all(&asset_dir).unwrap();
        fs::write(asset_dir.join(category), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
