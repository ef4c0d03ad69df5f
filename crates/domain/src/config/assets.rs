use serde::{Deserialize, Serialize};

/// Where geosite assets are read from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_path")]
    pub path: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            path: default_assets_path(),
        }
    }
}

fn default_assets_path() -> String {
    "/usr/share/dnsplan".to_string()
}
