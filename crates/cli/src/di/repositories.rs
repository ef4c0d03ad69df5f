use dnsplan_application::ports::GeositeRepository;
use dnsplan_domain::Config;
use dnsplan_infrastructure::geosite::{DomainListLoader, LazyGeositeRepository};
use std::sync::Arc;
use tracing::debug;

pub struct Repositories {
    pub geosite: Arc<dyn GeositeRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        debug!(assets = %config.assets.path, "Using geosite asset directory");
        let loader = DomainListLoader::new(&config.assets.path);

        Self {
            geosite: Arc::new(LazyGeositeRepository::new(loader)),
        }
    }
}
