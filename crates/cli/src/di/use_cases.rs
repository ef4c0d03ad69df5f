use super::Repositories;
use dnsplan_application::use_cases::BuildDnsConfigUseCase;
use std::sync::Arc;

pub struct UseCases {
    pub build_dns_config: Arc<BuildDnsConfigUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            build_dns_config: Arc::new(BuildDnsConfigUseCase::new(repos.geosite.clone())),
        }
    }
}
