use dnsplan_domain::{DnsBuildConfig, DomainError, RawDnsConfig};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::GeositeRepository;
use crate::services::{GeositeExpander, HostMappingBuilder, NameServerBuilder};

/// Compiles a raw `dns` section into the configuration used by the resolver.
///
/// The use case holds no state between calls; the geosite repository is
/// only read.
pub struct BuildDnsConfigUseCase {
    name_servers: NameServerBuilder,
    hosts: HostMappingBuilder,
}

impl BuildDnsConfigUseCase {
    pub fn new(geosite: Arc<dyn GeositeRepository>) -> Self {
        let expander = GeositeExpander::new(geosite);
        Self {
            name_servers: NameServerBuilder::new(expander.clone()),
            hosts: HostMappingBuilder::new(expander),
        }
    }

    #[instrument(skip_all, fields(tag = raw.tag.as_deref().unwrap_or("")))]
    pub fn execute(&self, raw: &RawDnsConfig) -> Result<DnsBuildConfig, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::EmptyConfig);
        }

        let servers = self.name_servers.build(&raw.servers)?;
        let static_hosts = self.hosts.build(&raw.hosts)?;
        let client_ip = raw
            .client_ip
            .as_deref()
            .map(parse_client_ip)
            .transpose()?;

        let config = DnsBuildConfig {
            tag: raw.tag.as_deref().map(Arc::from),
            servers,
            static_hosts,
            client_ip,
        };

        info!(
            servers = config.servers.len(),
            static_hosts = config.static_hosts.len(),
            rules = config.rule_count(),
            client_ip = ?config.client_ip,
            "DNS configuration built"
        );

        Ok(config)
    }
}

fn parse_client_ip(value: &str) -> Result<IpAddr, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidAddress(value.to_string()))
}
