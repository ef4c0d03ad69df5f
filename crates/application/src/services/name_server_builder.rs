use dnsplan_domain::config::RawNameServer;
use dnsplan_domain::{DomainError, DomainMatchingType, Endpoint, NameServerEntry};
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use tracing::{debug, warn};

use super::GeositeExpander;

/// Compiles server descriptors into upstream entries with prioritized domains.
pub struct NameServerBuilder {
    expander: GeositeExpander,
}

impl NameServerBuilder {
    pub fn new(expander: GeositeExpander) -> Self {
        Self { expander }
    }

    pub fn build(&self, servers: &[RawNameServer]) -> Result<Vec<NameServerEntry>, DomainError> {
        servers.iter().map(|server| self.build_one(server)).collect()
    }

    fn build_one(&self, server: &RawNameServer) -> Result<NameServerEntry, DomainError> {
        let address = Endpoint::parse(server.address(), server.port())?;
        let mut entry = NameServerEntry::new(address);

        // Bare patterns match the domain and its subdomains; a geosite
        // reference becomes a contiguous run at its declared position.
        for pattern in server.domains() {
            let rules = self
                .expander
                .resolve(pattern, DomainMatchingType::Subdomain)?;
            entry.prioritized_domains.extend(rules);
        }

        entry.expected_ips = server
            .expect_ips()
            .iter()
            .map(|value| parse_expected_ip(value))
            .collect::<Result<_, _>>()?;

        if entry.address.is_localhost() && !entry.prioritized_domains.is_empty() {
            warn!(
                domains = entry.prioritized_domains.len(),
                "Prioritized domains on the localhost server are resolved by the system resolver"
            );
        }

        debug!(
            server = %entry.address,
            domains = entry.prioritized_domains.len(),
            expected_ips = entry.expected_ips.len(),
            "Name server compiled"
        );

        Ok(entry)
    }
}

fn parse_expected_ip(value: &str) -> Result<IpNetwork, DomainError> {
    let trimmed = value.trim();
    if let Ok(ip) = trimmed.parse::<IpAddr>() {
        return Ok(IpNetwork::from(ip));
    }
    trimmed
        .parse::<IpNetwork>()
        .map_err(|_| DomainError::InvalidAddress(value.to_string()))
}
