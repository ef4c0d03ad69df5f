use dnsplan_domain::{DomainError, DomainMatchingType, HostAddresses, HostMappingEntry, HostsTable};
use std::net::IpAddr;
use tracing::debug;

use super::GeositeExpander;

/// Compiles the `hosts` table into static host entries.
pub struct HostMappingBuilder {
    expander: GeositeExpander,
}

impl HostMappingBuilder {
    pub fn new(expander: GeositeExpander) -> Self {
        Self { expander }
    }

    /// Bare keys are exact matches. A geosite key yields one entry per
    /// expanded rule, each carrying the same addresses.
    pub fn build(&self, hosts: &HostsTable) -> Result<Vec<HostMappingEntry>, DomainError> {
        let mut entries = Vec::with_capacity(hosts.len());

        for (pattern, values) in hosts.iter() {
            let addresses = parse_addresses(pattern, values)?;
            let rules = self.expander.resolve(pattern, DomainMatchingType::Full)?;

            debug!(
                pattern = pattern,
                rules = rules.len(),
                addresses = addresses.len(),
                "Host mapping compiled"
            );

            entries.extend(
                rules
                    .into_iter()
                    .map(|rule| HostMappingEntry::new(rule, addresses.clone())),
            );
        }

        Ok(entries)
    }
}

fn parse_addresses(pattern: &str, values: &HostAddresses) -> Result<Vec<IpAddr>, DomainError> {
    let values = values.values();
    if values.is_empty() {
        return Err(DomainError::InvalidAddress(format!("{} => []", pattern)));
    }

    values
        .iter()
        .map(|value| {
            value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| DomainError::InvalidAddress(value.clone()))
        })
        .collect()
}
