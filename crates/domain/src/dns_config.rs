use crate::domain_rule::{DomainMatchingType, DomainRule};
use crate::endpoint::Endpoint;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;

/// An upstream server together with the domains it should be preferred for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameServerEntry {
    pub address: Endpoint,
    pub prioritized_domains: Vec<DomainRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected_ips: Vec<IpNetwork>,
}

impl NameServerEntry {
    pub fn new(address: Endpoint) -> Self {
        Self {
            address,
            prioritized_domains: Vec::new(),
            expected_ips: Vec::new(),
        }
    }
}

/// A static answer for every name matched by `matching_type`/`domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMappingEntry {
    #[serde(rename = "type")]
    pub matching_type: DomainMatchingType,
    pub domain: Arc<str>,
    pub addresses: Vec<IpAddr>,
}

impl HostMappingEntry {
    pub fn new(rule: DomainRule, addresses: Vec<IpAddr>) -> Self {
        Self {
            matching_type: rule.matching_type,
            domain: rule.domain,
            addresses,
        }
    }

    pub fn rule(&self) -> DomainRule {
        DomainRule::new(self.matching_type, self.domain.clone())
    }
}

/// Fully resolved DNS configuration handed to the runtime resolver.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsBuildConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Arc<str>>,
    pub servers: Vec<NameServerEntry>,
    pub static_hosts: Vec<HostMappingEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<IpAddr>,
}

impl DnsBuildConfig {
    pub fn rule_count(&self) -> usize {
        self.servers
            .iter()
            .map(|s| s.prioritized_domains.len())
            .sum::<usize>()
            + self.static_hosts.len()
    }
}
