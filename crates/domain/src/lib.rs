//! dnsplan domain layer: data model, pattern classification and IDN normalization.
pub mod config;
pub mod dns_config;
pub mod domain_rule;
pub mod endpoint;
pub mod errors;
pub mod geosite;
pub mod idn;
pub mod pattern;

pub use config::{CliOverrides, Config, ConfigError, HostAddresses, HostsTable, RawDnsConfig};
pub use dns_config::{DnsBuildConfig, HostMappingEntry, NameServerEntry};
pub use domain_rule::{DomainMatchingType, DomainRule};
pub use endpoint::{Endpoint, EndpointHost, Network, DEFAULT_DNS_PORT};
pub use errors::DomainError;
pub use geosite::GeositeEntry;
pub use idn::normalize_domain;
pub use pattern::{classify, ClassifiedPattern, GeositeReference, DEFAULT_GEOSITE_ASSET};
