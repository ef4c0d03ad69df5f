use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `dns` section as written by the user, before compilation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDnsConfig {
    #[serde(default)]
    pub tag: Option<String>,

    #[serde(default)]
    pub servers: Vec<RawNameServer>,

    #[serde(default)]
    pub hosts: HostsTable,

    #[serde(default, alias = "client_ip")]
    pub client_ip: Option<String>,
}

impl RawDnsConfig {
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty() && self.hosts.is_empty()
    }
}

/// A server is either a bare address string or a detailed object.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawNameServer {
    Address(String),
    Detailed(RawNameServerSpec),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNameServerSpec {
    pub address: String,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub domains: Vec<String>,

    #[serde(default, alias = "expect_ips")]
    pub expect_ips: Vec<String>,
}

impl RawNameServer {
    pub fn address(&self) -> &str {
        match self {
            RawNameServer::Address(address) => address,
            RawNameServer::Detailed(spec) => &spec.address,
        }
    }

    pub fn port(&self) -> Option<u16> {
        match self {
            RawNameServer::Address(_) => None,
            RawNameServer::Detailed(spec) => spec.port,
        }
    }

    pub fn domains(&self) -> &[String] {
        match self {
            RawNameServer::Address(_) => &[],
            RawNameServer::Detailed(spec) => &spec.domains,
        }
    }

    pub fn expect_ips(&self) -> &[String] {
        match self {
            RawNameServer::Address(_) => &[],
            RawNameServer::Detailed(spec) => &spec.expect_ips,
        }
    }
}

/// One address or an ordered list of addresses for a hosts entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HostAddresses {
    Single(String),
    Multiple(Vec<String>),
}

impl HostAddresses {
    pub fn values(&self) -> &[String] {
        match self {
            HostAddresses::Single(value) => std::slice::from_ref(value),
            HostAddresses::Multiple(values) => values,
        }
    }
}

impl From<&str> for HostAddresses {
    fn from(value: &str) -> Self {
        HostAddresses::Single(value.to_string())
    }
}

impl From<Vec<&str>> for HostAddresses {
    fn from(values: Vec<&str>) -> Self {
        HostAddresses::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Pattern → address table that keeps the order keys appear in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsTable {
    entries: Vec<(String, HostAddresses)>,
}

impl HostsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pattern: impl Into<String>, addresses: impl Into<HostAddresses>) {
        self.entries.push((pattern.into(), addresses.into()));
    }

    pub fn with(mut self, pattern: impl Into<String>, addresses: impl Into<HostAddresses>) -> Self {
        self.insert(pattern, addresses);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HostAddresses)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for HostsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, addresses) in &self.entries {
            map.serialize_entry(pattern, addresses)?;
        }
        map.end()
    }
}

struct HostsTableVisitor;

impl<'de> Visitor<'de> for HostsTableVisitor {
    type Value = HostsTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of domain patterns to an address or list of addresses")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = HostsTable {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((pattern, addresses)) = access.next_entry::<String, HostAddresses>()? {
            table.entries.push((pattern, addresses));
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for HostsTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HostsTableVisitor)
    }
}
