use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How a compiled domain entry is matched against a query name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainMatchingType {
    /// Exact match.
    Full,
    /// The domain itself or any of its subdomains.
    Subdomain,
    /// Substring match.
    Plain,
    /// Regular expression match.
    Regex,
}

impl DomainMatchingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainMatchingType::Full => "full",
            DomainMatchingType::Subdomain => "subdomain",
            DomainMatchingType::Plain => "plain",
            DomainMatchingType::Regex => "regex",
        }
    }

    /// Whether entries of this type hold a domain literal and are therefore IDN-normalized.
    pub fn is_domain_literal(&self) -> bool {
        matches!(self, DomainMatchingType::Full | DomainMatchingType::Subdomain)
    }
}

impl fmt::Display for DomainMatchingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainRule {
    #[serde(rename = "type")]
    pub matching_type: DomainMatchingType,
    pub domain: Arc<str>,
}

impl DomainRule {
    pub fn new(matching_type: DomainMatchingType, domain: impl Into<Arc<str>>) -> Self {
        Self {
            matching_type,
            domain: domain.into(),
        }
    }

    pub fn full(domain: impl Into<Arc<str>>) -> Self {
        Self::new(DomainMatchingType::Full, domain)
    }

    pub fn subdomain(domain: impl Into<Arc<str>>) -> Self {
        Self::new(DomainMatchingType::Subdomain, domain)
    }

    pub fn plain(domain: impl Into<Arc<str>>) -> Self {
        Self::new(DomainMatchingType::Plain, domain)
    }

    pub fn regex(domain: impl Into<Arc<str>>) -> Self {
        Self::new(DomainMatchingType::Regex, domain)
    }
}

impl fmt::Display for DomainRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.matching_type, self.domain)
    }
}
