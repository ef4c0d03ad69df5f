use crate::domain_rule::{DomainMatchingType, DomainRule};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One classified domain stored under a geosite category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeositeEntry {
    #[serde(rename = "type")]
    pub matching_type: DomainMatchingType,
    pub domain: Arc<str>,
    #[serde(default)]
    pub attributes: Vec<Arc<str>>,
}

impl GeositeEntry {
    pub fn new(matching_type: DomainMatchingType, domain: impl Into<Arc<str>>) -> Self {
        Self {
            matching_type,
            domain: domain.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Arc<str>>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(attribute))
    }

    /// True when the entry carries every attribute in `required`.
    pub fn has_all_attributes(&self, required: &[Arc<str>]) -> bool {
        required.iter().all(|attr| self.has_attribute(attr))
    }

    pub fn to_rule(&self) -> DomainRule {
        DomainRule::new(self.matching_type, self.domain.clone())
    }
}
