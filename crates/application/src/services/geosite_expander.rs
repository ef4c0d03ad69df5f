use dnsplan_domain::{
    classify, normalize_domain, ClassifiedPattern, DomainError, DomainMatchingType, DomainRule,
    GeositeEntry, GeositeReference,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::GeositeRepository;

/// Turns geosite references into the concrete rules stored in the database.
#[derive(Clone)]
pub struct GeositeExpander {
    repo: Arc<dyn GeositeRepository>,
}

impl GeositeExpander {
    pub fn new(repo: Arc<dyn GeositeRepository>) -> Self {
        Self { repo }
    }

    /// A missing category fails with `UnknownCategory` carrying the
    /// reference in canonical form (`geosite:cat@attr`, lowercased).
    #[instrument(skip_all, fields(reference = %reference))]
    pub fn expand(&self, reference: &GeositeReference) -> Result<Vec<DomainRule>, DomainError> {
        let entries = self
            .repo
            .lookup(&reference.asset, &reference.category)?
            .ok_or_else(|| DomainError::UnknownCategory(reference.to_string()))?;

        let rules: Vec<DomainRule> = entries
            .iter()
            .filter(|entry| entry.has_all_attributes(&reference.attributes))
            .map(normalized_rule)
            .collect();

        if rules.is_empty() && !reference.attributes.is_empty() {
            warn!(
                category = %reference.category,
                total = entries.len(),
                "No geosite entries carry the requested attributes"
            );
        }

        debug!(count = rules.len(), "Geosite reference expanded");
        Ok(rules)
    }

    /// Classifies `pattern` and expands it if it is a geosite reference.
    ///
    /// Direct patterns resolve to a single rule; references resolve to their
    /// entries in database order. `UnknownCategory` carries `pattern` as written.
    pub fn resolve(
        &self,
        pattern: &str,
        default_type: DomainMatchingType,
    ) -> Result<Vec<DomainRule>, DomainError> {
        match classify(pattern, default_type)? {
            ClassifiedPattern::Rule(rule) => Ok(vec![rule]),
            ClassifiedPattern::Geosite(reference) => {
                self.expand(&reference).map_err(|e| match e {
                    DomainError::UnknownCategory(_) => {
                        DomainError::UnknownCategory(pattern.to_string())
                    }
                    other => other,
                })
            }
        }
    }
}

fn normalized_rule(entry: &GeositeEntry) -> DomainRule {
    if entry.matching_type.is_domain_literal() {
        DomainRule::new(entry.matching_type, normalize_domain(&entry.domain).as_ref())
    } else {
        entry.to_rule()
    }
}
