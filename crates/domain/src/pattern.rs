//! Classification of human-authored domain patterns.
//!
//! A pattern is either a prefixed form (`full:`, `domain:`, `keyword:`,
//! `regexp:`, `dotless:`, `geosite:`, `ext:`) or a bare domain whose match
//! type is chosen by the caller.

use crate::domain_rule::{DomainMatchingType, DomainRule};
use crate::errors::DomainError;
use crate::idn::normalize_domain;
use std::fmt;
use std::sync::Arc;

/// Asset name used by `geosite:` references.
pub const DEFAULT_GEOSITE_ASSET: &str = "geosite";

const ATTRIBUTE_SEPARATOR: char = '@';

/// Reference to a named category of a geosite asset, optionally filtered by attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeositeReference {
    pub asset: Arc<str>,
    pub category: Arc<str>,
    pub attributes: Vec<Arc<str>>,
}

impl GeositeReference {
    pub fn new(category: &str) -> Self {
        Self {
            asset: Arc::from(DEFAULT_GEOSITE_ASSET),
            category: Arc::from(category.to_ascii_lowercase().as_str()),
            attributes: Vec::new(),
        }
    }

    pub fn in_asset(mut self, asset: &str) -> Self {
        self.asset = Arc::from(asset);
        self
    }

    pub fn with_attribute(mut self, attribute: &str) -> Self {
        self.attributes
            .push(Arc::from(attribute.to_ascii_lowercase().as_str()));
        self
    }

    /// Parses `category[@attr...]`; `raw` is the full pattern, kept for diagnostics.
    fn parse(asset: &str, selector: &str, raw: &str) -> Result<Self, DomainError> {
        let mut parts = selector.split(ATTRIBUTE_SEPARATOR);
        let category = parts.next().unwrap_or_default().trim();
        if category.is_empty() {
            return Err(DomainError::InvalidPattern(raw.to_string()));
        }

        let mut reference = GeositeReference::new(category).in_asset(asset);
        for attribute in parts {
            let attribute = attribute.trim();
            if attribute.is_empty() {
                return Err(DomainError::InvalidPattern(raw.to_string()));
            }
            reference = reference.with_attribute(attribute);
        }
        Ok(reference)
    }
}

impl fmt::Display for GeositeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.asset.as_ref() == DEFAULT_GEOSITE_ASSET {
            write!(f, "geosite:{}", self.category)?;
        } else {
            write!(f, "ext:{}:{}", self.asset, self.category)?;
        }
        for attribute in &self.attributes {
            write!(f, "@{}", attribute)?;
        }
        Ok(())
    }
}

/// Outcome of classifying a single pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedPattern {
    Rule(DomainRule),
    Geosite(GeositeReference),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternPrefix {
    Full,
    Domain,
    Keyword,
    Regexp,
    Dotless,
    Geosite,
    External,
}

// Checked in order; the first matching prefix wins.
const PREFIX_TABLE: &[(&str, PatternPrefix)] = &[
    ("full:", PatternPrefix::Full),
    ("domain:", PatternPrefix::Domain),
    ("keyword:", PatternPrefix::Keyword),
    ("regexp:", PatternPrefix::Regexp),
    ("dotless:", PatternPrefix::Dotless),
    ("geosite:", PatternPrefix::Geosite),
    ("ext:", PatternPrefix::External),
];

fn split_prefix(pattern: &str) -> Option<(PatternPrefix, &str)> {
    PREFIX_TABLE.iter().find_map(|(prefix, kind)| {
        let head = pattern.get(..prefix.len())?;
        if head.eq_ignore_ascii_case(prefix) {
            Some((*kind, &pattern[prefix.len()..]))
        } else {
            None
        }
    })
}

fn literal_rule(matching_type: DomainMatchingType, domain: &str) -> DomainRule {
    if matching_type.is_domain_literal() {
        DomainRule::new(matching_type, normalize_domain(domain).as_ref())
    } else {
        DomainRule::new(matching_type, domain)
    }
}

fn dotless_rule(remainder: &str, raw: &str) -> Result<DomainRule, DomainError> {
    if remainder.is_empty() {
        return Ok(DomainRule::regex("^[^.]*$"));
    }
    if remainder.contains('.') {
        return Err(DomainError::InvalidPattern(raw.to_string()));
    }
    Ok(DomainRule::regex(format!("^[^.]*{}[^.]*$", remainder)))
}

fn external_reference(remainder: &str, raw: &str) -> Result<GeositeReference, DomainError> {
    let (asset, selector) = remainder
        .split_once(':')
        .ok_or_else(|| DomainError::InvalidPattern(raw.to_string()))?;
    let asset = asset.trim();
    if asset.is_empty() || selector.contains(':') {
        return Err(DomainError::InvalidPattern(raw.to_string()));
    }
    GeositeReference::parse(asset, selector, raw)
}

/// Classifies `pattern`, using `default_type` when it carries no recognized prefix.
pub fn classify(
    pattern: &str,
    default_type: DomainMatchingType,
) -> Result<ClassifiedPattern, DomainError> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidPattern(pattern.to_string()));
    }

    let Some((prefix, remainder)) = split_prefix(trimmed) else {
        return Ok(ClassifiedPattern::Rule(literal_rule(default_type, trimmed)));
    };

    if remainder.is_empty() && prefix != PatternPrefix::Dotless {
        return Err(DomainError::InvalidPattern(pattern.to_string()));
    }

    let classified = match prefix {
        PatternPrefix::Full => {
            ClassifiedPattern::Rule(literal_rule(DomainMatchingType::Full, remainder))
        }
        PatternPrefix::Domain => {
            ClassifiedPattern::Rule(literal_rule(DomainMatchingType::Subdomain, remainder))
        }
        PatternPrefix::Keyword => ClassifiedPattern::Rule(DomainRule::plain(remainder)),
        PatternPrefix::Regexp => ClassifiedPattern::Rule(DomainRule::regex(remainder)),
        PatternPrefix::Dotless => ClassifiedPattern::Rule(dotless_rule(remainder, pattern)?),
        PatternPrefix::Geosite => ClassifiedPattern::Geosite(GeositeReference::parse(
            DEFAULT_GEOSITE_ASSET,
            remainder,
            pattern,
        )?),
        PatternPrefix::External => {
            ClassifiedPattern::Geosite(external_reference(remainder, pattern)?)
        }
    };
    Ok(classified)
}
