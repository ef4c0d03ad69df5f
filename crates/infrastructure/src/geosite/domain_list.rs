//! Parser for the line-oriented domain-list format used to author geosite
//! categories.
//!
//! ```text
//! # comment
//! google.com              # subdomain match
//! full:www.google.com @ads
//! keyword:google
//! regexp:^ad[0-9]+\.google\.com$
//! include:google-cn @cn
//! ```
//!
//! A comment starts at a `#` that opens the line or follows whitespace. A `#`
//! glued to a rule, as in `regexp:^a#b$`, is rejected rather than cutting the
//! rule short.

use dnsplan_domain::{DomainError, DomainMatchingType, GeositeEntry};
use std::sync::Arc;

const COMMENT: char = '#';
const ATTRIBUTE_MARKER: char = '@';

/// A meaningful line of a domain-list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainListLine {
    Entry(GeositeEntry),
    /// Splices another category of the same asset, keeping only the entries
    /// that carry every listed attribute.
    Include {
        category: String,
        attributes: Vec<Arc<str>>,
    },
}

/// Parses a whole file. Blank lines and comments are skipped.
pub fn parse_domain_list(content: &str) -> Result<Vec<DomainListLine>, DomainError> {
    content
        .lines()
        .filter_map(|line| parse_line(line).transpose())
        .collect()
}

fn parse_line(raw: &str) -> Result<Option<DomainListLine>, DomainError> {
    let line = strip_comment(raw)?.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let invalid = || DomainError::InvalidPattern(line.to_string());

    let mut tokens = line.split_whitespace();
    let rule = tokens.next().ok_or_else(invalid)?;
    let attributes = tokens
        .map(|token| {
            token
                .strip_prefix(ATTRIBUTE_MARKER)
                .filter(|attr| !attr.is_empty())
                .map(|attr| Arc::<str>::from(attr.to_ascii_lowercase().as_str()))
                .ok_or_else(invalid)
        })
        .collect::<Result<Vec<Arc<str>>, _>>()?;

    let (prefix, value) = match rule.split_once(':') {
        Some((prefix, value)) => (Some(prefix.to_ascii_lowercase()), value),
        None => (None, rule),
    };
    if value.is_empty() {
        return Err(invalid());
    }

    let matching_type = match prefix.as_deref() {
        None | Some("domain") => DomainMatchingType::Subdomain,
        Some("full") => DomainMatchingType::Full,
        Some("keyword") => DomainMatchingType::Plain,
        Some("regexp") => DomainMatchingType::Regex,
        Some("include") => {
            return Ok(Some(DomainListLine::Include {
                category: value.to_ascii_lowercase(),
                attributes,
            }))
        }
        Some(_) => return Err(invalid()),
    };

    let domain = match matching_type {
        DomainMatchingType::Regex => value.to_string(),
        _ => value.to_lowercase(),
    };

    Ok(Some(DomainListLine::Entry(
        GeositeEntry::new(matching_type, domain).with_attributes(attributes),
    )))
}

fn strip_comment(raw: &str) -> Result<&str, DomainError> {
    match raw.find(COMMENT) {
        None => Ok(raw),
        Some(at) if at == 0 || raw[..at].ends_with(char::is_whitespace) => Ok(&raw[..at]),
        Some(_) => Err(DomainError::InvalidPattern(raw.trim().to_string())),
    }
}
