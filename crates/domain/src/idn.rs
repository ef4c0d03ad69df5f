//! Conversion of internationalized domain names to their ASCII-compatible form.

use std::borrow::Cow;
use tracing::warn;

const ACE_PREFIX: &str = "xn--";

/// Converts every non-ASCII label of `domain` to `xn--` + punycode.
///
/// ASCII labels are left untouched (no case folding), so the transform is
/// idempotent and the identity on ASCII-only input.
pub fn normalize_domain(domain: &str) -> Cow<'_, str> {
    if domain.is_ascii() {
        return Cow::Borrowed(domain);
    }

    let labels: Vec<Cow<'_, str>> = domain.split('.').map(label_to_ascii).collect();
    Cow::Owned(labels.join("."))
}

fn label_to_ascii(label: &str) -> Cow<'_, str> {
    if label.is_ascii() {
        return Cow::Borrowed(label);
    }

    match idna::punycode::encode_str(label) {
        Some(encoded) => Cow::Owned(format!("{}{}", ACE_PREFIX, encoded)),
        None => {
            // Only reachable on arithmetic overflow for absurdly long labels.
            warn!(label = label, "Punycode encoding failed, keeping label verbatim");
            Cow::Borrowed(label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_to_ascii_keeps_ascii_label_borrowed() {
        assert!(matches!(label_to_ascii("v2ray"), Cow::Borrowed("v2ray")));
    }

    #[test]
    fn test_label_to_ascii_encodes_unicode_label() {
        assert_eq!(label_to_ascii("中国"), "xn--fiqs8s");
    }
}
