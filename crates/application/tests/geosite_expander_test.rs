use dnsplan_application::services::GeositeExpander;
use dnsplan_domain::{
    DomainError, DomainMatchingType, DomainRule, GeositeEntry, GeositeReference,
};
use std::sync::Arc;

mod helpers;
use helpers::MockGeositeRepository;

fn expander(repo: &MockGeositeRepository) -> GeositeExpander {
    GeositeExpander::new(Arc::new(repo.clone()))
}

#[test]
fn test_expand_normalizes_unicode_entries() {
    let repo = MockGeositeRepository::with_tld_cn();

    let rules = expander(&repo)
        .expand(&GeositeReference::new("tld-cn"))
        .unwrap();

    assert_eq!(
        rules,
        vec![
            DomainRule::subdomain("cn"),
            DomainRule::subdomain("xn--fiqs8s"),
        ]
    );
}

#[test]
fn test_expand_category_is_case_insensitive() {
    let repo = MockGeositeRepository::with_tld_cn();

    let rules = expander(&repo)
        .expand(&GeositeReference::new("TLD-CN"))
        .unwrap();

    assert_eq!(rules.len(), 2);
}

#[test]
fn test_expand_unknown_category_fails() {
    let repo = MockGeositeRepository::with_tld_cn();

    let result = expander(&repo).expand(&GeositeReference::new("tld-xx"));

    assert_eq!(
        result,
        Err(DomainError::UnknownCategory("geosite:tld-xx".to_string()))
    );
}

#[test]
fn test_expand_existing_empty_category_returns_empty() {
    let repo = MockGeositeRepository::new();
    repo.insert("empty", vec![]);

    let rules = expander(&repo)
        .expand(&GeositeReference::new("empty"))
        .unwrap();

    assert!(rules.is_empty());
}

#[test]
fn test_expand_preserves_database_order_and_types() {
    let repo = MockGeositeRepository::new();
    repo.insert(
        "mixed",
        vec![
            GeositeEntry::new(DomainMatchingType::Regex, r"^ad\d+\.例子$"),
            GeositeEntry::new(DomainMatchingType::Full, "例子.cn"),
            GeositeEntry::new(DomainMatchingType::Plain, "中国"),
            GeositeEntry::new(DomainMatchingType::Subdomain, "example.org"),
        ],
    );

    let rules = expander(&repo)
        .expand(&GeositeReference::new("mixed"))
        .unwrap();

    assert_eq!(
        rules,
        vec![
            DomainRule::regex(r"^ad\d+\.例子$"),
            DomainRule::full("xn--fsqu00a.cn"),
            DomainRule::plain("中国"),
            DomainRule::subdomain("example.org"),
        ]
    );
}

#[test]
fn test_expand_filters_by_attributes() {
    let repo = MockGeositeRepository::new();
    repo.insert(
        "google",
        vec![
            GeositeEntry::new(DomainMatchingType::Subdomain, "google.com"),
            GeositeEntry::new(DomainMatchingType::Subdomain, "google.cn")
                .with_attributes(vec![Arc::from("cn")]),
            GeositeEntry::new(DomainMatchingType::Full, "ads.google.cn")
                .with_attributes(vec![Arc::from("cn"), Arc::from("ads")]),
        ],
    );
    let expander = expander(&repo);

    let cn = expander
        .expand(&GeositeReference::new("google").with_attribute("cn"))
        .unwrap();
    assert_eq!(
        cn,
        vec![
            DomainRule::subdomain("google.cn"),
            DomainRule::full("ads.google.cn"),
        ]
    );

    let cn_ads = expander
        .expand(
            &GeositeReference::new("google")
                .with_attribute("cn")
                .with_attribute("ads"),
        )
        .unwrap();
    assert_eq!(cn_ads, vec![DomainRule::full("ads.google.cn")]);

    let none = expander
        .expand(&GeositeReference::new("google").with_attribute("nope"))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_expand_external_asset() {
    let repo = MockGeositeRepository::new();
    repo.insert_in_asset(
        "custom",
        "streaming",
        vec![GeositeEntry::new(DomainMatchingType::Subdomain, "netflix.com")],
    );
    let expander = expander(&repo);

    let rules = expander
        .expand(&GeositeReference::new("streaming").in_asset("custom"))
        .unwrap();
    assert_eq!(rules, vec![DomainRule::subdomain("netflix.com")]);

    let missing = expander.expand(&GeositeReference::new("streaming"));
    assert!(matches!(missing, Err(DomainError::UnknownCategory(_))));
}

#[test]
fn test_expand_database_unavailable() {
    let repo = MockGeositeRepository::with_tld_cn();
    repo.set_unavailable(true);

    let result = expander(&repo).expand(&GeositeReference::new("tld-cn"));

    assert!(matches!(result, Err(DomainError::GeositeUnavailable(_))));
}

#[test]
fn test_resolve_direct_pattern_skips_database() {
    let repo = MockGeositeRepository::with_tld_cn();

    let rules = expander(&repo)
        .resolve("full:v2ray.com", DomainMatchingType::Subdomain)
        .unwrap();

    assert_eq!(rules, vec![DomainRule::full("v2ray.com")]);
    assert_eq!(repo.lookup_count(), 0);
}

#[test]
fn test_resolve_geosite_pattern() {
    let repo = MockGeositeRepository::with_tld_cn();

    let rules = expander(&repo)
        .resolve("geosite:tld-cn", DomainMatchingType::Full)
        .unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(repo.lookup_count(), 1);
}

#[test]
fn test_resolve_unknown_category_reports_pattern_as_written() {
    let repo = MockGeositeRepository::with_tld_cn();

    let result = expander(&repo).resolve("GEOSITE:Foo ", DomainMatchingType::Full);

    assert_eq!(
        result,
        Err(DomainError::UnknownCategory("GEOSITE:Foo ".to_string()))
    );
}
