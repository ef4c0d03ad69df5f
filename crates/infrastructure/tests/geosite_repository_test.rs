use dnsplan_application::ports::GeositeRepository;
use dnsplan_application::use_cases::BuildDnsConfigUseCase;
use dnsplan_domain::{
    DomainError, DomainMatchingType, DomainRule, GeositeEntry, HostsTable, RawDnsConfig,
};
use dnsplan_infrastructure::geosite::{
    DomainListLoader, InMemoryGeositeRepository, LazyGeositeRepository,
};
use std::sync::Arc;

mod helpers;
use helpers::AssetTree;

#[test]
fn test_in_memory_lookup() {
    let repo = InMemoryGeositeRepository::new().with_category(
        "geosite",
        "TLD-CN",
        vec![GeositeEntry::new(DomainMatchingType::Subdomain, "cn")],
    );

    assert!(repo.contains("geosite", "tld-cn"));
    assert_eq!(repo.lookup("geosite", "Tld-Cn").unwrap().unwrap().len(), 1);
    assert!(repo.lookup("custom", "tld-cn").unwrap().is_none());
    assert_eq!(repo.categories("geosite"), vec!["tld-cn"]);
    assert_eq!(repo.len(), 1);
}

#[test]
fn test_empty_repository() {
    let repo = InMemoryGeositeRepository::new();

    assert!(repo.is_empty());
    assert!(repo.categories("geosite").is_empty());
    assert!(repo.lookup("geosite", "anything").unwrap().is_none());
}

#[test]
fn test_loaded_assets_drive_config_build() {
    let tree = AssetTree::new().with_category("geosite", "tld-cn", "cn\n中国\n");
    let repo = DomainListLoader::new(tree.path()).load().unwrap();
    let use_case = BuildDnsConfigUseCase::new(Arc::new(repo));

    let raw = RawDnsConfig {
        hosts: HostsTable::new().with("geosite:tld-cn", "10.0.0.1"),
        ..Default::default()
    };
    let config = use_case.execute(&raw).unwrap();

    let rules: Vec<DomainRule> = config.static_hosts.iter().map(|h| h.rule()).collect();
    assert_eq!(
        rules,
        vec![
            DomainRule::subdomain("cn"),
            DomainRule::subdomain("xn--fiqs8s"),
        ]
    );
}

#[test]
fn test_lazy_repository_loads_on_first_lookup() {
    let tree = AssetTree::new().with_category("geosite", "tld-cn", "cn\n");
    let repo = LazyGeositeRepository::new(DomainListLoader::new(tree.path()));

    assert!(!repo.is_loaded());
    assert!(repo.lookup("geosite", "tld-cn").unwrap().is_some());
    assert!(repo.is_loaded());
}

#[test]
fn test_lazy_repository_without_references_skips_missing_assets() {
    let tree = AssetTree::new();
    let repo = LazyGeositeRepository::new(DomainListLoader::new(tree.path().join("missing")));
    let use_case = BuildDnsConfigUseCase::new(Arc::new(repo));

    let raw = RawDnsConfig {
        hosts: HostsTable::new().with("v2ray.com", "127.0.0.1"),
        ..Default::default()
    };

    assert_eq!(use_case.execute(&raw).unwrap().static_hosts.len(), 1);
}

#[test]
fn test_lazy_repository_reports_missing_assets_on_lookup() {
    let tree = AssetTree::new();
    let repo = LazyGeositeRepository::new(DomainListLoader::new(tree.path().join("missing")));

    let first = repo.lookup("geosite", "tld-cn");
    let second = repo.lookup("geosite", "tld-cn");

    assert!(matches!(first, Err(DomainError::GeositeUnavailable(_))));
    assert_eq!(first, second);
}

#[test]
fn test_lazy_repository_reports_broken_tree_as_unavailable() {
    let tree = AssetTree::new()
        .with_category("geosite", "cn", "cn\n")
        .with_category("geosite", "other", "include:missing\n");
    let repo = LazyGeositeRepository::new(DomainListLoader::new(tree.path()));
    let use_case = BuildDnsConfigUseCase::new(Arc::new(repo));

    let raw = RawDnsConfig {
        hosts: HostsTable::new().with("geosite:cn", "10.0.0.1"),
        ..Default::default()
    };

    let result = use_case.execute(&raw);

    match result {
        Err(DomainError::GeositeUnavailable(message)) => {
            assert!(message.contains("geosite:missing"));
        }
        other => panic!("expected GeositeUnavailable, got {:?}", other),
    }
}

#[test]
fn test_lazy_repository_reports_malformed_line_as_unavailable() {
    let tree = AssetTree::new()
        .with_category("geosite", "cn", "cn\n")
        .with_category("geosite", "bad", "suffix:example.com\n");
    let repo = LazyGeositeRepository::new(DomainListLoader::new(tree.path()));

    assert!(matches!(
        repo.lookup("geosite", "cn"),
        Err(DomainError::GeositeUnavailable(_))
    ));
}
