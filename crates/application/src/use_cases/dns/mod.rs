mod build_dns_config;

pub use build_dns_config::BuildDnsConfigUseCase;
