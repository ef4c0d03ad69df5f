//! dnsplan application layer: geosite expansion and DNS config assembly.
pub mod ports;
pub mod services;
pub mod use_cases;
