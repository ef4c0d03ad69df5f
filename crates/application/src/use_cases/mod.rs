pub mod dns;

pub use dns::BuildDnsConfigUseCase;
