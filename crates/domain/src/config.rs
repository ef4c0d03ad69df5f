pub mod assets;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;

pub use assets::AssetsConfig;
pub use dns::{HostAddresses, HostsTable, RawDnsConfig, RawNameServer, RawNameServerSpec};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
