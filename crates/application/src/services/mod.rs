mod geosite_expander;
mod host_mapping_builder;
mod name_server_builder;

pub use geosite_expander::GeositeExpander;
pub use host_mapping_builder::HostMappingBuilder;
pub use name_server_builder::NameServerBuilder;
