mod geosite_repository;

pub use geosite_repository::GeositeRepository;
