mod mock_geosite;

pub use mock_geosite::MockGeositeRepository;
