pub mod geosite;
