pub mod domain_list;
pub mod lazy;
pub mod loader;
pub mod repository;

pub use domain_list::{parse_domain_list, DomainListLine};
pub use lazy::LazyGeositeRepository;
pub use loader::DomainListLoader;
pub use repository::InMemoryGeositeRepository;
