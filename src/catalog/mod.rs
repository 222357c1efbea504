pub mod service;
pub mod types;

pub use service::{CatalogService, DEFAULT_CATALOG_URL, HttpCatalogService};
pub use types::{CatalogResponse, LocalId, Product};
