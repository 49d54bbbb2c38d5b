//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_catalog_repo;

pub use file_catalog_repo::FileVehicleCatalogRepository;
