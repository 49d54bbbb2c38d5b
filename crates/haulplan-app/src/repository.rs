//! Repository adapters for reference data

use std::path::Path;

use haulplan_infra::persistence::FileVehicleCatalogRepository;
use haulplan_types::Result;

/// Open a vehicle catalog repository backed by a TOML file
pub fn open_catalog_repo(toml_path: &Path) -> Result<FileVehicleCatalogRepository> {
    FileVehicleCatalogRepository::new(toml_path)
}
