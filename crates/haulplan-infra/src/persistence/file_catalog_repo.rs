//! File-based implementation of VehicleCatalogRepository

use std::path::Path;

use haulplan_domain::model::{OversizeLimits, VehicleCatalog};
use haulplan_domain::repository::VehicleCatalogRepository;
use haulplan_types::Error;

use crate::catalog_loader::CatalogLoader;

/// File-based vehicle catalog repository (TOML)
pub struct FileVehicleCatalogRepository {
    loader: CatalogLoader,
}

impl FileVehicleCatalogRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: &Path) -> Result<Self, Error> {
        let loader = CatalogLoader::load_from_file(toml_path)?;
        Ok(Self { loader })
    }
}

impl VehicleCatalogRepository for FileVehicleCatalogRepository {
    fn load_catalog(&self) -> Result<VehicleCatalog, Error> {
        Ok(self.loader.catalog().clone())
    }

    fn oversize_limits(&self) -> Result<Option<OversizeLimits>, Error> {
        Ok(self.loader.oversize_limits())
    }
}
