//! Repository trait definitions for reference data

use crate::model::{OversizeLimits, VehicleCatalog};
use haulplan_types::Error;

/// Source of vehicle catalog data
pub trait VehicleCatalogRepository {
    /// Load the whole catalog, in catalog order
    fn load_catalog(&self) -> Result<VehicleCatalog, Error>;

    /// ODC limits shipped with the catalog, if the source defines them
    fn oversize_limits(&self) -> Result<Option<OversizeLimits>, Error>;
}
