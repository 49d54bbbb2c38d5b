//! First-fit vehicle selection for a single cargo unit

use crate::model::{VehicleCatalog, VehicleClass};

/// Shown when no catalog class can take the unit
pub const CUSTOM_HAULAGE_NOTICE: &str =
    "Custom/Heavy Haulage Required (Contact Transport Planner)";

/// First class in catalog order whose limits admit one unit of the given size and weight
pub fn select_first_fit(
    catalog: &VehicleCatalog,
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
) -> Option<&VehicleClass> {
    catalog
        .list_classes()
        .iter()
        .find(|v| v.admits_unit(length, width, height, weight))
}
