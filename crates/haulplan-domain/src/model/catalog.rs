//! Ordered vehicle catalog

use std::collections::HashSet;

use haulplan_types::ConfigError;
use serde::Serialize;

use super::vehicle_class::{VehicleCategory, VehicleClass};

/// Immutable, ordered set of vehicle classes.
///
/// Order is insertion order. It only matters as a tie-break between equal-cost allocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleCatalog {
    classes: Vec<VehicleClass>,
}

impl VehicleCatalog {
    /// Build a catalog, rejecting empty tables, duplicate names and invalid capacities
    pub fn new(classes: Vec<VehicleClass>) -> Result<Self, ConfigError> {
        if classes.is_empty() {
            return Err(ConfigError::InvalidCatalog(
                "catalog contains no vehicle classes".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for class in &classes {
            class.check().map_err(ConfigError::InvalidCatalog)?;
            if !seen.insert(class.name.as_str()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "duplicate vehicle class name: {}",
                    class.name
                )));
            }
        }

        Ok(Self { classes })
    }

    pub fn list_classes(&self) -> &[VehicleClass] {
        &self.classes
    }

    /// Display label for a class
    pub fn classify(&self, vehicle: &VehicleClass) -> VehicleCategory {
        vehicle.category
    }

    /// Look up a class by exact name
    pub fn get(&self, name: &str) -> Option<&VehicleClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
