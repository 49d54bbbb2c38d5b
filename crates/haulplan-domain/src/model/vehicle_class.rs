//! Vehicle class type definitions

use serde::{Deserialize, Serialize};

/// Display grouping for vehicle classes.
///
/// Set explicitly when a catalog is built. Never consulted for feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Light,
    Medium,
    Heavy,
    Oversize,
    Custom,
}

impl VehicleCategory {
    /// Derive a category from declared capacity.
    ///
    /// Used when a loaded catalog entry omits its category. `Custom` is never derived.
    pub fn from_capacity(max_weight_tonnes: f64, max_width_m: f64) -> Self {
        if max_width_m > 3.0 || max_weight_tonnes > 40.0 {
            VehicleCategory::Oversize
        } else if max_weight_tonnes <= 5.0 {
            VehicleCategory::Light
        } else if max_weight_tonnes <= 15.0 {
            VehicleCategory::Medium
        } else {
            VehicleCategory::Heavy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Light => "Light",
            VehicleCategory::Medium => "Medium",
            VehicleCategory::Heavy => "Heavy",
            VehicleCategory::Oversize => "Oversize",
            VehicleCategory::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A class of transport vehicle and its capacity envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleClass {
    /// Display name, unique within a catalog
    pub name: String,
    /// Usable deck length in meters
    pub max_length: f64,
    /// Usable deck width in meters
    pub max_width: f64,
    /// Usable load height in meters
    pub max_height: f64,
    /// Payload capacity in tonnes
    pub max_weight: f64,
    /// Fixed running cost per kilometer
    pub cost_per_km: f64,
    /// Marginal cost per tonne-kilometer
    pub cost_per_tonne_km: f64,
    /// Closed body (sidewalls/container) able to carry protected cargo
    pub supports_enclosure: bool,
    pub category: VehicleCategory,
}

impl VehicleClass {
    /// Whether one unit of the given size and weight can be loaded at all
    pub fn admits_unit(&self, length: f64, width: f64, height: f64, weight: f64) -> bool {
        length <= self.max_length
            && width <= self.max_width
            && height <= self.max_height
            && weight <= self.max_weight
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("vehicle class name must not be empty".to_string());
        }
        let positive = [
            ("max_length", self.max_length),
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("max_weight", self.max_weight),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{}: {} must be positive (got {})", self.name, field, value));
            }
        }
        let non_negative = [
            ("cost_per_km", self.cost_per_km),
            ("cost_per_tonne_km", self.cost_per_tonne_km),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{}: {} must not be negative (got {})", self.name, field, value));
            }
        }
        Ok(())
    }
}
