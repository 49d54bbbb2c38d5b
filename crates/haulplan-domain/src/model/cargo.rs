//! Cargo shipment parameters

use haulplan_types::InputError;
use serde::{Deserialize, Serialize};

use super::fragility::FragilityCategory;

/// One shipment of identical units.
///
/// Lengths are meters, weights are tonnes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoSpec {
    pub unit_length: f64,
    pub unit_width: f64,
    pub unit_height: f64,
    pub unit_weight: f64,
    pub quantity: u32,
    pub distance_km: f64,
    #[serde(default)]
    pub fragility: FragilityCategory,
}

/// Unvalidated shipment input as typed by a user or read from a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub quantity: i64,
    pub distance_km: f64,
    /// Fragility category name; blank means `none`
    #[serde(default)]
    pub fragility: String,
}

impl ShipmentRequest {
    /// Parse and validate into a cargo spec
    pub fn into_cargo(self) -> Result<CargoSpec, InputError> {
        let fragility = if self.fragility.trim().is_empty() {
            FragilityCategory::None
        } else {
            self.fragility.parse()?
        };
        if self.quantity <= 0 {
            return Err(InputError::NonPositive {
                field: "quantity",
                value: self.quantity as f64,
            });
        }
        let quantity = u32::try_from(self.quantity).map_err(|_| InputError::TooLarge {
            field: "quantity",
            value: self.quantity as f64,
        })?;

        let cargo = CargoSpec {
            unit_length: self.length,
            unit_width: self.width,
            unit_height: self.height,
            unit_weight: self.weight,
            quantity,
            distance_km: self.distance_km,
            fragility,
        };
        cargo.validate()?;
        Ok(cargo)
    }
}

impl CargoSpec {
    /// Reject non-positive or non-finite measurements and an empty shipment
    pub fn validate(&self) -> Result<(), InputError> {
        let measurements = [
            ("unit_length", self.unit_length),
            ("unit_width", self.unit_width),
            ("unit_height", self.unit_height),
            ("unit_weight", self.unit_weight),
            ("distance_km", self.distance_km),
        ];
        for (field, value) in measurements {
            if value.is_nan() || value.is_infinite() {
                return Err(InputError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(InputError::NonPositive { field, value });
            }
        }
        if self.quantity == 0 {
            return Err(InputError::NonPositive {
                field: "quantity",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Total shipment weight in tonnes
    pub fn total_weight(&self) -> f64 {
        self.unit_weight * f64::from(self.quantity)
    }
}
