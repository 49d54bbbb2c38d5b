//! Reference vehicle catalog for project cargo (EPC) transport
//!
//! Capacities are per vehicle: deck length, width and load height in meters,
//! payload in tonnes. Costs are in currency units per km and per tonne-km.

use haulplan_domain::model::{VehicleCatalog, VehicleCategory, VehicleClass};
use haulplan_types::ConfigError;

struct Row {
    name: &'static str,
    dims: (f64, f64, f64),
    max_weight: f64,
    cost_per_km: f64,
    cost_per_tonne_km: f64,
    supports_enclosure: bool,
    category: VehicleCategory,
}

const REFERENCE_ROWS: [Row; 10] = [
    Row {
        name: "LCV Truck (Light Commercial Vehicle)",
        dims: (4.2, 2.0, 2.2),
        max_weight: 3.0,
        cost_per_km: 18.0,
        cost_per_tonne_km: 3.0,
        supports_enclosure: true,
        category: VehicleCategory::Light,
    },
    Row {
        name: "14 ft Truck (Standard)",
        dims: (6.0, 2.5, 2.5),
        max_weight: 10.0,
        cost_per_km: 28.0,
        cost_per_tonne_km: 2.2,
        supports_enclosure: true,
        category: VehicleCategory::Medium,
    },
    Row {
        name: "22 ft Truck / Semi Trailer",
        dims: (12.0, 2.6, 3.0),
        max_weight: 20.0,
        cost_per_km: 42.0,
        cost_per_tonne_km: 1.8,
        supports_enclosure: true,
        category: VehicleCategory::Heavy,
    },
    Row {
        name: "Flatbed Trailer (40 ft)",
        dims: (18.0, 2.6, 3.5),
        max_weight: 30.0,
        cost_per_km: 55.0,
        cost_per_tonne_km: 1.6,
        supports_enclosure: false,
        category: VehicleCategory::Heavy,
    },
    Row {
        name: "Flatbed Trailer (60 ft)",
        dims: (25.0, 2.6, 3.5),
        max_weight: 35.0,
        cost_per_km: 65.0,
        cost_per_tonne_km: 1.5,
        supports_enclosure: false,
        category: VehicleCategory::Heavy,
    },
    Row {
        name: "Semi Low Bed Trailer",
        dims: (18.0, 3.0, 3.5),
        max_weight: 40.0,
        cost_per_km: 75.0,
        cost_per_tonne_km: 1.9,
        supports_enclosure: false,
        category: VehicleCategory::Heavy,
    },
    Row {
        name: "Low Bed Trailer",
        dims: (18.0, 3.5, 4.2),
        max_weight: 80.0,
        cost_per_km: 110.0,
        cost_per_tonne_km: 2.1,
        supports_enclosure: false,
        category: VehicleCategory::Oversize,
    },
    Row {
        name: "Multi-Axle Modular Hydraulic Trailer",
        dims: (30.0, 5.0, 5.5),
        max_weight: 500.0,
        cost_per_km: 320.0,
        cost_per_tonne_km: 2.8,
        supports_enclosure: false,
        category: VehicleCategory::Oversize,
    },
    Row {
        name: "Container Trailer (40 ft)",
        dims: (12.2, 2.6, 2.9),
        max_weight: 28.0,
        cost_per_km: 50.0,
        cost_per_tonne_km: 1.6,
        supports_enclosure: true,
        category: VehicleCategory::Heavy,
    },
    Row {
        name: "Tanker Truck",
        dims: (12.0, 2.5, 3.0),
        max_weight: 25.0,
        cost_per_km: 48.0,
        cost_per_tonne_km: 1.7,
        supports_enclosure: false,
        category: VehicleCategory::Custom,
    },
];

/// Build the reference catalog, in reference table order
pub fn reference_catalog() -> Result<VehicleCatalog, ConfigError> {
    let classes = REFERENCE_ROWS
        .iter()
        .map(|row| VehicleClass {
            name: row.name.to_string(),
            max_length: row.dims.0,
            max_width: row.dims.1,
            max_height: row.dims.2,
            max_weight: row.max_weight,
            cost_per_km: row.cost_per_km,
            cost_per_tonne_km: row.cost_per_tonne_km,
            supports_enclosure: row.supports_enclosure,
            category: row.category,
        })
        .collect();
    VehicleCatalog::new(classes)
}
