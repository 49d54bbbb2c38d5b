//! Domain model types

pub mod allocation;
pub mod cargo;
pub mod catalog;
pub mod fragility;
pub mod oversize;
pub mod vehicle_class;

pub use allocation::AllocationResult;
pub use cargo::{CargoSpec, ShipmentRequest};
pub use catalog::VehicleCatalog;
pub use fragility::{FragilityCategory, FragilityRule, FragilityTable};
pub use oversize::{Dimension, OversizeExceedance, OversizeLimits};
pub use vehicle_class::{VehicleCategory, VehicleClass};
