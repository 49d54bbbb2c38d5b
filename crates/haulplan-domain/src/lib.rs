//! Domain layer for vehicle selection: models, services, and repository traits

pub mod model;
pub mod repository;
pub mod service;

pub use model::{
    AllocationResult, CargoSpec, Dimension, FragilityCategory, FragilityRule, FragilityTable,
    OversizeExceedance, OversizeLimits, ShipmentRequest, VehicleCatalog, VehicleCategory,
    VehicleClass,
};
