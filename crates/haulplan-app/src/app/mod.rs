//! Use cases

pub mod planning_service;

pub use planning_service::{
    first_fit, plan_batch, plan_cargo, plan_shipment, BatchEntry, BatchOutcome, BatchResults,
    PlanOptions, ShipmentPlan,
};
