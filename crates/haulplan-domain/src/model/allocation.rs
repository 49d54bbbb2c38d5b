//! Fleet allocation result

use serde::{Deserialize, Serialize};

use super::vehicle_class::VehicleCategory;

/// Fleet of one vehicle class sized to carry the whole shipment.
///
/// `units_per_vehicle * vehicles_required >= quantity` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub vehicle_name: String,
    pub class_label: VehicleCategory,
    pub vehicles_required: u32,
    pub total_cost: f64,
    pub units_per_vehicle: u32,
    /// Average payload carried by each vehicle, in tonnes
    pub average_load_tonnes: f64,
    /// Average payload as a percentage of the class capacity
    pub load_ratio_percent: f64,
}

impl AllocationResult {
    /// Total capacity of the fleet in units
    pub fn fleet_capacity(&self) -> u64 {
        u64::from(self.units_per_vehicle) * u64::from(self.vehicles_required)
    }
}
