//! Fleet optimizer: feasible vehicle classes ranked by total transport cost
//!
//! Packing uses the axis-fit policy. Units keep the orientation they are given
//! and are tiled along the deck length and width, and optionally stacked.
//! Weights are tonnes throughout.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{AllocationResult, CargoSpec, FragilityTable, VehicleCatalog, VehicleClass};

/// Slack added before flooring capacity ratios so exact multiples survive float error
const PACKING_EPSILON: f64 = 1e-9;

/// Packing policy knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingSettings {
    /// Allow units to be stacked vertically
    pub stacking: bool,
}

impl Default for PackingSettings {
    fn default() -> Self {
        Self { stacking: true }
    }
}

/// Why a vehicle class was left out of the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Cargo needs a closed body and the class has none
    EnclosureRequired,
    /// A single unit exceeds a dimension or the payload
    UnitDoesNotFit,
    /// Axis-fit capacity came out as zero.
    ///
    /// Not reached after the `UnitDoesNotFit` check passes, since a unit that fits on
    /// every axis gives a ratio of at least 1 per axis.
    NoTiling,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exclusion::EnclosureRequired => write!(f, "enclosure required"),
            Exclusion::UnitDoesNotFit => write!(f, "unit exceeds vehicle limits"),
            Exclusion::NoTiling => write!(f, "unit cannot be tiled"),
        }
    }
}

/// Rank every feasible vehicle class by total cost, cheapest first.
///
/// Ties keep catalog order. An empty result means no vehicle class can carry the cargo.
pub fn recommend(
    catalog: &VehicleCatalog,
    fragility: &FragilityTable,
    cargo: &CargoSpec,
    settings: &PackingSettings,
) -> Vec<AllocationResult> {
    let requires_enclosure = fragility.requires_enclosure(cargo.fragility);

    let mut results: Vec<AllocationResult> = catalog
        .list_classes()
        .iter()
        .filter_map(|vehicle| {
            match evaluate(vehicle, requires_enclosure, cargo, settings) {
                Ok(allocation) => Some(allocation),
                Err(reason) => {
                    debug!(vehicle = %vehicle.name, %reason, "vehicle class excluded");
                    None
                }
            }
        })
        .collect();

    // stable sort: equal costs stay in catalog order
    results.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    results
}

/// Size and price a fleet of one vehicle class, or say why it is infeasible
pub fn evaluate(
    vehicle: &VehicleClass,
    requires_enclosure: bool,
    cargo: &CargoSpec,
    settings: &PackingSettings,
) -> Result<AllocationResult, Exclusion> {
    if requires_enclosure && !vehicle.supports_enclosure {
        return Err(Exclusion::EnclosureRequired);
    }

    if !vehicle.admits_unit(
        cargo.unit_length,
        cargo.unit_width,
        cargo.unit_height,
        cargo.unit_weight,
    ) {
        return Err(Exclusion::UnitDoesNotFit);
    }

    let by_volume = units_by_volume(vehicle, cargo, settings.stacking);
    if by_volume == 0 {
        return Err(Exclusion::NoTiling);
    }
    let by_weight = units_by_weight(vehicle, cargo);

    let units_per_vehicle = clamp_u32(by_volume.min(by_weight).max(1));
    let vehicles_required = vehicles_required(cargo.quantity, units_per_vehicle);

    let average_load_tonnes = cargo.total_weight() / f64::from(vehicles_required);
    let total_cost = fleet_cost(vehicle, vehicles_required, average_load_tonnes, cargo.distance_km);

    Ok(AllocationResult {
        vehicle_name: vehicle.name.clone(),
        class_label: vehicle.category,
        vehicles_required,
        total_cost,
        units_per_vehicle,
        average_load_tonnes,
        load_ratio_percent: average_load_tonnes / vehicle.max_weight * 100.0,
    })
}

/// Units that fit on the deck by axis-aligned tiling
pub fn units_by_volume(vehicle: &VehicleClass, cargo: &CargoSpec, stacking: bool) -> u64 {
    let along_length = floor_ratio(vehicle.max_length, cargo.unit_length);
    let along_width = floor_ratio(vehicle.max_width, cargo.unit_width);
    let layers = if stacking {
        floor_ratio(vehicle.max_height, cargo.unit_height)
    } else {
        1
    };
    along_length.saturating_mul(along_width).saturating_mul(layers)
}

/// Units the payload allows. Weightless units are bounded by the shipment size instead.
pub fn units_by_weight(vehicle: &VehicleClass, cargo: &CargoSpec) -> u64 {
    if cargo.unit_weight <= 0.0 {
        return u64::from(cargo.quantity);
    }
    floor_ratio(vehicle.max_weight, cargo.unit_weight)
}

/// Smallest fleet that carries `quantity` units. Never less than one vehicle.
pub fn vehicles_required(quantity: u32, units_per_vehicle: u32) -> u32 {
    quantity.div_ceil(units_per_vehicle.max(1)).max(1)
}

/// Fixed distance cost plus tonne-km cost, summed over the fleet
pub fn fleet_cost(
    vehicle: &VehicleClass,
    vehicles_required: u32,
    average_load_tonnes: f64,
    distance_km: f64,
) -> f64 {
    let per_vehicle = vehicle.cost_per_km * distance_km
        + vehicle.cost_per_tonne_km * average_load_tonnes * distance_km;
    f64::from(vehicles_required) * per_vehicle
}

fn floor_ratio(capacity: f64, unit: f64) -> u64 {
    if unit <= 0.0 {
        return 0;
    }
    // float-to-int `as` saturates
    (capacity / unit + PACKING_EPSILON).floor() as u64
}

fn clamp_u32(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FragilityCategory, FragilityRule, VehicleCategory};

    fn vehicle(name: &str, l: f64, w: f64, h: f64, t: f64, per_km: f64, per_tkm: f64, closed: bool) -> VehicleClass {
        VehicleClass {
            name: name.to_string(),
            max_length: l,
            max_width: w,
            max_height: h,
            max_weight: t,
            cost_per_km: per_km,
            cost_per_tonne_km: per_tkm,
            supports_enclosure: closed,
            category: VehicleCategory::from_capacity(t, w),
        }
    }

    fn catalog() -> VehicleCatalog {
        VehicleCatalog::new(vec![
            vehicle("Van", 4.2, 2.0, 2.2, 3.0, 18.0, 3.0, true),
            vehicle("Box Truck", 6.0, 2.5, 2.5, 10.0, 28.0, 2.2, true),
            vehicle("Flatbed", 12.0, 2.6, 3.0, 20.0, 45.0, 1.8, false),
        ])
        .unwrap()
    }

    fn fragility() -> FragilityTable {
        FragilityTable::new(FragilityCategory::ALL.into_iter().map(|c| {
            (
                c,
                FragilityRule {
                    requires_enclosure: c == FragilityCategory::Fragile,
                    packaging_note: String::new(),
                },
            )
        }))
        .unwrap()
    }

    fn cargo(l: f64, w: f64, h: f64, t: f64, quantity: u32) -> CargoSpec {
        CargoSpec {
            unit_length: l,
            unit_width: w,
            unit_height: h,
            unit_weight: t,
            quantity,
            distance_km: 100.0,
            fragility: FragilityCategory::None,
        }
    }

    #[test]
    fn test_axis_fit_with_stacking() {
        let v = vehicle("Van", 4.2, 2.0, 2.2, 3.0, 18.0, 3.0, true);
        // 2 along length, 2 across, 2 layers
        assert_eq!(units_by_volume(&v, &cargo(2.0, 1.0, 1.0, 0.5, 10), true), 8);
        assert_eq!(units_by_volume(&v, &cargo(2.0, 1.0, 1.0, 0.5, 10), false), 4);
    }

    #[test]
    fn test_exact_multiple_not_lost_to_rounding() {
        let v = vehicle("Deck", 0.6, 0.3, 0.3, 1.0, 1.0, 0.0, false);
        // 0.6 / 0.2 is 2.9999999999999996 in f64
        assert_eq!(units_by_volume(&v, &cargo(0.2, 0.1, 0.1, 0.01, 1), true), 27);
    }

    #[test]
    fn test_weight_bound() {
        let v = vehicle("Van", 4.2, 2.0, 2.2, 3.0, 18.0, 3.0, true);
        assert_eq!(units_by_weight(&v, &cargo(2.0, 1.0, 1.0, 0.5, 10)), 6);
    }

    #[test]
    fn test_zero_unit_weight_falls_back_to_quantity() {
        let v = vehicle("Van", 4.2, 2.0, 2.2, 3.0, 18.0, 3.0, true);
        let c = cargo(2.0, 1.0, 1.0, 0.0, 5);
        assert_eq!(units_by_weight(&v, &c), 5);
        let allocation = evaluate(&v, false, &c, &PackingSettings::default()).unwrap();
        assert_eq!(allocation.units_per_vehicle, 5);
        assert_eq!(allocation.vehicles_required, 1);
        assert!(allocation.total_cost.is_finite());
    }

    #[test]
    fn test_vehicles_required_is_ceiling() {
        assert_eq!(vehicles_required(10, 6), 2);
        assert_eq!(vehicles_required(12, 6), 2);
        assert_eq!(vehicles_required(13, 6), 3);
        assert_eq!(vehicles_required(1, 40), 1);
    }

    #[test]
    fn test_van_allocation_cost() {
        let v = vehicle("Van", 4.2, 2.0, 2.2, 3.0, 18.0, 3.0, true);
        let a = evaluate(&v, false, &cargo(2.0, 1.0, 1.0, 0.5, 10), &PackingSettings::default()).unwrap();
        assert_eq!(a.units_per_vehicle, 6);
        assert_eq!(a.vehicles_required, 2);
        // 2 * (18*100 + 3*2.5*100)
        assert!((a.total_cost - 5100.0).abs() < 1e-6);
        assert!((a.average_load_tonnes - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_recommend_sorted_by_cost() {
        let results = recommend(&catalog(), &fragility(), &cargo(2.0, 1.0, 1.0, 0.5, 10), &PackingSettings::default());
        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(pair[0].total_cost <= pair[1].total_cost);
        }
        // Box truck: 1 vehicle, 28*100 + 2.2*5*100 = 3900
        assert_eq!(results[0].vehicle_name, "Box Truck");
        assert!((results[0].total_cost - 3900.0).abs() < 1e-6);
    }

    #[test]
    fn test_enclosure_filter() {
        let mut c = cargo(2.0, 1.0, 1.0, 0.5, 10);
        c.fragility = FragilityCategory::Fragile;
        let results = recommend(&catalog(), &fragility(), &c, &PackingSettings::default());
        assert!(results.iter().all(|r| r.vehicle_name != "Flatbed"));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_oversized_unit_excludes_only_that_class() {
        // 5 m long: too long for the van only
        let results = recommend(&catalog(), &fragility(), &cargo(5.0, 1.0, 1.0, 0.5, 4), &PackingSettings::default());
        let names: Vec<&str> = results.iter().map(|r| r.vehicle_name.as_str()).collect();
        assert!(!names.contains(&"Van"));
        assert!(names.contains(&"Box Truck"));
        assert!(names.contains(&"Flatbed"));
    }

    #[test]
    fn test_exclusion_reasons() {
        let flatbed = vehicle("Flatbed", 12.0, 2.6, 3.0, 20.0, 45.0, 1.8, false);
        let settings = PackingSettings::default();
        assert_eq!(
            evaluate(&flatbed, true, &cargo(1.0, 1.0, 1.0, 1.0, 1), &settings),
            Err(Exclusion::EnclosureRequired)
        );
        assert_eq!(
            evaluate(&flatbed, false, &cargo(1.0, 1.0, 1.0, 25.0, 1), &settings),
            Err(Exclusion::UnitDoesNotFit)
        );
    }

    #[test]
    fn test_deck_sized_unit_still_tiles() {
        let flatbed = vehicle("Flatbed", 12.0, 2.6, 3.0, 20.0, 45.0, 1.8, false);
        let unit = cargo(12.0, 2.6, 3.0, 20.0, 2);
        assert_eq!(units_by_volume(&flatbed, &unit, true), 1);
        let allocation = evaluate(&flatbed, false, &unit, &PackingSettings::default()).unwrap();
        assert_eq!(allocation.units_per_vehicle, 1);
        assert_eq!(allocation.vehicles_required, 2);
    }

    #[test]
    fn test_no_feasible_vehicle_is_empty() {
        let results = recommend(&catalog(), &fragility(), &cargo(30.0, 1.0, 1.0, 1.0, 1), &PackingSettings::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let tied = VehicleCatalog::new(vec![
            vehicle("First", 6.0, 2.5, 2.5, 10.0, 10.0, 0.0, true),
            vehicle("Second", 6.0, 2.5, 2.5, 10.0, 10.0, 0.0, true),
        ])
        .unwrap();
        let results = recommend(&tied, &fragility(), &cargo(1.0, 1.0, 1.0, 1.0, 3), &PackingSettings::default());
        assert_eq!(results[0].vehicle_name, "First");
        assert_eq!(results[1].vehicle_name, "Second");
    }
}
