//! Fleet recommendation properties against the reference catalog

use haulplan_app::app::{plan_cargo, plan_shipment, PlanOptions};
use haulplan_app::reference::ReferenceData;
use haulplan_domain::model::{CargoSpec, Dimension, FragilityCategory, ShipmentRequest, VehicleClass};
use haulplan_domain::service::{recommend, PackingSettings};

fn reference() -> ReferenceData {
    ReferenceData::builtin().expect("built-in reference data")
}

fn cargo(length: f64, width: f64, height: f64, weight: f64, quantity: u32) -> CargoSpec {
    CargoSpec {
        unit_length: length,
        unit_width: width,
        unit_height: height,
        unit_weight: weight,
        quantity,
        distance_km: 100.0,
        fragility: FragilityCategory::None,
    }
}

fn admits(v: &VehicleClass, c: &CargoSpec) -> bool {
    v.admits_unit(c.unit_length, c.unit_width, c.unit_height, c.unit_weight)
}

#[test]
fn test_reference_scenario_lists_every_fitting_class() {
    let data = reference();
    let c = cargo(2.0, 1.0, 1.0, 0.5, 10);
    let results = recommend(&data.catalog, &data.fragility, &c, &PackingSettings::default());

    let fitting = data.catalog.list_classes().iter().filter(|v| admits(v, &c)).count();
    assert_eq!(results.len(), fitting);
    assert_eq!(results.len(), 10);

    let cheapest = results
        .iter()
        .map(|r| r.total_cost)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(results[0].total_cost, cheapest);
    assert_eq!(results[0].vehicle_name, "14 ft Truck (Standard)");
}

#[test]
fn test_fleet_covers_quantity_minimally() {
    let data = reference();
    for quantity in [1, 7, 10, 64, 250, 1999] {
        let c = cargo(1.2, 0.8, 0.9, 0.35, quantity);
        for r in recommend(&data.catalog, &data.fragility, &c, &PackingSettings::default()) {
            assert!(r.fleet_capacity() >= u64::from(quantity), "{} under capacity", r.vehicle_name);
            let one_fewer = u64::from(r.units_per_vehicle) * u64::from(r.vehicles_required - 1);
            assert!(one_fewer < u64::from(quantity), "{} oversized fleet", r.vehicle_name);
            assert_eq!(r.vehicles_required, quantity.div_ceil(r.units_per_vehicle));
        }
    }
}

#[test]
fn test_sorted_by_cost() {
    let data = reference();
    let c = cargo(3.0, 2.0, 1.5, 4.0, 23);
    let results = recommend(&data.catalog, &data.fragility, &c, &PackingSettings::default());
    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(pair[0].total_cost <= pair[1].total_cost);
    }
}

#[test]
fn test_single_unit_needs_one_vehicle() {
    let data = reference();
    let c = cargo(2.0, 1.0, 1.0, 0.5, 1);
    for r in recommend(&data.catalog, &data.fragility, &c, &PackingSettings::default()) {
        assert_eq!(r.vehicles_required, 1);
    }
}

#[test]
fn test_too_tall_unit_excludes_only_lower_classes() {
    let data = reference();
    // 2.3 m tall: above the LCV's 2.2 m, within every other class
    let c = cargo(2.0, 1.0, 2.3, 0.5, 4);
    let results = recommend(&data.catalog, &data.fragility, &c, &PackingSettings::default());
    let names: Vec<&str> = results.iter().map(|r| r.vehicle_name.as_str()).collect();
    assert!(!names.contains(&"LCV Truck (Light Commercial Vehicle)"));
    assert_eq!(results.len(), data.catalog.len() - 1);
}

#[test]
fn test_zero_unit_weight_is_guarded() {
    let data = reference();
    let c = cargo(1.0, 1.0, 1.0, 0.0, 5);
    let results = recommend(&data.catalog, &data.fragility, &c, &PackingSettings::default());
    assert_eq!(results.len(), data.catalog.len());
    for r in &results {
        assert!(r.total_cost.is_finite());
        assert_eq!(r.vehicles_required, 1);
    }
}

#[test]
fn test_length_over_limit_always_flagged() {
    let data = reference();
    let c = cargo(13.0, 2.0, 2.0, 8.0, 2);
    let plan = plan_cargo(&data, &c, &PlanOptions::default());
    assert_eq!(plan.oversize.len(), 1);
    let e = plan.oversize[0];
    assert_eq!(e.dimension, Dimension::Length);
    assert_eq!(e.actual, 13.0);
    assert_eq!(e.limit, 12.0);
    assert!(plan.is_feasible());
}

#[test]
fn test_recommend_is_idempotent() {
    let data = reference();
    let request = ShipmentRequest {
        length: 1.5,
        width: 1.2,
        height: 1.1,
        weight: 0.9,
        quantity: 37,
        distance_km: 420.0,
        fragility: "weather-sensitive".to_string(),
    };
    let options = PlanOptions::default();
    let first = plan_shipment(&data, request.clone(), &options).unwrap();
    let second = plan_shipment(&data, request, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_stacking_needs_more_vehicles() {
    let data = reference();
    let c = cargo(1.0, 1.0, 1.0, 0.1, 200);
    let stacked = recommend(&data.catalog, &data.fragility, &c, &PackingSettings { stacking: true });
    let flat = recommend(&data.catalog, &data.fragility, &c, &PackingSettings { stacking: false });
    let lcv = |rs: &[haulplan_domain::model::AllocationResult]| {
        rs.iter()
            .find(|r| r.vehicle_name.starts_with("LCV"))
            .map(|r| r.vehicles_required)
            .unwrap()
    };
    // 4 x 2 x 2 = 16 stacked, 8 flat; payload allows 30
    assert_eq!(lcv(&stacked), 13);
    assert_eq!(lcv(&flat), 25);
}

#[test]
fn test_nothing_fits_is_empty_not_error() {
    let data = reference();
    let request = ShipmentRequest {
        length: 35.0,
        width: 2.0,
        height: 2.0,
        weight: 10.0,
        quantity: 1,
        distance_km: 50.0,
        fragility: String::new(),
    };
    let plan = plan_shipment(&data, request, &PlanOptions::default()).unwrap();
    assert!(!plan.is_feasible());
    assert!(plan.best().is_none());
}
