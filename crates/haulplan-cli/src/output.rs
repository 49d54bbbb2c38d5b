//! Output formatting module

use haulplan_app::app::{BatchOutcome, BatchResults, ShipmentPlan};
use haulplan_app::reference::ReferenceData;
use haulplan_domain::model::VehicleClass;
use haulplan_domain::service::{generate_oversize_report, CUSTOM_HAULAGE_NOTICE};
use haulplan_types::OutputFormat;
use haulplan_types::Result;

pub fn output_plan(output_format: OutputFormat, plan: &ShipmentPlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(plan)?;
        println!("{}", content);
        return Ok(());
    }

    let cargo = &plan.cargo;
    println!("\nShipment");
    println!("========");
    println!(
        "Unit:            {:.2} x {:.2} x {:.2} m, {:.2} t",
        cargo.unit_length, cargo.unit_width, cargo.unit_height, cargo.unit_weight
    );
    println!("Quantity:        {}", cargo.quantity);
    println!("Total weight:    {:.2} t", cargo.total_weight());
    println!("Distance:        {:.1} km", cargo.distance_km);
    println!(
        "Fragility:       {}{}",
        cargo.fragility,
        if plan.requires_enclosure {
            " (closed body required)"
        } else {
            ""
        }
    );

    println!("\nVehicle Options (cheapest first)");
    println!("{}", "-".repeat(96));
    if plan.allocations.is_empty() {
        println!("No feasible vehicle. {}", CUSTOM_HAULAGE_NOTICE);
    } else {
        println!(
            "{:<3} {:<38} {:<9} {:>8} {:>10} {:>8} {:>14}",
            "#", "Vehicle", "Class", "Vehicles", "Units/Veh", "Load", "Total Cost"
        );
        println!("{}", "-".repeat(96));
        for (i, a) in plan.allocations.iter().enumerate() {
            println!(
                "{:<3} {:<38} {:<9} {:>8} {:>10} {:>7.1}% {:>14.2}",
                i + 1,
                truncate(&a.vehicle_name, 38),
                a.class_label.label(),
                a.vehicles_required,
                a.units_per_vehicle,
                a.load_ratio_percent,
                a.total_cost
            );
        }
    }

    println!("\nOversize Check");
    println!("{}", "-".repeat(50));
    print!("{}", generate_oversize_report(&plan.oversize));

    println!("\nPackaging:");
    println!("{}", plan.packaging_note);

    Ok(())
}

pub fn output_first_fit(output_format: OutputFormat, vehicle: Option<&VehicleClass>) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = match vehicle {
            Some(v) => serde_json::to_string_pretty(v)?,
            None => serde_json::to_string_pretty(&serde_json::json!({
                "vehicle": null,
                "notice": CUSTOM_HAULAGE_NOTICE,
            }))?,
        };
        println!("{}", content);
        return Ok(());
    }

    match vehicle {
        Some(v) => println!("Recommended Vehicle Type: {} ({})", v.name, v.category),
        None => println!("Recommended Vehicle Type: {}", CUSTOM_HAULAGE_NOTICE),
    }
    Ok(())
}

pub fn output_vehicle(output_format: OutputFormat, vehicle: &VehicleClass) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(vehicle)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\n{}", vehicle.name);
    println!("{}", "=".repeat(vehicle.name.chars().count()));
    println!("Class:           {}", vehicle.category);
    println!(
        "Deck:            {:.1} x {:.1} x {:.1} m",
        vehicle.max_length, vehicle.max_width, vehicle.max_height
    );
    println!("Payload:         {:.1} t", vehicle.max_weight);
    println!("Cost per km:     {:.2}", vehicle.cost_per_km);
    println!("Cost per t-km:   {:.2}", vehicle.cost_per_tonne_km);
    println!(
        "Closed body:     {}",
        if vehicle.supports_enclosure { "yes" } else { "no" }
    );
    Ok(())
}

pub fn output_catalog(output_format: OutputFormat, reference: &ReferenceData) -> Result<()> {
    let catalog = &reference.catalog;
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(catalog.list_classes())?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nVehicle Catalog ({} classes)", catalog.len());
    println!("{}", "-".repeat(104));
    println!(
        "{:<38} {:<9} {:>6} {:>6} {:>6} {:>7} {:>8} {:>9} {:>7}",
        "Vehicle", "Class", "L (m)", "W (m)", "H (m)", "Max t", "Cost/km", "Cost/t-km", "Closed"
    );
    println!("{}", "-".repeat(104));
    for v in catalog.list_classes() {
        println!(
            "{:<38} {:<9} {:>6.1} {:>6.1} {:>6.1} {:>7.1} {:>8.2} {:>9.2} {:>7}",
            truncate(&v.name, 38),
            catalog.classify(v).label(),
            v.max_length,
            v.max_width,
            v.max_height,
            v.max_weight,
            v.cost_per_km,
            v.cost_per_tonne_km,
            if v.supports_enclosure { "yes" } else { "no" }
        );
    }

    let limits = &reference.oversize_limits;
    println!(
        "\nODC limits per unit: length {:.1} m, width {:.1} m, height {:.1} m, weight {:.1} t",
        limits.max_length, limits.max_width, limits.max_height, limits.max_weight
    );
    Ok(())
}

pub fn output_batch(output_format: OutputFormat, results: &BatchResults) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBatch Plan");
    println!("==========");
    println!("Shipments:            {}", results.entries.len());
    println!("Planned:              {}", results.planned());
    println!("Rejected:             {}", results.rejected());
    println!("No feasible vehicle:  {}", results.infeasible());
    println!("Oversize (ODC):       {}", results.oversize());
    println!("Total best cost:      {:.2}", results.total_best_cost());
    println!();

    println!(
        "{:<5} {:<14} {:<38} {:>8} {:>14} {:<4}",
        "Row", "Reference", "Best Vehicle", "Vehicles", "Total Cost", "ODC"
    );
    println!("{}", "-".repeat(88));
    for entry in &results.entries {
        match &entry.outcome {
            BatchOutcome::Rejected { reason } => {
                println!(
                    "{:<5} {:<14} rejected: {}",
                    entry.row,
                    truncate(&entry.reference, 14),
                    reason
                );
            }
            BatchOutcome::Planned { plan } => {
                let odc = if plan.is_oversize() { "yes" } else { "" };
                match plan.best() {
                    Some(best) => println!(
                        "{:<5} {:<14} {:<38} {:>8} {:>14.2} {:<4}",
                        entry.row,
                        truncate(&entry.reference, 14),
                        truncate(&best.vehicle_name, 38),
                        best.vehicles_required,
                        best.total_cost,
                        odc
                    ),
                    None => println!(
                        "{:<5} {:<14} {:<38} {:>8} {:>14} {:<4}",
                        entry.row,
                        truncate(&entry.reference, 14),
                        CUSTOM_HAULAGE_NOTICE,
                        "-",
                        "-",
                        odc
                    ),
                }
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
