//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat, UnitArgs};
use crate::output::{output_batch, output_catalog, output_first_fit, output_plan, output_vehicle};
use haulplan_app::app::{first_fit, plan_batch, plan_shipment, BatchOutcome, PlanOptions};
use haulplan_app::config::Config;
use haulplan_app::export::export_to_excel;
use haulplan_app::reference::ReferenceData;
use haulplan_domain::model::ShipmentRequest;
use haulplan_infra::shipment_csv::load_shipments;
use haulplan_types::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Recommend {
            unit,
            quantity,
            distance,
            fragility,
            top,
            no_stacking,
        } => {
            let (config, output_format) = load_config(&cli)?;
            let reference = ReferenceData::resolve(&config, cli.catalog.as_deref())?;
            let options = plan_options(&config, *no_stacking).with_top(*top);
            let request = ShipmentRequest {
                length: unit.length,
                width: unit.width,
                height: unit.height,
                weight: unit.weight,
                quantity: *quantity,
                distance_km: *distance,
                fragility: fragility.clone(),
            };
            cmd_recommend(&reference, request, &options, output_format)
        }

        Commands::Fit { unit } => {
            let (config, output_format) = load_config(&cli)?;
            let reference = ReferenceData::resolve(&config, cli.catalog.as_deref())?;
            cmd_fit(&reference, unit, output_format)
        }

        Commands::Catalog { name } => {
            let (config, output_format) = load_config(&cli)?;
            let reference = ReferenceData::resolve(&config, cli.catalog.as_deref())?;
            match name {
                Some(name) => cmd_catalog_entry(&reference, name, output_format),
                None => output_catalog(output_format, &reference),
            }
        }

        Commands::Batch {
            csv,
            output,
            no_stacking,
        } => {
            let (config, output_format) = load_config(&cli)?;
            let reference = ReferenceData::resolve(&config, cli.catalog.as_deref())?;
            let options = plan_options(&config, *no_stacking);
            cmd_batch(&reference, csv.clone(), output.clone(), &options, output_format)
        }

        // works on the raw file so a broken one can still be reset
        Commands::Config {
            show,
            set_output,
            set_catalog,
            clear_catalog,
            set_stacking,
            reset,
        } => {
            let edits = ConfigEdits {
                show: *show,
                set_output: *set_output,
                set_catalog: set_catalog.clone(),
                clear_catalog: *clear_catalog,
                set_stacking: *set_stacking,
                reset: *reset,
            };
            cmd_config(&Config::config_path()?, edits)
        }
    }
}

fn load_config(cli: &Cli) -> Result<(Config, OutputFormat)> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(?output_format, "configuration loaded");
    Ok((config, output_format))
}

fn plan_options(config: &Config, no_stacking: bool) -> PlanOptions {
    let mut packing = config.packing();
    if no_stacking {
        packing.stacking = false;
    }
    PlanOptions::new(packing)
}

fn cmd_recommend(
    reference: &ReferenceData,
    request: ShipmentRequest,
    options: &PlanOptions,
    output_format: OutputFormat,
) -> Result<()> {
    let plan = plan_shipment(reference, request, options)?;
    output_plan(output_format, &plan)
}

fn cmd_fit(reference: &ReferenceData, unit: &UnitArgs, output_format: OutputFormat) -> Result<()> {
    let vehicle = first_fit(reference, unit.length, unit.width, unit.height, unit.weight)?;
    output_first_fit(output_format, vehicle)
}

fn cmd_catalog_entry(reference: &ReferenceData, name: &str, output_format: OutputFormat) -> Result<()> {
    let vehicle = reference
        .catalog
        .get(name)
        .ok_or_else(|| Error::UnknownVehicle(name.to_string()))?;
    output_vehicle(output_format, vehicle)
}

fn cmd_batch(
    reference: &ReferenceData,
    csv_path: PathBuf,
    output: Option<PathBuf>,
    options: &PlanOptions,
    output_format: OutputFormat,
) -> Result<()> {
    if !csv_path.exists() {
        return Err(Error::FileNotFound(format!(
            "CSV file not found: {}",
            csv_path.display()
        )));
    }

    let records = load_shipments(&csv_path)?;
    eprintln!("Loaded {} shipments from {}", records.len(), csv_path.display());

    let pb = if output_format == OutputFormat::Table {
        ProgressBar::new(records.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let results = plan_batch(reference, records, options, |entry| {
        pb.set_message(entry.reference.clone());
        if let BatchOutcome::Rejected { reason } = &entry.outcome {
            pb.println(format!("Row {} ({}): {}", entry.row, entry.reference, reason));
        }
        pb.inc(1);
    });
    pb.finish_and_clear();

    output_batch(output_format, &results)?;

    if let Some(output_path) = output {
        export_to_excel(&results, &output_path)?;
        eprintln!("Exported to: {}", output_path.display());
    }

    Ok(())
}

/// Requested changes to the saved configuration
#[derive(Debug, Default)]
struct ConfigEdits {
    show: bool,
    set_output: Option<OutputFormat>,
    set_catalog: Option<PathBuf>,
    clear_catalog: bool,
    set_stacking: Option<bool>,
    reset: bool,
}

fn cmd_config(config_path: &Path, edits: ConfigEdits) -> Result<()> {
    if edits.reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load_from(config_path)?;
    let mut modified = false;

    if let Some(output_format) = edits.set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = edits.set_catalog {
        // catalog must load before it is saved
        ReferenceData::from_catalog_file(&path)?;
        config.catalog_path = Some(path);
        modified = true;
    }

    if edits.clear_catalog {
        config.catalog_path = None;
        modified = true;
    }

    if let Some(stacking) = edits.set_stacking {
        config.stacking = stacking;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration saved");
    }

    if edits.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
