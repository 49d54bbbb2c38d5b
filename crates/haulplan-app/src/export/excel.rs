//! Excel export functionality

use crate::app::{BatchOutcome, BatchResults};
use haulplan_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Export batch plans to an Excel file
pub fn export_to_excel(results: &BatchResults, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, results)?;

    let plans_sheet = workbook.add_worksheet();
    write_plans_sheet(plans_sheet, results)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Fleet Planning Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let rows: [(&str, f64); 6] = [
        ("Total Shipments:", results.entries.len() as f64),
        ("Planned:", results.planned() as f64),
        ("Rejected:", results.rejected() as f64),
        ("No Feasible Vehicle:", results.infeasible() as f64),
        ("Oversize (ODC):", results.oversize() as f64),
        ("Total Best Cost:", results.total_best_cost()),
    ];

    sheet
        .write_string(2, 0, "Generated At:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, results.generated_at.to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    for (i, (label, value)) in rows.iter().enumerate() {
        let row = (i + 3) as u32;
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *value)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_plans_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet
        .set_name("Plans")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Row",
        "Reference",
        "Status",
        "Vehicle",
        "Class",
        "Vehicles",
        "Units/Vehicle",
        "Total Cost",
        "ODC",
        "Packaging",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, entry) in results.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet
            .write_number(row, 0, entry.row as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &entry.reference)
            .map_err(|e| Error::Excel(e.to_string()))?;

        match &entry.outcome {
            BatchOutcome::Rejected { reason } => {
                sheet
                    .write_string(row, 2, "Rejected")
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_string(row, 9, reason)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
            BatchOutcome::Planned { plan } => {
                let odc = plan
                    .oversize
                    .iter()
                    .map(|e| e.dimension.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                sheet
                    .write_string(row, 8, &odc)
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_string(row, 9, &plan.packaging_note)
                    .map_err(|e| Error::Excel(e.to_string()))?;

                let Some(best) = plan.best() else {
                    sheet
                        .write_string(row, 2, "No feasible vehicle")
                        .map_err(|e| Error::Excel(e.to_string()))?;
                    continue;
                };

                sheet
                    .write_string(row, 2, "Planned")
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_string(row, 3, &best.vehicle_name)
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_string(row, 4, best.class_label.label())
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_number(row, 5, f64::from(best.vehicles_required))
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_number(row, 6, f64::from(best.units_per_vehicle))
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_number(row, 7, best.total_cost)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
        }
    }

    Ok(())
}
