//! Shipment planning use cases
//!
//! Validates raw input, runs the fleet optimizer and gathers the advisory
//! side channels (ODC exceedances, packaging note) into one plan.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use haulplan_domain::model::{
    AllocationResult, CargoSpec, OversizeExceedance, ShipmentRequest, VehicleClass,
};
use haulplan_domain::service::{check_oversize, recommend, select_first_fit, PackingSettings};
use haulplan_infra::shipment_csv::ShipmentRecord;
use haulplan_types::{InputError, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::reference::ReferenceData;

/// Per-run planning options
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    pub packing: PackingSettings,
    /// Keep only the N cheapest allocations
    pub top: Option<NonZeroUsize>,
}

impl PlanOptions {
    pub fn new(packing: PackingSettings) -> Self {
        Self { packing, top: None }
    }

    pub fn with_top(mut self, top: Option<NonZeroUsize>) -> Self {
        self.top = top;
        self
    }
}

/// Everything the caller needs to present for one shipment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentPlan {
    pub cargo: CargoSpec,
    /// Feasible vehicle classes, cheapest first. Empty when nothing fits.
    pub allocations: Vec<AllocationResult>,
    pub oversize: Vec<OversizeExceedance>,
    pub requires_enclosure: bool,
    pub packaging_note: String,
}

impl ShipmentPlan {
    pub fn best(&self) -> Option<&AllocationResult> {
        self.allocations.first()
    }

    pub fn is_feasible(&self) -> bool {
        !self.allocations.is_empty()
    }

    pub fn is_oversize(&self) -> bool {
        !self.oversize.is_empty()
    }
}

/// Validate a raw request and plan it
pub fn plan_shipment(
    reference: &ReferenceData,
    request: ShipmentRequest,
    options: &PlanOptions,
) -> Result<ShipmentPlan> {
    let cargo = request.into_cargo()?;
    Ok(plan_cargo(reference, &cargo, options))
}

/// Plan an already validated cargo spec
pub fn plan_cargo(reference: &ReferenceData, cargo: &CargoSpec, options: &PlanOptions) -> ShipmentPlan {
    let mut allocations = recommend(
        &reference.catalog,
        &reference.fragility,
        cargo,
        &options.packing,
    );
    if let Some(top) = options.top {
        allocations.truncate(top.get());
    }

    let oversize = check_oversize(cargo, &reference.oversize_limits);
    debug!(
        feasible = allocations.len(),
        oversize = oversize.len(),
        "planned shipment"
    );

    ShipmentPlan {
        cargo: cargo.clone(),
        allocations,
        oversize,
        requires_enclosure: reference.fragility.requires_enclosure(cargo.fragility),
        packaging_note: reference.fragility.packaging_note(cargo.fragility).to_string(),
    }
}

/// First catalog class able to take a single unit of this size and weight
pub fn first_fit(
    reference: &ReferenceData,
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
) -> Result<Option<&VehicleClass>> {
    for (field, value) in [
        ("length", length),
        ("width", width),
        ("height", height),
        ("weight", weight),
    ] {
        ensure_positive(field, value)?;
    }
    Ok(select_first_fit(&reference.catalog, length, width, height, weight))
}

fn ensure_positive(field: &'static str, value: f64) -> std::result::Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(())
}

/// Outcome of one batch row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    Planned { plan: ShipmentPlan },
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub row: usize,
    pub reference: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    pub fn plan(&self) -> Option<&ShipmentPlan> {
        match &self.outcome {
            BatchOutcome::Planned { plan } => Some(plan),
            BatchOutcome::Rejected { .. } => None,
        }
    }
}

/// Results of planning a whole shipment file
#[derive(Debug, Clone, Serialize)]
pub struct BatchResults {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<BatchEntry>,
}

impl BatchResults {
    pub fn planned(&self) -> usize {
        self.entries.iter().filter(|e| e.plan().is_some()).count()
    }

    pub fn rejected(&self) -> usize {
        self.entries.len() - self.planned()
    }

    /// Planned rows for which no vehicle class fits
    pub fn infeasible(&self) -> usize {
        self.entries
            .iter()
            .filter_map(BatchEntry::plan)
            .filter(|p| !p.is_feasible())
            .count()
    }

    pub fn oversize(&self) -> usize {
        self.entries
            .iter()
            .filter_map(BatchEntry::plan)
            .filter(|p| p.is_oversize())
            .count()
    }

    /// Sum of the cheapest fleet cost over every feasible row
    pub fn total_best_cost(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(BatchEntry::plan)
            .filter_map(ShipmentPlan::best)
            .map(|a| a.total_cost)
            .sum()
    }
}

/// Plan every record. Invalid rows are kept as rejections and do not stop the batch.
pub fn plan_batch<F>(
    reference: &ReferenceData,
    records: Vec<ShipmentRecord>,
    options: &PlanOptions,
    mut on_entry: F,
) -> BatchResults
where
    F: FnMut(&BatchEntry),
{
    let generated_at = Utc::now();
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let planned = record
            .request
            .and_then(|request| plan_shipment(reference, request, options).map_err(|e| e.to_string()));
        let outcome = match planned {
            Ok(plan) => BatchOutcome::Planned { plan },
            Err(reason) => {
                warn!(row = record.row, reference = %record.reference, %reason, "row rejected");
                BatchOutcome::Rejected { reason }
            }
        };
        let entry = BatchEntry {
            row: record.row,
            reference: record.reference,
            outcome,
        };
        on_entry(&entry);
        entries.push(entry);
    }

    let results = BatchResults {
        generated_at,
        entries,
    };
    info!(
        planned = results.planned(),
        rejected = results.rejected(),
        "batch complete"
    );
    results
}
