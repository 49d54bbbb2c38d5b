//! Over-dimensional cargo (ODC) check
//!
//! Advisory only: exceedances flag that special permits apply. They never change
//! which vehicle classes are feasible.

use crate::model::{CargoSpec, Dimension, OversizeExceedance, OversizeLimits};

/// Every per-unit dimension strictly above its limit, in length, width, height, weight order
pub fn check_oversize(cargo: &CargoSpec, limits: &OversizeLimits) -> Vec<OversizeExceedance> {
    [
        (Dimension::Length, cargo.unit_length, limits.max_length),
        (Dimension::Width, cargo.unit_width, limits.max_width),
        (Dimension::Height, cargo.unit_height, limits.max_height),
        (Dimension::Weight, cargo.unit_weight, limits.max_weight),
    ]
    .into_iter()
    .filter(|(_, actual, limit)| actual > limit)
    .map(|(dimension, actual, limit)| OversizeExceedance {
        dimension,
        actual,
        limit,
    })
    .collect()
}

pub fn generate_oversize_report(exceedances: &[OversizeExceedance]) -> String {
    let mut report = String::new();
    if exceedances.is_empty() {
        report.push_str("Within regulatory limits. No ODC permit needed.\n");
        return report;
    }

    report.push_str("Over-Dimensional Cargo (ODC): special permits apply\n");
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>12}\n",
        "Dimension", "Actual", "Limit", "Excess"
    ));
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    for e in exceedances {
        let unit = e.dimension.unit();
        report.push_str(&format!(
            "{:<10} {:>10.2} {} {:>10.2} {} {:>+10.2} {}\n",
            e.dimension.to_string(),
            e.actual,
            unit,
            e.limit,
            unit,
            e.excess(),
            unit
        ));
    }
    report
}
