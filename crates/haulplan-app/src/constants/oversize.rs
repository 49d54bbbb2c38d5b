//! Regulatory ODC thresholds

use haulplan_domain::model::OversizeLimits;

/// Per-unit limits above which an ODC permit is needed
pub const STANDARD_OVERSIZE_LIMITS: OversizeLimits = OversizeLimits {
    max_length: 12.0,
    max_width: 2.6,
    max_height: 3.8,
    max_weight: 40.0,
};
