//! Built-in reference data

pub mod fragility;
pub mod oversize;
pub mod vehicle_catalog;

pub use fragility::standard_fragility_table;
pub use oversize::STANDARD_OVERSIZE_LIMITS;
pub use vehicle_catalog::reference_catalog;
