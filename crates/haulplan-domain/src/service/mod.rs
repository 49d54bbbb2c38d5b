//! Domain services

pub mod first_fit;
pub mod fleet_optimizer;
pub mod oversize_checker;

pub use first_fit::{select_first_fit, CUSTOM_HAULAGE_NOTICE};
pub use fleet_optimizer::{recommend, Exclusion, PackingSettings};
pub use oversize_checker::{check_oversize, generate_oversize_report};
