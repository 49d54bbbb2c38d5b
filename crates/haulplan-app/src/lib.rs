//! Application service layer - use cases, config, reference data, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod reference;
pub mod repository;
