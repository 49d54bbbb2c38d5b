//! Vehicle catalog loader from TOML
//!
//! ```toml
//! [oversize_limits]
//! max_length = 12.0
//! max_width = 2.6
//! max_height = 3.8
//! max_weight = 40.0
//!
//! [[vehicles]]
//! name = "14 ft Truck (Standard)"
//! max_length = 6.0
//! max_width = 2.5
//! max_height = 2.5
//! max_weight = 10.0
//! cost_per_km = 28.0
//! cost_per_tonne_km = 2.2
//! supports_enclosure = true
//! category = "medium"   # optional, derived from capacity when absent
//! ```

use std::fs;
use std::path::Path;

use haulplan_domain::model::{OversizeLimits, VehicleCatalog, VehicleCategory, VehicleClass};
use haulplan_types::{ConfigError, Error, Result};
use serde::Deserialize;
use tracing::info;

/// Container for parsing a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    oversize_limits: Option<OversizeLimits>,
}

#[derive(Debug, Deserialize)]
struct VehicleRecord {
    name: String,
    max_length: f64,
    max_width: f64,
    max_height: f64,
    max_weight: f64,
    cost_per_km: f64,
    cost_per_tonne_km: f64,
    #[serde(default)]
    supports_enclosure: bool,
    #[serde(default)]
    category: Option<VehicleCategory>,
}

impl From<VehicleRecord> for VehicleClass {
    fn from(r: VehicleRecord) -> Self {
        let category = r
            .category
            .unwrap_or_else(|| VehicleCategory::from_capacity(r.max_weight, r.max_width));
        VehicleClass {
            name: r.name,
            max_length: r.max_length,
            max_width: r.max_width,
            max_height: r.max_height,
            max_weight: r.max_weight,
            cost_per_km: r.cost_per_km,
            cost_per_tonne_km: r.cost_per_tonne_km,
            supports_enclosure: r.supports_enclosure,
            category,
        }
    }
}

/// Catalog and optional ODC limits read from a TOML table
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: VehicleCatalog,
    oversize_limits: Option<OversizeLimits>,
}

impl CatalogLoader {
    /// Load a catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read catalog file: {}",
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        info!(
            path = %path.display(),
            classes = loader.catalog.len(),
            "loaded vehicle catalog"
        );
        Ok(loader)
    }

    /// Load a catalog from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse catalog TOML: {}",
                e
            )))
        })?;

        if let Some(limits) = &file.oversize_limits {
            check_limits(limits)?;
        }

        let classes = file.vehicles.into_iter().map(VehicleClass::from).collect();
        let catalog = VehicleCatalog::new(classes)?;

        Ok(Self {
            catalog,
            oversize_limits: file.oversize_limits,
        })
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    pub fn oversize_limits(&self) -> Option<OversizeLimits> {
        self.oversize_limits
    }
}

fn check_limits(limits: &OversizeLimits) -> Result<()> {
    let values = [
        ("max_length", limits.max_length),
        ("max_width", limits.max_width),
        ("max_height", limits.max_height),
        ("max_weight", limits.max_weight),
    ];
    for (field, value) in values {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidCatalog(format!(
                "oversize_limits.{} must be positive (got {})",
                field, value
            ))
            .into());
        }
    }
    Ok(())
}
