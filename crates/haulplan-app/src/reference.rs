//! Reference data bundle handed to every planning call
//!
//! Built once per process and passed by reference. Nothing in it changes afterwards.

use std::path::Path;

use haulplan_domain::model::{FragilityTable, OversizeLimits, VehicleCatalog};
use haulplan_domain::repository::VehicleCatalogRepository;
use haulplan_types::Result;
use tracing::debug;

use crate::config::Config;
use crate::constants::{reference_catalog, standard_fragility_table, STANDARD_OVERSIZE_LIMITS};
use crate::repository::open_catalog_repo;

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub catalog: VehicleCatalog,
    pub fragility: FragilityTable,
    pub oversize_limits: OversizeLimits,
}

impl ReferenceData {
    /// Built-in reference catalog, fragility rules and ODC limits
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            catalog: reference_catalog()?,
            fragility: standard_fragility_table()?,
            oversize_limits: STANDARD_OVERSIZE_LIMITS,
        })
    }

    /// Catalog (and ODC limits, when present) from a repository; built-in rules otherwise
    pub fn from_repository(repo: &impl VehicleCatalogRepository) -> Result<Self> {
        let catalog = repo.load_catalog()?;
        let oversize_limits = repo
            .oversize_limits()?
            .unwrap_or(STANDARD_OVERSIZE_LIMITS);
        Ok(Self {
            catalog,
            fragility: standard_fragility_table()?,
            oversize_limits,
        })
    }

    pub fn from_catalog_file(path: &Path) -> Result<Self> {
        let repo = open_catalog_repo(path)?;
        Self::from_repository(&repo)
    }

    /// Pick the catalog source: explicit override, then config, then built-in
    pub fn resolve(config: &Config, catalog_override: Option<&Path>) -> Result<Self> {
        match catalog_override.or(config.catalog_path.as_deref()) {
            Some(path) => Self::from_catalog_file(path),
            None => {
                debug!("using built-in reference catalog");
                Self::builtin()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r#"
[oversize_limits]
max_length = 15.0
max_width = 3.0
max_height = 4.0
max_weight = 50.0

[[vehicles]]
name = "Yard Tractor"
max_length = 8.0
max_width = 2.5
max_height = 3.0
max_weight = 15.0
cost_per_km = 30.0
cost_per_tonne_km = 1.0
"#;

    #[test]
    fn test_builtin() {
        let data = ReferenceData::builtin().unwrap();
        assert_eq!(data.catalog.len(), 10);
        assert_eq!(data.oversize_limits.max_length, 12.0);
    }

    #[test]
    fn test_resolve_prefers_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, CATALOG).unwrap();

        let config = Config::default();
        let data = ReferenceData::resolve(&config, Some(&path)).unwrap();
        assert_eq!(data.catalog.len(), 1);
        assert_eq!(data.oversize_limits.max_length, 15.0);
    }

    #[test]
    fn test_resolve_from_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, CATALOG.replace("[oversize_limits]", "[notes]")).unwrap();

        let config = Config {
            catalog_path: Some(path),
            ..Config::default()
        };
        let data = ReferenceData::resolve(&config, None).unwrap();
        assert!(data.catalog.get("Yard Tractor").is_some());
        assert_eq!(data.oversize_limits, STANDARD_OVERSIZE_LIMITS);
    }

    #[test]
    fn test_resolve_missing_file_is_error() {
        let config = Config::default();
        let result = ReferenceData::resolve(&config, Some(Path::new("/nonexistent/catalog.toml")));
        assert!(result.is_err());
    }
}
