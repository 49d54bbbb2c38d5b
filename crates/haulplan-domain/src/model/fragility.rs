//! Fragility categories and their handling rules

use std::collections::HashMap;
use std::str::FromStr;

use haulplan_types::{ConfigError, InputError};
use serde::{Deserialize, Serialize};

/// Handling class of the cargo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragilityCategory {
    #[default]
    None,
    Fragile,
    WeatherSensitive,
    PrecisionInstrument,
    HeavyMachinery,
}

impl FragilityCategory {
    pub const ALL: [FragilityCategory; 5] = [
        FragilityCategory::None,
        FragilityCategory::Fragile,
        FragilityCategory::WeatherSensitive,
        FragilityCategory::PrecisionInstrument,
        FragilityCategory::HeavyMachinery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FragilityCategory::None => "none",
            FragilityCategory::Fragile => "fragile",
            FragilityCategory::WeatherSensitive => "weather-sensitive",
            FragilityCategory::PrecisionInstrument => "precision-instrument",
            FragilityCategory::HeavyMachinery => "heavy-machinery",
        }
    }
}

impl std::fmt::Display for FragilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FragilityCategory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        FragilityCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| InputError::UnknownFragility(s.to_string()))
    }
}

/// What a fragility category demands of the vehicle and the packing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragilityRule {
    pub requires_enclosure: bool,
    pub packaging_note: String,
}

/// Lookup from every fragility category to its rule
#[derive(Debug, Clone, PartialEq)]
pub struct FragilityTable {
    rules: HashMap<FragilityCategory, FragilityRule>,
}

impl FragilityTable {
    /// Build a table. Every category must have exactly one rule.
    pub fn new(
        rules: impl IntoIterator<Item = (FragilityCategory, FragilityRule)>,
    ) -> Result<Self, ConfigError> {
        let mut map = HashMap::new();
        for (category, rule) in rules {
            if map.insert(category, rule).is_some() {
                return Err(ConfigError::ParseError(format!(
                    "duplicate fragility rule for {}",
                    category
                )));
            }
        }
        if let Some(missing) = FragilityCategory::ALL.iter().find(|c| !map.contains_key(c)) {
            return Err(ConfigError::ParseError(format!(
                "missing fragility rule for {}",
                missing
            )));
        }
        Ok(Self { rules: map })
    }

    pub fn rule(&self, category: FragilityCategory) -> Option<&FragilityRule> {
        self.rules.get(&category)
    }

    pub fn requires_enclosure(&self, category: FragilityCategory) -> bool {
        self.rule(category).is_some_and(|r| r.requires_enclosure)
    }

    /// Packaging recommendation, surfaced to the caller verbatim
    pub fn packaging_note(&self, category: FragilityCategory) -> &str {
        self.rule(category)
            .map(|r| r.packaging_note.as_str())
            .unwrap_or_default()
    }
}
