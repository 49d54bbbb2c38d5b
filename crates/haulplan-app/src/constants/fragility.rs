//! Packaging and enclosure rules per fragility category

use haulplan_domain::model::{FragilityCategory, FragilityRule, FragilityTable};
use haulplan_types::ConfigError;

fn rule(requires_enclosure: bool, packaging_note: &str) -> FragilityRule {
    FragilityRule {
        requires_enclosure,
        packaging_note: packaging_note.to_string(),
    }
}

/// Standard rules covering every fragility category
pub fn standard_fragility_table() -> Result<FragilityTable, ConfigError> {
    FragilityTable::new([
        (
            FragilityCategory::None,
            rule(
                false,
                "Standard palletisation and stretch wrap. No special protection required.",
            ),
        ),
        (
            FragilityCategory::Fragile,
            rule(
                true,
                "Crate with shock-absorbing padding and mark FRAGILE / THIS SIDE UP. Closed body only.",
            ),
        ),
        (
            FragilityCategory::WeatherSensitive,
            rule(
                true,
                "Shrink-wrap with desiccant and VCI film. Keep under closed cover in transit.",
            ),
        ),
        (
            FragilityCategory::PrecisionInstrument,
            rule(
                true,
                "Custom wooden crate with anti-vibration mounts and tilt/shock indicators.",
            ),
        ),
        (
            FragilityCategory::HeavyMachinery,
            rule(
                false,
                "Skid-mount, lash and chock to the deck. Cover machined surfaces with tarpaulin.",
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete() {
        let table = standard_fragility_table().unwrap();
        for category in FragilityCategory::ALL {
            assert!(!table.packaging_note(category).is_empty());
        }
    }

    #[test]
    fn test_enclosure_requirements() {
        let table = standard_fragility_table().unwrap();
        assert!(!table.requires_enclosure(FragilityCategory::None));
        assert!(table.requires_enclosure(FragilityCategory::Fragile));
        assert!(table.requires_enclosure(FragilityCategory::WeatherSensitive));
        assert!(table.requires_enclosure(FragilityCategory::PrecisionInstrument));
        assert!(!table.requires_enclosure(FragilityCategory::HeavyMachinery));
    }
}
