//! The parts of the site content document the estimator reads

use serde::{Deserialize, Serialize};

use super::lenient;
use super::material::Material;
use crate::units::DEFAULT_WASTE_PERCENT;

/// Content document as written by the CMS
///
/// Only `materials` and `calculators` are modelled; other sections of the
/// document (hero, products, locations, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub materials: Vec<Material>,

    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub calculators: CalculatorSettings,
}

/// Per-calculator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub aggregates: CalculatorDefaults,

    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub concrete: CalculatorDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorDefaults {
    #[serde(default, deserialize_with = "lenient::percent", skip_serializing_if = "Option::is_none")]
    pub default_waste_pct: Option<f64>,
}

impl CalculatorDefaults {
    /// Configured waste allowance, or 10%
    pub fn waste_percent(&self) -> f64 {
        self.default_waste_pct.unwrap_or(DEFAULT_WASTE_PERCENT)
    }
}

impl CalculatorSettings {
    pub fn aggregate_waste_percent(&self) -> f64 {
        self.aggregates.waste_percent()
    }

    pub fn concrete_waste_percent(&self) -> f64 {
        self.concrete.waste_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_ten_percent() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.aggregate_waste_percent(), 10.0);
        assert_eq!(settings.concrete_waste_percent(), 10.0);
    }

    #[test]
    fn test_parse_full_document_ignores_other_sections() {
        let json = r##"{
            "theme": { "primary": "#F69321" },
            "hero": { "headline": "Building the Future" },
            "materials": [
                { "id": "a", "name": "Crusher Run", "densityLbPerFt3": 125 }
            ],
            "calculators": {
                "aggregates": { "defaultWastePct": 8 },
                "concrete": { "defaultWastePct": "5" }
            }
        }"##;
        let content: SiteContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.materials.len(), 1);
        assert_eq!(content.calculators.aggregate_waste_percent(), 8.0);
        assert_eq!(content.calculators.concrete_waste_percent(), 5.0);
    }

    #[test]
    fn test_parse_nulls() {
        let json = r#"{ "materials": null, "calculators": { "aggregates": null } }"#;
        let content: SiteContent = serde_json::from_str(json).unwrap();
        assert!(content.materials.is_empty());
        assert_eq!(content.calculators.aggregate_waste_percent(), 10.0);
    }

    #[test]
    fn test_blank_waste_is_zero_not_default() {
        let json = r#"{ "calculators": {
            "aggregates": { "defaultWastePct": "" },
            "concrete": { "defaultWastePct": null }
        } }"#;
        let content: SiteContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.calculators.aggregates.default_waste_pct, Some(0.0));
        assert_eq!(content.calculators.aggregate_waste_percent(), 0.0);
        assert_eq!(content.calculators.concrete_waste_percent(), 10.0);
    }

    #[test]
    fn test_parse_empty_document() {
        let content: SiteContent = serde_json::from_str("{}").unwrap();
        assert_eq!(content, SiteContent::default());
    }
}
