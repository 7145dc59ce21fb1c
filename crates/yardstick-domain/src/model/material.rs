//! Material records as stored by the content store

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::units::{is_positive, tons_per_cy_to_lb_per_ft3};

/// Material entry from the content document
///
/// Field names follow the content document (camelCase). Density is kept in
/// whichever unit the record was saved with; use [`Material::density`] to
/// get a typed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Bulk density in lb/ft³
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub density_lb_per_ft3: Option<f64>,

    /// Legacy bulk density in t/yd³
    #[serde(
        default,
        rename = "densityTonsPerCY",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub density_tons_per_cy: Option<f64>,

    /// Only an explicit `false` hides the material
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Bulk density in one of the supported units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Density {
    /// Pounds per cubic foot
    LbPerFt3(f64),
    /// Short tons per cubic yard (older records)
    TonsPerCubicYard(f64),
}

impl Density {
    /// Density expressed in lb/ft³
    pub fn lb_per_ft3(self) -> f64 {
        match self {
            Density::LbPerFt3(v) => v,
            Density::TonsPerCubicYard(v) => tons_per_cy_to_lb_per_ft3(v),
        }
    }

    /// Raw value in the variant's own unit
    pub fn value(self) -> f64 {
        match self {
            Density::LbPerFt3(v) | Density::TonsPerCubicYard(v) => v,
        }
    }

    pub fn unit_label(self) -> &'static str {
        match self {
            Density::LbPerFt3(_) => "lb/ft³",
            Density::TonsPerCubicYard(_) => "t/yd³",
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value(), self.unit_label())
    }
}

impl Material {
    /// Material with a density in lb/ft³
    pub fn with_lb_per_ft3(id: &str, name: &str, lb_per_ft3: f64) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            density_lb_per_ft3: Some(lb_per_ft3),
            ..Default::default()
        }
    }

    /// Material saved with the legacy t/yd³ field
    pub fn with_tons_per_cy(id: &str, name: &str, tons_per_cy: f64) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            density_tons_per_cy: Some(tons_per_cy),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    /// First usable density representation
    ///
    /// lb/ft³ wins when it is a positive finite number; otherwise the legacy
    /// t/yd³ field is used under the same rule.
    pub fn density(&self) -> Option<Density> {
        if let Some(v) = self.density_lb_per_ft3.filter(|v| is_positive(*v)) {
            return Some(Density::LbPerFt3(v));
        }
        self.density_tons_per_cy
            .filter(|v| is_positive(*v))
            .map(Density::TonsPerCubicYard)
    }
}
