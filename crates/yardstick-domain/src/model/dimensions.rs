//! Project dimensions and raw-input coercion

use serde::{Deserialize, Serialize};

use crate::units::{is_positive, INCHES_PER_FOOT};

/// Parse a numeric field, ignoring surrounding whitespace
///
/// Returns `None` for blank, non-numeric, or non-finite text.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce raw form text to a number
///
/// Blank or non-numeric input becomes `0.0` so a half-filled form always
/// produces a displayable result.
pub fn coerce_number(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}

/// Like [`coerce_number`], with a missing field also mapping to `0.0`
pub fn coerce_optional(text: Option<&str>) -> f64 {
    text.map(coerce_number).unwrap_or(0.0)
}

/// Unit of the aggregate depth input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthUnit {
    #[default]
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
}

impl DepthUnit {
    /// Convert a depth in this unit to feet
    pub fn to_feet(self, depth: f64) -> f64 {
        match self {
            DepthUnit::Inches => depth / INCHES_PER_FOOT,
            DepthUnit::Feet => depth,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DepthUnit::Inches => "in",
            DepthUnit::Feet => "ft",
        }
    }
}

impl std::fmt::Display for DepthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DepthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(DepthUnit::Inches),
            "ft" | "foot" | "feet" => Ok(DepthUnit::Feet),
            other => Err(format!("unknown depth unit '{}' (expected in or ft)", other)),
        }
    }
}

/// Dimensions entered for one calculation
///
/// `depth` is the aggregate depth (unit chosen separately) or the concrete
/// slab thickness in inches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDimensions {
    pub length_ft: f64,
    pub width_ft: f64,
    pub depth: f64,
    pub waste_percent: f64,
}

impl ProjectDimensions {
    pub fn new(length_ft: f64, width_ft: f64, depth: f64, waste_percent: f64) -> Self {
        Self {
            length_ft,
            width_ft,
            depth,
            waste_percent,
        }
    }

    /// Build dimensions from raw form text
    ///
    /// A missing waste field takes `default_waste`; a present but blank one
    /// coerces to zero like every other field.
    pub fn from_raw(
        length: Option<&str>,
        width: Option<&str>,
        depth: Option<&str>,
        waste: Option<&str>,
        default_waste: f64,
    ) -> Self {
        Self {
            length_ft: coerce_optional(length),
            width_ft: coerce_optional(width),
            depth: coerce_optional(depth),
            waste_percent: waste.map(coerce_number).unwrap_or(default_waste),
        }
    }

    /// Whether every geometric input is a positive number
    ///
    /// A zero estimate from incomplete dimensions looks the same as a real
    /// zero; callers that want to tell them apart check this.
    pub fn is_complete(&self) -> bool {
        is_positive(self.length_ft) && is_positive(self.width_ft) && is_positive(self.depth)
    }
}
