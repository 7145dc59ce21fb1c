//! Material quantity estimation
//!
//! Pure functions: no I/O, no shared state. Incomplete input (zero, blank,
//! negative) never fails; it yields a zero estimate.

use crate::model::{AggregateEstimate, ConcreteEstimate, DepthUnit, Material, ProjectDimensions};
use crate::units::{is_positive, round2, CUBIC_FEET_PER_CUBIC_YARD, INCHES_PER_FOOT, LB_PER_TON};

/// Resolve a material's bulk density to lb/ft³
///
/// Returns `None` when neither density field holds a positive finite number;
/// such materials cannot be offered in the aggregate calculator.
pub fn resolve_density(material: &Material) -> Option<f64> {
    material
        .density()
        .map(|d| d.lb_per_ft3())
        .filter(|v| is_positive(*v))
}

/// Estimate aggregate tonnage for a rectangular area
///
/// # Formula
/// tons = length x width x depth_ft x lb/ft³ / 2000
///
/// # Arguments
/// * `length_ft`, `width_ft` - Area dimensions in feet
/// * `depth` - Depth in `depth_unit`
/// * `lb_per_ft3` - Resolved bulk density, `None` if no material is available
/// * `waste_percent` - Waste allowance; negative values count as 0
pub fn estimate_aggregate_tons(
    length_ft: f64,
    width_ft: f64,
    depth: f64,
    depth_unit: DepthUnit,
    lb_per_ft3: Option<f64>,
    waste_percent: f64,
) -> AggregateEstimate {
    let density = match lb_per_ft3.filter(|v| is_positive(*v)) {
        Some(d) => d,
        None => return AggregateEstimate::default(),
    };
    if !(is_positive(length_ft) && is_positive(width_ft) && is_positive(depth)) {
        return AggregateEstimate::default();
    }

    let volume_ft3 = length_ft * width_ft * depth_unit.to_feet(depth);
    let tons = volume_ft3 * density / LB_PER_TON;
    let tons_with_waste = tons * waste_factor(waste_percent);

    AggregateEstimate {
        tons: finalize(tons),
        tons_with_waste: finalize(tons_with_waste),
    }
}

/// Estimate poured concrete volume in cubic yards
///
/// # Formula
/// cubic_yards = length x width x (thickness_in / 12) / 27
///
/// Density does not enter the calculation.
pub fn estimate_concrete_cubic_yards(
    length_ft: f64,
    width_ft: f64,
    thickness_in: f64,
    waste_percent: f64,
) -> ConcreteEstimate {
    if !(is_positive(length_ft) && is_positive(width_ft) && is_positive(thickness_in)) {
        return ConcreteEstimate::default();
    }

    let volume_ft3 = length_ft * width_ft * (thickness_in / INCHES_PER_FOOT);
    let cubic_yards = volume_ft3 / CUBIC_FEET_PER_CUBIC_YARD;
    let cubic_yards_with_waste = cubic_yards * waste_factor(waste_percent);

    ConcreteEstimate {
        cubic_yards: finalize(cubic_yards),
        cubic_yards_with_waste: finalize(cubic_yards_with_waste),
    }
}

/// [`estimate_aggregate_tons`] over a [`ProjectDimensions`] value
pub fn estimate_aggregate(
    dims: &ProjectDimensions,
    depth_unit: DepthUnit,
    lb_per_ft3: Option<f64>,
) -> AggregateEstimate {
    estimate_aggregate_tons(
        dims.length_ft,
        dims.width_ft,
        dims.depth,
        depth_unit,
        lb_per_ft3,
        dims.waste_percent,
    )
}

/// [`estimate_concrete_cubic_yards`] over a [`ProjectDimensions`] value
pub fn estimate_concrete(dims: &ProjectDimensions) -> ConcreteEstimate {
    estimate_concrete_cubic_yards(dims.length_ft, dims.width_ft, dims.depth, dims.waste_percent)
}

fn waste_factor(waste_percent: f64) -> f64 {
    let pct = if waste_percent.is_finite() { waste_percent.max(0.0) } else { 0.0 };
    1.0 + pct / 100.0
}

// overflow on absurd input must not leak out as inf
fn finalize(value: f64) -> f64 {
    let rounded = round2(value);
    if rounded.is_finite() && rounded > 0.0 {
        rounded
    } else {
        0.0
    }
}
