//! Unit constants and conversions used by the estimators

/// Pounds in one (short) ton
pub const LB_PER_TON: f64 = 2000.0;

/// Cubic feet in one cubic yard
pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;

pub const INCHES_PER_FOOT: f64 = 12.0;

/// Waste allowance used when neither config nor content provide one
pub const DEFAULT_WASTE_PERCENT: f64 = 10.0;

/// Convert a bulk density in t/yd³ to lb/ft³
///
/// # Formula
/// lb/ft³ = t/yd³ x 2000 / 27
pub fn tons_per_cy_to_lb_per_ft3(tons_per_cy: f64) -> f64 {
    tons_per_cy * LB_PER_TON / CUBIC_FEET_PER_CUBIC_YARD
}

/// Round to 2 decimal places (half up), nudged by machine epsilon so that
/// values like 1.005 are not pulled down by their binary representation.
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

/// True for finite numbers strictly greater than zero
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
