//! Estimation results

use serde::{Deserialize, Serialize};

/// Aggregate quantity in tons, rounded to 2 decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateEstimate {
    pub tons: f64,
    pub tons_with_waste: f64,
}

/// Concrete volume in cubic yards, rounded to 2 decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConcreteEstimate {
    pub cubic_yards: f64,
    pub cubic_yards_with_waste: f64,
}

impl AggregateEstimate {
    pub fn is_zero(&self) -> bool {
        self.tons == 0.0 && self.tons_with_waste == 0.0
    }
}

impl ConcreteEstimate {
    pub fn is_zero(&self) -> bool {
        self.cubic_yards == 0.0 && self.cubic_yards_with_waste == 0.0
    }
}
