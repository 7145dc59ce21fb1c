//! Repository trait definitions for content access

use crate::model::{CalculatorSettings, Material};
use yardstick_types::Error;

/// Read-only view of the site content the estimators consume
pub trait ContentRepository {
    /// All material records, in content order, including inactive ones
    fn find_materials(&self) -> Result<Vec<Material>, Error>;

    /// Calculator settings (default waste allowances)
    fn calculator_settings(&self) -> Result<CalculatorSettings, Error>;
}
