//! Domain model types

pub mod content;
pub mod dimensions;
pub mod estimate;
mod lenient;
pub mod material;

pub use content::{CalculatorDefaults, CalculatorSettings, SiteContent};
pub use dimensions::{coerce_number, coerce_optional, DepthUnit, ProjectDimensions};
pub use estimate::{AggregateEstimate, ConcreteEstimate};
pub use material::{Density, Material};
