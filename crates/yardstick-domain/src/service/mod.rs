//! Domain services

pub mod catalog;
pub mod estimator;

pub use catalog::{MaterialCatalog, MaterialSelection, UsableMaterial};
pub use estimator::{
    estimate_aggregate, estimate_aggregate_tons, estimate_concrete, estimate_concrete_cubic_yards,
    resolve_density,
};
