//! Domain layer for yardstick
//!
//! Material records, project dimensions, and the pure estimation functions
//! that turn them into tons or cubic yards.

pub mod model;
pub mod repository;
pub mod service;
pub mod units;

pub use model::*;
pub use repository::ContentRepository;
