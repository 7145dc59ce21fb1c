//! Application use cases

mod estimate_service;

pub use estimate_service::{
    AggregateQuote, AggregateRequest, ConcreteQuote, ConcreteRequest, EstimateService,
};

use std::path::PathBuf;

use yardstick_types::Result;

use crate::config::Config;
use crate::repository::{open_content_repo, open_content_repo_at};

/// Build the estimate service from config, optionally overriding the content path
pub fn open_estimate_service(config: &Config, content_path: Option<PathBuf>) -> Result<EstimateService> {
    let repo = match content_path {
        Some(path) => open_content_repo_at(path)?,
        None => open_content_repo(config)?,
    };
    tracing::debug!(path = %repo.path().display(), "using content file");

    let service = EstimateService::from_repository(&repo)?
        .with_waste_overrides(config.aggregate_waste_pct, config.concrete_waste_pct);
    Ok(service)
}
