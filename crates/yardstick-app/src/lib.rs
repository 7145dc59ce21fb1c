//! Application service layer - config, repositories, estimate use cases

pub mod app;
pub mod config;
pub mod repository;
