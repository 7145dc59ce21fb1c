//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_aggregate, output_concrete, output_materials};
use yardstick_app::app::{open_estimate_service, AggregateRequest, ConcreteRequest};
use yardstick_app::config::Config;
use yardstick_domain::DepthUnit;
use yardstick_types::{Error, OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Materials => {
            let service = open_estimate_service(&config, cli.content)?;
            output_materials(output_format, service.catalog())
        }

        Commands::Aggregate {
            length,
            width,
            depth,
            unit,
            material,
            waste,
        } => {
            let service = open_estimate_service(&config, cli.content)?;
            let request = AggregateRequest {
                length,
                width,
                depth,
                depth_unit: unit.unwrap_or(config.default_depth_unit),
                material_id: material,
                waste,
            };
            let quote = service.aggregate(&request);
            tracing::debug!(
                tons = quote.estimate.tons,
                tons_with_waste = quote.estimate.tons_with_waste,
                "aggregate estimate"
            );
            output_aggregate(output_format, &quote)
        }

        Commands::Concrete {
            length,
            width,
            thickness,
            waste,
        } => {
            let service = open_estimate_service(&config, cli.content)?;
            let request = ConcreteRequest {
                length,
                width,
                thickness_in: thickness,
                waste,
            };
            let quote = service.concrete(&request);
            tracing::debug!(
                cubic_yards = quote.estimate.cubic_yards,
                cubic_yards_with_waste = quote.estimate.cubic_yards_with_waste,
                "concrete estimate"
            );
            output_concrete(output_format, &quote)
        }

        Commands::Config {
            show,
            set_content,
            set_output,
            set_unit,
            set_aggregate_waste,
            set_concrete_waste,
            clear_waste,
            reset,
        } => cmd_config(
            config,
            ConfigUpdate {
                show,
                set_content,
                set_output,
                set_unit,
                set_aggregate_waste,
                set_concrete_waste,
                clear_waste,
                reset,
            },
        ),
    }
}

struct ConfigUpdate {
    show: bool,
    set_content: Option<std::path::PathBuf>,
    set_output: Option<OutputFormat>,
    set_unit: Option<DepthUnit>,
    set_aggregate_waste: Option<f64>,
    set_concrete_waste: Option<f64>,
    clear_waste: bool,
    reset: bool,
}

fn validate_waste(pct: f64) -> Result<f64> {
    if pct.is_finite() && pct >= 0.0 {
        Ok(pct)
    } else {
        Err(Error::InvalidArgument(format!(
            "waste allowance must be a non-negative percentage, got {}",
            pct
        )))
    }
}

fn cmd_config(mut config: Config, update: ConfigUpdate) -> Result<()> {
    if update.reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut modified = false;

    if let Some(path) = update.set_content {
        config.content_path = Some(path);
        modified = true;
    }
    if let Some(format) = update.set_output {
        config.output_format = format;
        modified = true;
    }
    if let Some(unit) = update.set_unit {
        config.default_depth_unit = unit;
        modified = true;
    }
    if update.clear_waste {
        config.aggregate_waste_pct = None;
        config.concrete_waste_pct = None;
        modified = true;
    }
    if let Some(pct) = update.set_aggregate_waste {
        config.aggregate_waste_pct = Some(validate_waste(pct)?);
        modified = true;
    }
    if let Some(pct) = update.set_concrete_waste {
        config.concrete_waste_pct = Some(validate_waste(pct)?);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
