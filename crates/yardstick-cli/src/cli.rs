//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use yardstick_domain::DepthUnit;
use yardstick_types::OutputFormat;

#[derive(Parser)]
#[command(name = "yardstick")]
#[command(version)]
#[command(about = "Estimate aggregate tons and concrete cubic yards")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content file with materials and calculator defaults. Uses config value if not specified.
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List materials available to the aggregate calculator
    Materials,

    /// Estimate aggregate tonnage
    Aggregate {
        /// Length in feet
        #[arg(long, short = 'l', allow_hyphen_values = true)]
        length: Option<String>,

        /// Width in feet
        #[arg(long, short = 'w', allow_hyphen_values = true)]
        width: Option<String>,

        /// Depth, in --unit
        #[arg(long, short = 'd', allow_hyphen_values = true)]
        depth: Option<String>,

        /// Depth unit (in, ft). Uses config value if not specified.
        #[arg(long, short = 'u')]
        unit: Option<DepthUnit>,

        /// Material id (defaults to the first available material)
        #[arg(long, short = 'm')]
        material: Option<String>,

        /// Waste allowance in percent. Uses the calculator default if not specified.
        #[arg(long, allow_hyphen_values = true)]
        waste: Option<String>,
    },

    /// Estimate concrete volume in cubic yards
    Concrete {
        /// Length in feet
        #[arg(long, short = 'l', allow_hyphen_values = true)]
        length: Option<String>,

        /// Width in feet
        #[arg(long, short = 'w', allow_hyphen_values = true)]
        width: Option<String>,

        /// Slab thickness in inches
        #[arg(long, short = 't', allow_hyphen_values = true)]
        thickness: Option<String>,

        /// Waste allowance in percent. Uses the calculator default if not specified.
        #[arg(long, allow_hyphen_values = true)]
        waste: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set content file path
        #[arg(long)]
        set_content: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default depth unit for the aggregate calculator
        #[arg(long)]
        set_unit: Option<DepthUnit>,

        /// Override the aggregate waste allowance (percent)
        #[arg(long, allow_hyphen_values = true)]
        set_aggregate_waste: Option<f64>,

        /// Override the concrete waste allowance (percent)
        #[arg(long, allow_hyphen_values = true)]
        set_concrete_waste: Option<f64>,

        /// Drop waste overrides and use the content defaults again
        #[arg(long)]
        clear_waste: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
