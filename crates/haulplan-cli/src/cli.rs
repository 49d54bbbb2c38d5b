//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub use haulplan_types::OutputFormat;

#[derive(Parser)]
#[command(name = "haulplan")]
#[command(version)]
#[command(about = "Recommend transport vehicles and estimate fleet size and cost for cargo shipments")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vehicle catalog TOML. Uses config value, then the built-in table, if not specified.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Size and weight of one cargo unit
#[derive(Args, Debug, Clone)]
pub struct UnitArgs {
    /// Unit length in meters
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    pub length: f64,

    /// Unit width in meters
    #[arg(long, short = 'w', allow_negative_numbers = true)]
    pub width: f64,

    /// Unit height in meters
    #[arg(long, short = 'H', allow_negative_numbers = true)]
    pub height: f64,

    /// Unit weight in tonnes
    #[arg(long, short = 't', allow_negative_numbers = true)]
    pub weight: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank vehicle classes for a shipment by total cost
    Recommend {
        #[command(flatten)]
        unit: UnitArgs,

        /// Number of identical units
        #[arg(long, short = 'q', default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,

        /// Transport distance in kilometers
        #[arg(long, short = 'd', allow_negative_numbers = true)]
        distance: f64,

        /// Fragility category (none, fragile, weather-sensitive, precision-instrument, heavy-machinery)
        #[arg(long, default_value = "none")]
        fragility: String,

        /// Show only the N cheapest options
        #[arg(long)]
        top: Option<NonZeroUsize>,

        /// Disable vertical stacking (overrides config)
        #[arg(long)]
        no_stacking: bool,
    },

    /// Pick the first catalog vehicle that can take a single unit
    Fit {
        #[command(flatten)]
        unit: UnitArgs,
    },

    /// List the vehicle catalog, or show one class
    Catalog {
        /// Exact vehicle class name
        name: Option<String>,
    },

    /// Plan every shipment in a CSV file
    Batch {
        /// CSV with columns reference,length,width,height,weight,quantity,distance[,fragility]
        csv: PathBuf,

        /// Export plans to this Excel file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Disable vertical stacking (overrides config)
        #[arg(long)]
        no_stacking: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the vehicle catalog TOML used by default
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Go back to the built-in vehicle catalog
        #[arg(long)]
        clear_catalog: bool,

        /// Enable/disable vertical stacking
        #[arg(long)]
        set_stacking: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
