//! CLI definition using clap

use clap::{Parser, Subcommand};
use parkade_types::{BillingKind, Fee, OutputFormat, Timestamp};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parkade")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Parking lot spot allocation, tickets and billing")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a park/exit scenario CSV against a fresh lot
    Run {
        /// Scenario CSV (action,plate,category,time,billing)
        scenario: PathBuf,

        /// Lot layout TOML overriding configured capacity and rates
        #[arg(long, short = 'l')]
        layout: Option<PathBuf>,

        /// Number of car spots
        #[arg(long)]
        cars: Option<u32>,

        /// Number of bike spots
        #[arg(long)]
        bikes: Option<u32>,

        /// Number of truck spots
        #[arg(long)]
        trucks: Option<u32>,

        /// Billing for park rows without one. Uses config value if not specified.
        #[arg(long, short = 'b')]
        billing: Option<BillingKind>,

        /// Write receipts to this CSV file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Replay the built-in three-vehicle walk-through
    Demo,

    /// Compute a single fee
    Fee {
        /// Billing kind
        #[arg(long, short = 'b', default_value = "hourly")]
        billing: BillingKind,

        /// Entry time (hour ticks)
        #[arg(long, allow_hyphen_values = true)]
        entry: Timestamp,

        /// Exit time (hour ticks)
        #[arg(long, allow_hyphen_values = true)]
        exit: Timestamp,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set number of car spots
        #[arg(long)]
        set_cars: Option<u32>,

        /// Set number of bike spots
        #[arg(long)]
        set_bikes: Option<u32>,

        /// Set number of truck spots
        #[arg(long)]
        set_trucks: Option<u32>,

        /// Set hourly rate
        #[arg(long)]
        set_hourly_rate: Option<Fee>,

        /// Set daily rate
        #[arg(long)]
        set_daily_rate: Option<Fee>,

        /// Set default billing kind
        #[arg(long)]
        set_billing: Option<BillingKind>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set log filter (e.g. "info", "parkade_app=debug")
        #[arg(long)]
        set_log_filter: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
