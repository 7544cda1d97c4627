//! Command handlers

use crate::cli::{Cli, Commands};
use crate::logging;
use crate::output::{output_fee, output_report};
use parkade_app::app::{reference_scenario, run_scenario, LotManager, ScenarioOptions};
use parkade_app::config::Config;
use parkade_infra::{load_scenario, write_receipts, LotLayout};
use parkade_types::{BillingKind, Fee, OutputFormat, Result, Timestamp};
use std::path::PathBuf;
use tracing::info;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    logging::init(&config.log_filter, cli.verbose);

    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Run {
            scenario,
            layout,
            cars,
            bikes,
            trucks,
            billing,
            output,
        } => {
            let layout = layout
                .map(|path| LotLayout::load_from_file(&path))
                .transpose()?;
            let config = resolve_config(config, layout.as_ref(), cars, bikes, trucks, billing);
            cmd_run(&config, scenario, output, output_format)
        }

        Commands::Demo => cmd_demo(output_format),

        Commands::Fee {
            billing,
            entry,
            exit,
        } => cmd_fee(&config, billing, entry, exit, output_format),

        Commands::Config {
            show,
            set_cars,
            set_bikes,
            set_trucks,
            set_hourly_rate,
            set_daily_rate,
            set_billing,
            set_output,
            set_log_filter,
            reset,
        } => cmd_config(
            config,
            show,
            set_cars,
            set_bikes,
            set_trucks,
            set_hourly_rate,
            set_daily_rate,
            set_billing,
            set_output,
            set_log_filter,
            reset,
        ),
    }
}

/// Settings for one run: saved config, then the layout file, then CLI flags
fn resolve_config(
    mut config: Config,
    layout: Option<&LotLayout>,
    cars: Option<u32>,
    bikes: Option<u32>,
    trucks: Option<u32>,
    billing: Option<BillingKind>,
) -> Config {
    if let Some(layout) = layout {
        config.apply_layout(layout);
    }
    if let Some(n) = cars {
        config.capacity.cars = n;
    }
    if let Some(n) = bikes {
        config.capacity.bikes = n;
    }
    if let Some(n) = trucks {
        config.capacity.trucks = n;
    }
    if let Some(kind) = billing {
        config.default_billing = kind;
    }
    config
}

fn cmd_run(
    config: &Config,
    scenario: PathBuf,
    receipts_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let events = load_scenario(&scenario)?;
    info!(
        scenario = %scenario.display(),
        events = events.len(),
        "replaying scenario"
    );

    let lot = LotManager::from_capacity(config.capacity);
    let options = ScenarioOptions {
        rates: config.rates,
        default_billing: config.default_billing,
    };
    let report = run_scenario(&lot, &events, &options);

    if let Some(path) = receipts_path {
        write_receipts(&path, &report.receipts)?;
        info!(path = %path.display(), receipts = report.receipts.len(), "receipts written");
    }

    output_report(output_format, &report)
}

fn cmd_demo(output_format: OutputFormat) -> Result<()> {
    let (capacity, events) = reference_scenario();
    let lot = LotManager::from_capacity(capacity);
    let report = run_scenario(&lot, &events, &ScenarioOptions::default());
    output_report(output_format, &report)
}

fn cmd_fee(
    config: &Config,
    billing: BillingKind,
    entry: Timestamp,
    exit: Timestamp,
    output_format: OutputFormat,
) -> Result<()> {
    let strategy = config.rates.strategy(billing);
    let fee = strategy.calculate_fee(entry, exit);
    output_fee(output_format, strategy, entry, exit, fee)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    config: Config,
    show: bool,
    set_cars: Option<u32>,
    set_bikes: Option<u32>,
    set_trucks: Option<u32>,
    set_hourly_rate: Option<Fee>,
    set_daily_rate: Option<Fee>,
    set_billing: Option<BillingKind>,
    set_output: Option<OutputFormat>,
    set_log_filter: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = config;
    let mut modified = false;

    if let Some(n) = set_cars {
        config.capacity.cars = n;
        modified = true;
    }

    if let Some(n) = set_bikes {
        config.capacity.bikes = n;
        modified = true;
    }

    if let Some(n) = set_trucks {
        config.capacity.trucks = n;
        modified = true;
    }

    if let Some(rate) = set_hourly_rate {
        config.rates.hourly = rate;
        modified = true;
    }

    if let Some(rate) = set_daily_rate {
        config.rates.daily = rate;
        modified = true;
    }

    if let Some(kind) = set_billing {
        config.default_billing = kind;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(filter) = set_log_filter {
        config.log_filter = filter;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkade_domain::model::LotCapacity;
    use parkade_domain::service::BillingRates;

    fn saved_config() -> Config {
        let mut config = Config::default();
        config.capacity = LotCapacity::new(8, 8, 8);
        config.rates = BillingRates {
            hourly: 12,
            daily: 150,
        };
        config
    }

    #[test]
    fn test_no_overrides_keeps_saved_config() {
        let config = resolve_config(saved_config(), None, None, None, None, None);
        assert_eq!(config, saved_config());
    }

    #[test]
    fn test_layout_beats_saved_config() {
        let layout =
            LotLayout::load_from_str("[capacity]\ncars = 3\nbikes = 4\ntrucks = 1\n[rates]\nhourly = 20\n")
                .unwrap();
        let config = resolve_config(saved_config(), Some(&layout), None, None, None, None);
        assert_eq!(config.capacity, LotCapacity::new(3, 4, 1));
        assert_eq!(config.rates.hourly, 20);
        // Missing rate keys in the layout take the stock default, not the saved one
        assert_eq!(config.rates.daily, 100);
    }

    #[test]
    fn test_layout_without_rates_keeps_saved_rates() {
        let layout = LotLayout::load_from_str("[capacity]\ncars = 3\n").unwrap();
        let config = resolve_config(saved_config(), Some(&layout), None, None, None, None);
        assert_eq!(config.capacity.cars, 3);
        assert_eq!(config.rates, saved_config().rates);
    }

    #[test]
    fn test_flags_beat_layout() {
        let layout =
            LotLayout::load_from_str("[capacity]\ncars = 3\nbikes = 4\ntrucks = 1\n").unwrap();
        let config = resolve_config(
            saved_config(),
            Some(&layout),
            Some(10),
            None,
            Some(0),
            Some(BillingKind::Daily),
        );
        assert_eq!(config.capacity, LotCapacity::new(10, 4, 0));
        assert_eq!(config.default_billing, BillingKind::Daily);
    }

    #[test]
    fn test_flags_beat_saved_config_without_layout() {
        let config = resolve_config(saved_config(), None, None, Some(1), None, None);
        assert_eq!(config.capacity, LotCapacity::new(8, 1, 8));
        assert_eq!(config.default_billing, BillingKind::Hourly);
    }
}
