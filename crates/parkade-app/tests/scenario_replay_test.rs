//! Replays the sample files under demos/ end to end

use std::path::PathBuf;

use parkade_app::app::{run_scenario, LotManager, ParkedVehicle, ScenarioOptions};
use parkade_app::config::Config;
use parkade_infra::{load_scenario, write_receipts, LotLayout};
use parkade_types::{SpotId, VehicleCategory};

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("demos")
}

#[test]
fn test_sample_scenario_replay() {
    let layout = LotLayout::load_from_file(&demos_dir().join("lot.toml")).unwrap();
    let mut config = Config::default();
    config.apply_layout(&layout);

    let events = load_scenario(demos_dir().join("scenario.csv")).unwrap();
    let lot = LotManager::from_capacity(config.capacity);
    let options = ScenarioOptions {
        rates: config.rates,
        default_billing: config.default_billing,
    };
    let report = run_scenario(&lot, &events, &options);

    let fees: Vec<(String, u64)> = report
        .receipts
        .iter()
        .map(|r| (r.plate.clone(), r.fee))
        .collect();
    assert_eq!(
        fees,
        vec![
            ("KA-01-1234".to_string(), 30),
            ("KA-02-5678".to_string(), 40),
            ("KA-03-9999".to_string(), 100),
        ]
    );

    // The second truck finds the single truck spot taken
    assert_eq!(report.rejections.len(), 1);
    assert_eq!(report.rejections[0].plate, "KA-04-0001");
    assert_eq!(report.rejections[0].step, 4);

    // The late car reuses the spot freed by the first one
    assert_eq!(report.still_parked.len(), 1);
    let parked: &ParkedVehicle = &report.still_parked[0];
    assert_eq!(parked.plate, "KA-05-4242");
    assert_eq!(parked.category, VehicleCategory::Car);
    assert_eq!(parked.spot, SpotId(1));
    assert_eq!(parked.entry_time, 7);
    assert_eq!(lot.free_spots(VehicleCategory::Car), 1);

    let dir = tempfile::tempdir().unwrap();
    let receipts_path = dir.path().join("receipts.csv");
    write_receipts(&receipts_path, &report.receipts).unwrap();
    let written = std::fs::read_to_string(&receipts_path).unwrap();
    assert_eq!(written.lines().count(), 4);
}
