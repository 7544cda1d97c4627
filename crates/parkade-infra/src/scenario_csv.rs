//! CSV loader for park/exit scenarios
//!
//! Expected header (column order is free, `billing` may be omitted):
//! action,plate,category,time,billing

use std::fs::File;
use std::io::Read;
use std::path::Path;

use parkade_domain::model::ScenarioEvent;
use parkade_types::{BillingKind, Timestamp, VehicleCategory};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScenarioCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unknown action in row {row}: {value}")]
    InvalidAction { row: usize, value: String },

    #[error("Missing plate in row {row}")]
    MissingPlate { row: usize },

    #[error("Invalid category in row {row}: {value}")]
    InvalidCategory { row: usize, value: String },

    #[error("Invalid time in row {row}: {value}")]
    InvalidTime { row: usize, value: String },

    #[error("Invalid billing in row {row}: {value}")]
    InvalidBilling { row: usize, value: String },
}

impl From<ScenarioCsvError> for parkade_types::Error {
    fn from(err: ScenarioCsvError) -> Self {
        match err {
            ScenarioCsvError::IoError(e) => parkade_types::Error::Io(e),
            ScenarioCsvError::CsvError(e) => parkade_types::Error::Csv(e.to_string()),
            other => parkade_types::Error::Scenario(other.to_string()),
        }
    }
}

struct Columns {
    action: usize,
    plate: usize,
    category: usize,
    time: usize,
    billing: Option<usize>,
}

/// Load scenario events from a CSV file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioEvent>, ScenarioCsvError> {
    let file = File::open(path.as_ref())?;
    let events = load_scenario_from_reader(file)?;
    debug!(path = %path.as_ref().display(), events = events.len(), "scenario loaded");
    Ok(events)
}

pub fn load_scenario_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioEvent>, ScenarioCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = locate_columns(&headers)?;

    let mut events = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx + 2);
        if record.iter().all(str::is_empty) {
            continue;
        }
        events.push(parse_record(&record, &columns, row_num)?);
    }

    Ok(events)
}

fn locate_columns(headers: &csv::StringRecord) -> Result<Columns, ScenarioCsvError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };
    let require = |name: &str| find(name).ok_or_else(|| ScenarioCsvError::MissingColumn(name.to_string()));

    Ok(Columns {
        action: require("action")?,
        plate: require("plate")?,
        category: require("category")?,
        time: require("time")?,
        billing: find("billing"),
    })
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &Columns,
    row: usize,
) -> Result<ScenarioEvent, ScenarioCsvError> {
    let field = |index: usize| record.get(index).unwrap_or("");

    let plate = field(columns.plate).to_string();
    if plate.is_empty() {
        return Err(ScenarioCsvError::MissingPlate { row });
    }

    let time_str = field(columns.time);
    let time: Timestamp = time_str.parse().map_err(|_| ScenarioCsvError::InvalidTime {
        row,
        value: time_str.to_string(),
    })?;

    let action = field(columns.action);
    match action.to_ascii_lowercase().as_str() {
        "park" => {
            let category_str = field(columns.category);
            let category: VehicleCategory =
                category_str
                    .parse()
                    .map_err(|_| ScenarioCsvError::InvalidCategory {
                        row,
                        value: category_str.to_string(),
                    })?;
            let billing = columns
                .billing
                .map(field)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<BillingKind>()
                        .map_err(|_| ScenarioCsvError::InvalidBilling {
                            row,
                            value: s.to_string(),
                        })
                })
                .transpose()?;
            Ok(ScenarioEvent::Park {
                plate,
                category,
                time,
                billing,
            })
        }
        "exit" => Ok(ScenarioEvent::Exit { plate, time }),
        _ => Err(ScenarioCsvError::InvalidAction {
            row,
            value: action.to_string(),
        }),
    }
}
