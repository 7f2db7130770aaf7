use crate::core::{LaunchRecord, LaunchTable, Outcome, Storage};
use crate::utils::error::{DashError, Result};
use serde::Deserialize;

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";
pub const CLASS_COLUMN: &str = "class";

const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
    CLASS_COLUMN,
];

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    class: i64,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord> {
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DashError::DatasetError {
                row,
                message: format!(
                    "'{}' must be a non-negative number, got {}",
                    PAYLOAD_MASS_COLUMN, self.payload_mass_kg
                ),
            });
        }

        let outcome = u8::try_from(self.class)
            .map_err(|_| format!("class must be 0 or 1, got {}", self.class))
            .and_then(Outcome::try_from)
            .map_err(|message| DashError::DatasetError { row, message })?;

        if self.launch_site.is_empty() {
            return Err(DashError::DatasetError {
                row,
                message: format!("'{}' cannot be empty", LAUNCH_SITE_COLUMN),
            });
        }

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            booster_version_category: self.booster_version_category,
            outcome,
        })
    }
}

/// Parses the launch CSV. Columns other than the four the dashboard uses are
/// ignored. Rows are numbered from 1, not counting the header.
pub fn parse_launch_csv(data: &[u8]) -> Result<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DashError::DatasetError {
                row: 0,
                message: format!("missing column '{}'", column),
            });
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let row_number = index + 1;
        let raw = row.map_err(|e| DashError::DatasetError {
            row: row_number,
            message: e.to_string(),
        })?;
        records.push(raw.into_record(row_number)?);
    }

    Ok(LaunchTable::new(records))
}

pub async fn load_launch_table<S: Storage>(storage: &S, path: &str) -> Result<LaunchTable> {
    tracing::debug!("Reading launch dataset from: {}", path);
    let data = storage.read_file(path).await?;
    let table = parse_launch_csv(&data)?;

    tracing::info!(
        rows = table.len(),
        sites = table.launch_sites().len(),
        "Loaded launch dataset"
    );
    if table.is_empty() {
        tracing::warn!("Launch dataset has no rows; charts will render empty");
    }

    Ok(table)
}
