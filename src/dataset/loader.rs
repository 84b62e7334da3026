use crate::config::Config;
use crate::dataset::{Dataset, filter};
use crate::errors::{AppError, AppResult};
use crate::models::{City, FilterSelection, Trip};
use crate::utils::time::parse_timestamp;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 4] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
];
const DEMOGRAPHIC_COLUMNS: [&str; 3] = ["User Type", "Gender", "Birth Year"];

/// Row as it appears in the city CSV files.
///
/// Durations and birth years are read as floats: some exports write
/// `1180.675` or `1992.0`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_trip(self, row: usize) -> AppResult<Trip> {
        let start_time =
            parse_timestamp(&self.start_time).ok_or_else(|| AppError::InvalidTimestamp {
                row,
                value: self.start_time.clone(),
            })?;

        Ok(Trip {
            start_time,
            end_time: self.end_time.as_deref().and_then(parse_timestamp),
            duration_secs: self.trip_duration.map(|d| d as i64),
            start_station: non_blank(self.start_station),
            end_station: non_blank(self.end_station),
            user_type: non_blank(self.user_type),
            gender: non_blank(self.gender),
            birth_year: self.birth_year.map(|y| y as i32),
        })
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Load the dataset for `selection.city` and apply its month/day filter.
pub fn load(cfg: &Config, selection: &FilterSelection) -> AppResult<Dataset> {
    let path = cfg.dataset_path(selection.city);
    let dataset = read_csv(&path, selection.city)?;
    let total = dataset.len();

    let filtered = filter::apply(dataset, selection);
    log::info!(
        "{}: kept {} of {} trips (month={}, day={})",
        selection.city.key(),
        filtered.len(),
        total,
        selection.month_label(),
        selection.day_label()
    );
    Ok(filtered)
}

pub fn read_csv(path: &Path, city: City) -> AppResult<Dataset> {
    if !path.exists() {
        return Err(AppError::DatasetNotFound(path.to_path_buf()));
    }
    log::debug!("reading {}", path.display());
    from_reader(File::open(path)?, city)
}

/// Parse a whole CSV stream. Any unparseable start time aborts the load.
pub fn from_reader<R: Read>(rdr: R, city: City) -> AppResult<Dataset> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h.trim() == name);

    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has(*c)) {
        return Err(AppError::MissingColumn(missing.to_string()));
    }
    let has_demographics = DEMOGRAPHIC_COLUMNS.into_iter().all(has);

    let mut trips = Vec::new();
    for (i, record) in reader.deserialize::<RawTrip>().enumerate() {
        trips.push(record?.into_trip(i + 1)?);
    }

    log::debug!(
        "parsed {} trips for {} (demographics: {})",
        trips.len(),
        city.key(),
        has_demographics
    );
    Ok(Dataset::new(city, trips, has_demographics))
}
