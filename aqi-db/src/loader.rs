//! CSV loading for the historical feature table.
//!
//! # CSV Format
//!
//! Headers are required. At least `City`, `Date`, `AQI_lag_1`, `AQI_lag_7`
//! and `AQI_roll7_mean` must be present; any other columns are ignored.
//! Empty or `nan` feature cells are stored as NULL.
//!
//! ```text
//! City,Date,AQI,AQI_lag_1,AQI_lag_7,AQI_roll7_mean
//! Delhi,2020-06-30,118,121,140,131.4
//! Delhi,2020-07-01,125,118,136,128.9
//! ```

use crate::Database;
use aqi_utils::{city, dates};
use flate2::read::GzDecoder;
use rusqlite::params;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "AQI_lag_1")]
    aqi_lag_1: Option<f64>,
    #[serde(rename = "AQI_lag_7")]
    aqi_lag_7: Option<f64>,
    #[serde(rename = "AQI_roll7_mean")]
    aqi_roll7_mean: Option<f64>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl Database {
    /// Load the historical table from a CSV string.
    ///
    /// Rows are stored in file order. Any unreadable row, missing required
    /// column or unparseable date fails the whole load. Returns the number
    /// of rows loaded.
    pub fn load_history(&self, csv_data: &str) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut incomplete = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO history
                    (row_order, city, city_clean, city_lookup, observed_at, date, aqi_lag_1, aqi_lag_7, aqi_roll7_mean)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for (row_order, result) in rdr.deserialize::<HistoryRow>().enumerate() {
                let row = result?;
                let observed_at = dates::parse_timestamp(&row.date)
                    .map_err(|e| anyhow::anyhow!("row {}: {}", row_order + 1, e))?;
                let (lag_1, lag_7, roll7_mean) = (
                    finite(row.aqi_lag_1),
                    finite(row.aqi_lag_7),
                    finite(row.aqi_roll7_mean),
                );
                if lag_1.is_none() || lag_7.is_none() || roll7_mean.is_none() {
                    incomplete += 1;
                }

                stmt.execute(params![
                    row_order as i64,
                    row.city,
                    city::display_name(&row.city),
                    city::lookup_key(&row.city),
                    dates::format_timestamp(&observed_at),
                    dates::format_date(&observed_at.date()),
                    lag_1,
                    lag_7,
                    roll7_mean,
                ])?;
                count += 1;
            }
        }
        tx.commit()?;
        log::info!(
            "[AQI Debug] loader: Loaded {} history rows, {} with missing features",
            count,
            incomplete
        );
        Ok(count)
    }

    /// Load the historical table from gzip-compressed CSV bytes.
    pub fn load_history_gz(&self, gz_data: &[u8]) -> anyhow::Result<usize> {
        let mut csv_data = String::new();
        GzDecoder::new(gz_data).read_to_string(&mut csv_data)?;
        self.load_history(&csv_data)
    }
}
