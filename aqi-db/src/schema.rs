//! SQL schema for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// `history` holds one row per (city, date) in file order. Besides the raw
/// `city` it stores two derived keys:
/// - `city_clean` - trimmed, title-cased; used for display
/// - `city_lookup` - trimmed, lower-cased; used to match user input
///
/// `observed_at` is the full `YYYY-MM-DD HH:MM:SS` timestamp (midnight for
/// date-only cells) and orders the rows; `date` is its date part for display.
/// `row_order` is the zero-based position of the row in the source CSV and
/// breaks ties between rows sharing a city and timestamp.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS history (
        row_order INTEGER PRIMARY KEY,
        city TEXT NOT NULL,
        city_clean TEXT NOT NULL,
        city_lookup TEXT NOT NULL,
        observed_at TEXT NOT NULL,
        date TEXT NOT NULL,
        aqi_lag_1 REAL,
        aqi_lag_7 REAL,
        aqi_roll7_mean REAL
    );
    CREATE INDEX IF NOT EXISTS idx_history_lookup_date ON history(city_lookup, observed_at);
    "#
}
