//! Typed query methods over the historical feature table.
//!
//! City arguments are always lookup keys (trimmed, lower-cased); see
//! [`aqi_utils::city::lookup_key`].

use crate::models::HistoryRecord;
use crate::Database;
use rusqlite::{params, OptionalExtension, Row};

const RECORD_COLUMNS: &str =
    "city, city_clean, city_lookup, date, aqi_lag_1, aqi_lag_7, aqi_roll7_mean";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<HistoryRecord> {
    Ok(HistoryRecord {
        city: row.get(0)?,
        city_clean: row.get(1)?,
        city_lookup: row.get(2)?,
        date: row.get(3)?,
        aqi_lag_1: row.get(4)?,
        aqi_lag_7: row.get(5)?,
        aqi_roll7_mean: row.get(6)?,
    })
}

impl Database {
    /// Sorted, de-duplicated display names of every city in the table.
    pub fn query_cities(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT city_clean FROM history
             ORDER BY city_clean",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[AQI Debug] query: query_cities returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// The latest record for a city.
    ///
    /// "Latest" is the maximum timestamp, so a time of day in the source
    /// cell counts; among rows sharing that timestamp the one appearing last
    /// in the source file wins. Returns `None` when the city
    /// has no rows.
    pub fn query_latest_record(&self, city_lookup: &str) -> anyhow::Result<Option<HistoryRecord>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT {} FROM history
             WHERE city_lookup = ?1
             ORDER BY observed_at DESC, row_order DESC
             LIMIT 1",
            RECORD_COLUMNS
        );
        let record = conn
            .query_row(&sql, params![city_lookup], record_from_row)
            .optional()?;
        log::debug!(
            "[AQI Debug] query: query_latest_record({}) -> {:?}",
            city_lookup,
            record.as_ref().map(|r| &r.date)
        );
        Ok(record)
    }

    /// Total number of rows in the table.
    pub fn query_record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// The (min, max) date across all rows in YYYY-MM-DD format, or `None`
    /// for an empty table.
    pub fn query_date_range(&self) -> anyhow::Result<Option<(String, String)>> {
        let conn = self.conn.borrow();
        let (min_date, max_date) =
            conn.query_row("SELECT MIN(date), MAX(date) FROM history", [], |row| {
                Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Option<String>>(1)?))
            })?;
        Ok(min_date.zip(max_date))
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    /// Helper to create a database with sample history.
    ///
    /// Delhi rows are deliberately out of date order; Mumbai has two rows on
    /// its latest date.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
City,Date,AQI_lag_1,AQI_lag_7,AQI_roll7_mean
Delhi,2020-06-29,200,210,205
Delhi,2020-07-01,250,230,240
Mumbai,2020-06-30,90,95,92
Delhi,2020-06-30,220,215,210
Mumbai,2020-07-01,100,101,102
Mumbai,2020-07-01,110,111,112
Ahmedabad,2020-07-01,300,310,305
 delhi ,2020-05-01,1,2,3
";
        db.load_history(csv).unwrap();
        db
    }

    #[test]
    fn query_cities_sorted_and_unique() {
        let db = sample_db();
        let cities = db.query_cities().unwrap();
        assert_eq!(cities, vec!["Ahmedabad", "Delhi", "Mumbai"]);
    }

    #[test]
    fn query_latest_record_picks_max_date() {
        let db = sample_db();
        let rec = db.query_latest_record("delhi").unwrap().unwrap();
        assert_eq!(rec.date, "2020-07-01");
        assert_eq!(rec.aqi_lag_1, Some(250.0));
        assert_eq!(rec.city, "Delhi");
    }

    #[test]
    fn query_latest_record_ties_prefer_last_in_file() {
        let db = sample_db();
        let rec = db.query_latest_record("mumbai").unwrap().unwrap();
        assert_eq!(rec.date, "2020-07-01");
        assert_eq!(rec.aqi_lag_1, Some(110.0));
    }

    #[test]
    fn query_latest_record_compares_time_of_day() {
        let db = Database::new().unwrap();
        let csv = "\
City,Date,AQI_lag_1,AQI_lag_7,AQI_roll7_mean
Delhi,2020-07-01 23:00:00,999,2,3
Delhi,2020-07-01 01:00:00,111,2,3
Delhi,2020-06-30,50,2,3
";
        db.load_history(csv).unwrap();
        let rec = db.query_latest_record("delhi").unwrap().unwrap();
        assert_eq!(rec.aqi_lag_1, Some(999.0));
        assert_eq!(rec.date, "2020-07-01");
    }

    #[test]
    fn query_latest_record_date_only_sorts_before_same_day_times() {
        let db = Database::new().unwrap();
        let csv = "\
City,Date,AQI_lag_1,AQI_lag_7,AQI_roll7_mean
Delhi,2020-07-01 06:00:00,600,2,3
Delhi,2020-07-01,1,2,3
";
        db.load_history(csv).unwrap();
        let rec = db.query_latest_record("delhi").unwrap().unwrap();
        assert_eq!(rec.aqi_lag_1, Some(600.0));
    }

    #[test]
    fn query_latest_record_nonexistent_city() {
        let db = sample_db();
        assert!(db.query_latest_record("atlantis").unwrap().is_none());
    }

    #[test]
    fn query_latest_record_ignores_other_cities_order() {
        let csv_a = "\
City,Date,AQI_lag_1,AQI_lag_7,AQI_roll7_mean
Pune,2021-01-02,10,10,10
Delhi,2021-01-01,1,1,1
Delhi,2021-01-03,3,3,3
Pune,2021-01-05,50,50,50
";
        let csv_b = "\
City,Date,AQI_lag_1,AQI_lag_7,AQI_roll7_mean
Delhi,2021-01-03,3,3,3
Pune,2021-01-05,50,50,50
Delhi,2021-01-01,1,1,1
Pune,2021-01-02,10,10,10
";
        for csv in [csv_a, csv_b] {
            let db = Database::new().unwrap();
            db.load_history(csv).unwrap();
            let rec = db.query_latest_record("delhi").unwrap().unwrap();
            assert_eq!(rec.date, "2021-01-03");
            assert_eq!(rec.aqi_lag_1, Some(3.0));
        }
    }

    #[test]
    fn query_record_count() {
        let db = sample_db();
        assert_eq!(db.query_record_count().unwrap(), 8);
    }

    #[test]
    fn query_date_range() {
        let db = sample_db();
        let range = db.query_date_range().unwrap();
        assert_eq!(
            range,
            Some(("2020-05-01".to_string(), "2020-07-01".to_string()))
        );
        let empty = Database::new().unwrap();
        assert_eq!(empty.query_date_range().unwrap(), None);
    }
}
