//! Shared utility functions for AQI forecast crates.

/// City name normalization.
///
/// The historical table carries two derived keys per row: a display form
/// used for labels and a lookup form used to match user input.
pub mod city {
    /// Lookup form: surrounding whitespace trimmed, lower-cased.
    pub fn lookup_key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Display form: surrounding whitespace trimmed, title-cased.
    pub fn display_name(name: &str) -> String {
        title_case(name.trim())
    }

    /// Title-case a string word by word.
    ///
    /// A letter is upper-cased when it starts the string or follows a
    /// non-letter, and lower-cased otherwise, so `"new DELHI"` becomes
    /// `"New Delhi"` and `"o'neil"` becomes `"O'Neil"`.
    pub fn title_case(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut prev_is_letter = false;
        for c in s.chars() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = c.is_alphabetic();
        }
        out
    }

}

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Date-only layouts accepted in the historical table, tried in order.
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

    /// Timestamp layouts accepted in the historical table.
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Sortable storage layout for timestamps.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a timestamp as "YYYY-MM-DD HH:MM:SS", which orders as text.
    pub fn format_timestamp(ts: &NaiveDateTime) -> String {
        ts.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse a date cell from the historical table.
    ///
    /// Date-only cells resolve to midnight; cells with a time of day keep it.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        for fmt in DATETIME_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(ts);
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Ok(date.and_time(chrono::NaiveTime::MIN));
            }
        }
        anyhow::bail!("unrecognized date '{}'", s)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        }

        #[test]
        fn test_parse_iso_date() {
            assert_eq!(parse_timestamp("2020-07-01").unwrap(), midnight(2020, 7, 1));
        }

        #[test]
        fn test_parse_day_first_dates() {
            let expected = midnight(2019, 3, 15);
            assert_eq!(parse_timestamp("15-03-2019").unwrap(), expected);
            assert_eq!(parse_timestamp("15/03/2019").unwrap(), expected);
        }

        #[test]
        fn test_parse_timestamp_keeps_time() {
            let ts = parse_timestamp("2018-12-31 23:00:00").unwrap();
            assert_eq!(format_timestamp(&ts), "2018-12-31 23:00:00");
            let ts = parse_timestamp("2018-12-31T01:30:00").unwrap();
            assert_eq!(format_timestamp(&ts), "2018-12-31 01:30:00");
            assert_eq!(format_date(&ts.date()), "2018-12-31");
        }

        #[test]
        fn test_timestamps_order_as_text() {
            let early = format_timestamp(&parse_timestamp("2020-07-01 01:00:00").unwrap());
            let late = format_timestamp(&parse_timestamp("2020-07-01 23:00:00").unwrap());
            let next_day = format_timestamp(&parse_timestamp("02/07/2020").unwrap());
            assert!(early < late);
            assert!(late < next_day);
        }

        #[test]
        fn test_parse_invalid_date() {
            assert!(parse_timestamp("yesterday").is_err());
            assert!(parse_timestamp("").is_err());
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            assert_eq!(parse_timestamp(&formatted).unwrap().date(), date);
        }
    }
}
