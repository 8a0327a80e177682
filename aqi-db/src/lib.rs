//! In-memory SQLite database holding the historical AQI feature table.
//!
//! The table is read once from CSV (one row per city and day, with
//! precomputed lag and rolling-mean features) and only queried afterwards.
//!
//! # Usage
//!
//! ```rust
//! use aqi_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_history("City,Date,AQI_lag_1,AQI_lag_7,AQI_roll7_mean\nDelhi,2020-07-01,120,140,130\n").unwrap();
//!
//! let latest = db.query_latest_record("delhi").unwrap().unwrap();
//! assert_eq!(latest.city_clean, "Delhi");
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the historical feature table.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_history`](Self::load_history) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
