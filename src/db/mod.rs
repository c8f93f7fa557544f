pub mod migrations;
pub mod queries;

use std::sync::Mutex;

use anyhow::Context;
use rusqlite::Connection;

use crate::errors::AppError;

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}

/// Handle to the document store, built once at start-up and shared through
/// the application state.
///
/// A store without a connection still accepts calls; each one fails with
/// [`AppError::StoreUnavailable`].
pub struct Store {
    conn: Option<Mutex<Connection>>,
}

impl Store {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Some(Mutex::new(conn)),
        }
    }

    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    /// Opens the configured database. A missing or unusable connection string
    /// is logged and yields a disconnected store so the server still starts.
    pub fn connect(database_url: Option<&str>) -> Self {
        let Some(url) = database_url else {
            tracing::error!("DATABASE_URL is not set, bookings and estimates cannot be stored");
            return Self::disconnected();
        };

        match init_db(url) {
            Ok(conn) => {
                tracing::info!(database = url, "store connected");
                Self::new(conn)
            }
            Err(e) => {
                tracing::error!(database = url, error = ?e, "store connection failed");
                Self::disconnected()
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let conn = self.conn.as_ref().ok_or(AppError::StoreUnavailable)?;
        let guard = conn.lock().map_err(|_| AppError::LockPoisoned)?;
        f(&guard)
    }
}
