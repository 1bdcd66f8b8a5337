//! SQLite database management.
//!
//! SQLite is embedded, so "managing" the database means resolving a path
//! and opening a pool with the right pragmas. Concurrent writers are
//! serialized by the engine itself (WAL journal + busy timeout); the
//! application takes no locks of its own.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Default database file name.
const DB_FILE: &str = "favorites.db";

/// How long a writer waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a pool on the given SQLite URL (e.g. `sqlite:///path/favorites.db`).
///
/// Creates the file if missing and enables WAL so reads proceed
/// concurrently with a writer.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Open an in-memory pool for tests.
///
/// Capped at one connection — each in-memory SQLite connection is its own
/// database, so the pool must never hand out a second one, and the single
/// connection must never be recycled or the data goes with it.
pub async fn connect_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Returns the default database path.
///
/// Platform paths:
/// - macOS: `~/Library/Application Support/cicerone/favorites.db`
/// - Linux: `~/.local/share/cicerone/favorites.db`
/// - Windows: `%APPDATA%\cicerone\favorites.db`
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("cicerone").join(DB_FILE))
}

/// Resolve the default database URL, creating the data directory if needed.
pub fn default_database_url() -> Result<String, std::io::Error> {
    let path = default_db_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no platform data directory available",
        )
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(format!("sqlite://{}", path.display()))
}
