//! Persistence operations. Each function borrows a connection from its caller
//! and runs inside a single transaction: the subscription change and its audit
//! entry are committed together or not at all.
//!
//! Concurrent writers are not coordinated beyond SQLite's own write lock, so
//! the last one to commit wins.

mod audit;
mod subscriptions;
mod users;

pub use audit::*;
pub use subscriptions::*;
pub use users::*;

use diesel::connection::SimpleConnection;
use diesel::SqliteConnection;

/// How long a writer waits for another connection's write lock before giving up.
const BUSY_TIMEOUT_MS: u32 = 5_000;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Subscription not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

/// Runs `f` in a transaction that takes SQLite's write lock up front
/// (`BEGIN IMMEDIATE`). A deferred transaction that reads and then writes
/// fails with `SQLITE_BUSY` on the upgrade instead of waiting for the lock.
pub(crate) fn write_transaction<T, F>(
    conn: &mut SqliteConnection,
    f: F,
) -> Result<T, StoreError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError>,
{
    conn.batch_execute(&format!("PRAGMA busy_timeout = {};", BUSY_TIMEOUT_MS))?;
    conn.immediate_transaction::<_, StoreError, _>(f)
}
