//! Reminder record-store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable upsert/lookup/list/clear over the `reminders` table.
//! - Translate rows into validated `Reminder` values.
//!
//! # Invariants
//! - `insert_or_replace` is idempotent per id.
//! - `get_all` returns rows in insertion (rowid) order.
//! - A missing row is `Ok(None)`, never an error.

use crate::db::DbError;
use crate::model::reminder::{Reminder, ReminderId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic store error for reminder persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
    /// The backing data source signalled that it cannot serve data at all.
    /// Distinct from an empty table, which is a legitimate empty result.
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted reminder data: {message}")
            }
            Self::Unavailable(message) => write!(f, "reminder store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record-store interface for reminder persistence.
pub trait ReminderStore {
    /// Idempotent upsert by id; the row exists with the given fields after.
    fn insert_or_replace(&self, reminder: &Reminder) -> StoreResult<()>;
    /// Returns the stored record, or `None` when the id matches nothing.
    fn get_by_id(&self, id: &ReminderId) -> StoreResult<Option<Reminder>>;
    /// Returns all records in insertion order.
    fn get_all(&self) -> StoreResult<Vec<Reminder>>;
    /// Removes every record, returning the number of deleted rows.
    fn delete_all(&self) -> StoreResult<usize>;
}

/// SQLite-backed reminder store.
///
/// Owns its connection so it can move to whichever thread drives it; the
/// geofence worker in particular takes its store with it.
pub struct SqliteReminderStore {
    conn: Connection,
}

impl SqliteReminderStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl ReminderStore for SqliteReminderStore {
    fn insert_or_replace(&self, reminder: &Reminder) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO reminders (
                id,
                title,
                description,
                location,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                reminder.id.to_string(),
                reminder.title.as_str(),
                reminder.description.as_deref(),
                reminder.location.as_str(),
                reminder.latitude,
                reminder.longitude,
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: &ReminderId) -> StoreResult<Option<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }

        Ok(None)
    }

    fn get_all(&self) -> StoreResult<Vec<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }

        Ok(reminders)
    }

    fn delete_all(&self) -> StoreResult<usize> {
        let deleted = self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(deleted)
    }
}

fn parse_reminder_row(row: &Row<'_>) -> StoreResult<Reminder> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{id_text}` in reminders.id"))
    })?;

    Ok(Reminder {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}
