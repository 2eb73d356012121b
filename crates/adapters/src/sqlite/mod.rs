use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use memeforge_application::{ApplicationError, StorageSlot};
use rusqlite::{params, Connection, OptionalExtension};

use crate::migrations::MIGRATIONS;

/// One durable key in a sqlite kv table. The gallery persists its whole
/// list as a single JSON blob here; the key is explicit so independent
/// editors (and tests) never share state.
#[derive(Debug, Clone)]
pub struct SqliteStorageSlot {
    path: PathBuf,
    key: String,
}

impl SqliteStorageSlot {
    pub fn new(path: String, key: String) -> Self {
        Self {
            path: PathBuf::from(path),
            key,
        }
    }

    pub fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "storage path must not be empty".to_string(),
            ));
        }
        if self.key.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "storage key must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        Ok(())
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl StorageSlot for SqliteStorageSlot {
    fn read(&self) -> Result<Option<String>, ApplicationError> {
        let conn = self.open_connection()?;
        conn.query_row(
            "SELECT value FROM slots WHERE key = ?1",
            params![self.key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn write(&self, value: &str) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![self.key, value, now_epoch_ms_string()],
        )
        .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(())
    }

    fn delete(&self) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        conn.execute("DELETE FROM slots WHERE key = ?1", params![self.key])
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(())
    }
}

fn now_epoch_ms_string() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or_default()
        .to_string()
}
