/// Applied in order on every startup; each statement is idempotent.
pub const MIGRATIONS: &[&str] = &["CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);"];
