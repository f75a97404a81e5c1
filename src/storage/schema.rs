use rusqlite::Connection;

use crate::errors::Result;

pub const CREATE_HITS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS hits (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        original_index INTEGER,
        number TEXT,
        title TEXT,
        color TEXT,
        text TEXT,
        tension TEXT,
        flag TEXT,
        icon TEXT,
        original INTEGER NOT NULL DEFAULT 0,
        created_at TEXT
    )
";

/// Applies the schema to a freshly opened connection. Injected into the
/// native store so the table layout can be swapped out.
pub trait SchemaInit {
    fn ensure_schema(&self, conn: &Connection) -> Result<()>;
}

/// The stock `hits` table.
#[derive(Debug, Default)]
pub struct HitsSchema;

impl SchemaInit for HitsSchema {
    fn ensure_schema(&self, conn: &Connection) -> Result<()> {
        conn.execute(CREATE_HITS_TABLE, [])?;
        Ok(())
    }
}
