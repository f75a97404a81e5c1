use std::fs;
use std::path::PathBuf;

use rusqlite::{Connection, Row, params};

use crate::errors::{Result, StoreError};
use super::HitStore;
use super::models::{Hit, NewHit};
use super::schema::{HitsSchema, SchemaInit};

const INSERT_CUSTOM: &str = "
    INSERT INTO hits (type, text, original)
    VALUES (?1, ?2, ?3)
";

const INSERT_ORIGINAL: &str = "
    INSERT INTO hits (type, original_index, number, title, color, text, tension, flag, original)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
";

const INSERT_DISPLAY: &str = "
    INSERT INTO hits (type, original_index, number, title, color, text, tension, flag, icon, original, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, CURRENT_TIMESTAMP)
";

const SELECT_HITS: &str = "
    SELECT type, original_index, number, title, color, text, tension, flag, icon, original
    FROM hits
";

/// Native record store backed by a local SQLite file.
pub struct SqliteStore {
    db_path: PathBuf,
    conn: Option<Connection>,
    schema: Box<dyn SchemaInit>,
}

fn row_to_hit(row: &Row) -> rusqlite::Result<Hit> {
    let original_int: i32 = row.get(9)?;
    Ok(Hit {
        kind: row.get(0)?,
        original_index: row.get(1)?,
        number: row.get(2)?,
        title: row.get(3)?,
        color: row.get(4)?,
        text: row.get(5)?,
        tension: row.get(6)?,
        flag: row.get(7)?,
        icon: row.get(8)?,
        original: original_int != 0,
    })
}

impl SqliteStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self::with_schema(db_path, Box::new(HitsSchema))
    }

    /// Store with a caller-supplied schema collaborator.
    pub fn with_schema(db_path: impl Into<PathBuf>, schema: Box<dyn SchemaInit>) -> Self {
        SqliteStore {
            db_path: db_path.into(),
            conn: None,
            schema,
        }
    }

    /// Opened and initialized store on a throwaway in-memory database.
    pub fn in_memory() -> Result<Self> {
        let mut store = Self::new(":memory:");
        store.open_database()?;
        store.init_tables()?;
        Ok(store)
    }

    #[cfg(test)]
    pub fn conn(&self) -> &Connection {
        self.conn.as_ref().unwrap()
    }
}

impl HitStore for SqliteStore {
    fn open_database(&mut self) -> Result<()> {
        if self.conn.is_some() {
            return Ok(());
        }
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.conn = Some(Connection::open(&self.db_path)?);
        Ok(())
    }

    fn init_tables(&mut self) -> Result<()> {
        match &self.conn {
            Some(conn) => self.schema.ensure_schema(conn),
            None => Err(StoreError::NotOpened),
        }
    }

    fn close_database(&mut self) -> Result<()> {
        match self.conn.take() {
            Some(conn) => {
                if let Err((conn, e)) = conn.close() {
                    self.conn = Some(conn);
                    return Err(StoreError::Storage(e));
                }
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn insert_hits_from_textarea(&self, hits: &[NewHit]) -> bool {
        let conn = match &self.conn {
            Some(conn) => conn,
            None => return false,
        };
        let mut next_index: i64 = 0;
        let mut all_ok = true;
        // continue-on-error: a bad record is reported and skipped, the rest
        // still land; the index it consumed is not handed out again
        for hit in hits {
            let result = if hit.is_custom() {
                conn.execute(INSERT_CUSTOM, params![hit.kind, hit.text, false])
            } else {
                let index = next_index;
                next_index += 1;
                conn.execute(
                    INSERT_ORIGINAL,
                    params![
                        hit.kind,
                        index,
                        hit.number,
                        hit.title,
                        hit.color,
                        hit.text,
                        hit.tension,
                        hit.flag,
                        true,
                    ],
                )
            };
            if let Err(e) = result {
                eprintln!("hitbase: insert error: {}", e);
                all_ok = false;
            }
        }
        all_ok
    }

    fn insert_hits_from_display(&self, hits: &[Hit]) -> bool {
        let conn = match &self.conn {
            Some(conn) => conn,
            None => return false,
        };
        // stop-on-error: the first bad record aborts the remainder
        for hit in hits {
            let result = conn.execute(
                INSERT_DISPLAY,
                params![
                    hit.kind,
                    hit.original_index,
                    hit.number,
                    hit.title,
                    hit.color,
                    hit.text,
                    hit.tension,
                    hit.flag,
                    hit.icon,
                    hit.original,
                ],
            );
            if let Err(e) = result {
                eprintln!("hitbase: insert error: {}", e);
                return false;
            }
        }
        true
    }

    fn get_hits(&self) -> Vec<Hit> {
        let conn = match &self.conn {
            Some(conn) => conn,
            None => return Vec::new(),
        };
        let fetch = || -> Result<Vec<Hit>> {
            let mut stmt = conn.prepare(SELECT_HITS)?;
            let hits = stmt
                .query_map([], row_to_hit)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(hits)
        };
        match fetch() {
            Ok(hits) => hits,
            Err(e) => {
                eprintln!("hitbase: fetch error: {}", e);
                Vec::new()
            }
        }
    }

    fn clean_hits(&self) -> bool {
        let result = match &self.conn {
            Some(conn) => conn.execute("DELETE FROM hits", []).map_err(StoreError::from),
            None => Err(StoreError::NotOpened),
        };
        match result {
            Ok(_) => true,
            Err(e) => {
                eprintln!("hitbase: clean error: {}", e);
                false
            }
        }
    }
}
