use std::path::{Path, PathBuf};

pub mod error;
pub mod meta;
pub mod queries;
pub mod render;
pub mod snapshot;

pub use error::{Error, Result};
pub use snapshot::SnapshotStore;

use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Statement};
use serde_json::Value as JsonValue;
use tracing::debug;

/// An open handle to one stage's database file.
///
/// Thin wrapper over a SQLite connection: raw SQL in, affected-row
/// counts or JSON row objects out. All constraint checking is the
/// engine's; errors propagate unless the caller catches them.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    conn: Connection,
}

impl Database {
    /// Opens (creating if absent) the database file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let conn = Connection::open(&path)?;
        Ok(Self { path, conn })
    }

    /// In-memory database, used by unit tests.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw connection access, for prepared-statement bulk loads.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Executes a single mutating statement (DDL or DML) and returns
    /// the number of affected rows.
    pub fn execute(&self, sql: &str) -> Result<usize> {
        debug!(sql, "execute");
        Ok(self.conn.execute(sql, [])?)
    }

    /// Executes a semicolon-separated batch of statements.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Bulk-inserts rows through one prepared statement inside a
    /// single transaction. Returns the number of inserted rows.
    pub fn insert_many(&self, sql: &str, rows: &[Vec<JsonValue>]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(sql)?;
            for row in rows {
                let params = rusqlite::params_from_iter(row.iter().map(json_to_sql));
                inserted += stmt.execute(params)?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    /// Runs a SELECT expected to yield at most one row.
    pub fn select_single_row(&self, sql: &str) -> Result<Option<JsonValue>> {
        let mut rows = self.select_multiple_rows(sql)?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.swap_remove(0)))
        }
    }

    /// Runs a SELECT and maps every row to a JSON object keyed by
    /// column name.
    pub fn select_multiple_rows(&self, sql: &str) -> Result<Vec<JsonValue>> {
        debug!(sql, "select");
        let mut stmt = self.conn.prepare(sql)?;
        rows_to_json(&mut stmt)
    }

    /// True if a table with the given name exists in the catalog.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Turns on referential-integrity enforcement for this session.
    pub fn enable_foreign_keys(&self) -> Result<()> {
        self.conn.pragma_update(None, "foreign_keys", true)?;
        Ok(())
    }
}

fn rows_to_json(stmt: &mut Statement<'_>) -> Result<Vec<JsonValue>> {
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let mut out = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut obj = serde_json::Map::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            obj.insert(name.clone(), value_to_json(row.get_ref(i)?));
        }
        out.push(JsonValue::Object(obj));
    }
    Ok(out)
}

fn json_to_sql(value: &JsonValue) -> SqlValue {
    match value {
        JsonValue::Null => SqlValue::Null,
        JsonValue::Bool(b) => SqlValue::Integer(*b as i64),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => n.as_f64().map(SqlValue::Real).unwrap_or(SqlValue::Null),
        },
        JsonValue::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

fn value_to_json(value: ValueRef<'_>) -> JsonValue {
    match value {
        ValueRef::Null => JsonValue::Null,
        ValueRef::Integer(n) => JsonValue::from(n),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        ValueRef::Text(t) => JsonValue::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => JsonValue::String(format!("0x{}", hex::encode_upper(b))),
    }
}
