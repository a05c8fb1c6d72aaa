//! Catalog inspectors.
//!
//! Read-only views over SQLite's own metadata pragmas, returned in the
//! engine's shape: declared type as written in the DDL, `pk` as the
//! 1-based position within the primary key (0 when not part of it).

use serde::Serialize;

use crate::error::Result;
use crate::Database;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub pk: u32,
}

impl ColumnInfo {
    pub fn is_primary_key(&self) -> bool {
        self.pk > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexInfo {
    pub name: String,
    pub unique: bool,
    /// "c" for CREATE INDEX, "u" for UNIQUE constraints, "pk" for
    /// primary-key autoindexes.
    pub origin: String,
}

impl Database {
    /// Column descriptors for `table`, in declared order.
    pub fn table_info(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("PRAGMA table_info(\"{table}\")"))?;
        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    name: row.get("name")?,
                    decl_type: row.get("type")?,
                    not_null: row.get::<_, i64>("notnull")? == 1,
                    pk: row.get::<_, u32>("pk")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// Index descriptors for `table`, as the engine reports them
    /// (autoindexes included).
    pub fn index_list(&self, table: &str) -> Result<Vec<IndexInfo>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("PRAGMA index_list(\"{table}\")"))?;
        let indexes = stmt
            .query_map([], |row| {
                Ok(IndexInfo {
                    name: row.get("name")?,
                    unique: row.get::<_, i64>("unique")? == 1,
                    origin: row.get("origin")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(indexes)
    }
}
