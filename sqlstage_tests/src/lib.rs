//! Staged tutorial suite over SQLite.
//!
//! Two datasets, each driven through a strictly linear chain of
//! snapshot-backed stages: create tables, load data, create
//! relationship tables, query across tables, verify referential
//! integrity. `fixtures` holds the DDL and deterministic seed data,
//! `common` materializes the snapshot chains.

pub mod common;
pub mod fixtures;
