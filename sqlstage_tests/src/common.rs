//! Snapshot-chain plumbing shared by the stage tests.
//!
//! Canonical stage snapshots ("00", "01", ...) are built on demand
//! under a process-wide lock and never mutated afterwards. Every test
//! works on its own uniquely-labelled copy of a canonical snapshot, so
//! the linear chain survives a parallel test runner.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

use anyhow::Context;
use sqlstage_core::{Database, Result, SnapshotStore};

use crate::fixtures::{movies, shopify};

type StageFn = fn(&Database) -> Result<()>;

const SHOPIFY_STAGES: &[(&str, StageFn)] = &[
    ("01", shopify::create_tables),
    ("02", shopify::insert_flat_data),
    ("03", shopify::insert_combined_data),
    ("04", carry_forward),
];

const MOVIES_STAGES: &[(&str, StageFn)] = &[
    ("01", movies::create_tables),
    ("02", movies::insert_flat_data),
    ("03", movies::create_indexes),
    ("04", movies::create_relationship_tables),
];

/// A read-only stage: the snapshot is carried forward unchanged.
fn carry_forward(_db: &Database) -> Result<()> {
    Ok(())
}

fn suite_root() -> &'static PathBuf {
    static ROOT: OnceLock<PathBuf> = OnceLock::new();
    ROOT.get_or_init(|| {
        let mut path = std::env::temp_dir();
        path.push(format!("sqlstage_stages_{}", std::process::id()));
        path
    })
}

fn chain_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn unique_label(stage: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{stage}-{id}")
}

fn build_chain(store: &SnapshotStore, stages: &[(&str, StageFn)], upto: &str) -> anyhow::Result<()> {
    if !store.exists("00") {
        store.create("00")?;
    }
    if upto == "00" {
        return Ok(());
    }
    let mut prior = "00";
    for (label, stage) in stages.iter().copied() {
        if !store.exists(label) {
            let db = store
                .from_existing(prior, label)
                .with_context(|| format!("loading snapshot {prior} for stage {label}"))?;
            stage(&db).with_context(|| format!("running stage {label}"))?;
        }
        if label == upto {
            return Ok(());
        }
        prior = label;
    }
    anyhow::bail!("unknown stage label '{upto}'");
}

fn stage_db(dataset: &str, stages: &[(&str, StageFn)], prior: &str, current: &str) -> Database {
    let store = SnapshotStore::new(suite_root().join(dataset)).unwrap();
    let _guard = chain_lock().lock().unwrap();
    build_chain(&store, stages, prior).unwrap();
    store.from_existing(prior, &unique_label(current)).unwrap()
}

/// A private working copy of the shopify chain's `prior` snapshot,
/// labelled for `current`. The canonical chain is materialized first.
pub fn shopify_db(prior: &str, current: &str) -> Database {
    stage_db("shopify", SHOPIFY_STAGES, prior, current)
}

/// Movies-chain counterpart of [`shopify_db`].
pub fn movies_db(prior: &str, current: &str) -> Database {
    stage_db("movies", MOVIES_STAGES, prior, current)
}

// ---- shared assertion helpers ----

pub fn names_and_types(db: &Database, table: &str) -> Vec<(String, String)> {
    db.table_info(table)
        .unwrap()
        .into_iter()
        .map(|c| (c.name, c.decl_type))
        .collect()
}

pub fn primary_key_flags(db: &Database, table: &str) -> Vec<(String, bool)> {
    db.table_info(table)
        .unwrap()
        .into_iter()
        .map(|c| (c.name.clone(), c.is_primary_key()))
        .collect()
}

pub fn not_null_flags(db: &Database, table: &str) -> Vec<(String, bool)> {
    db.table_info(table)
        .unwrap()
        .into_iter()
        .map(|c| (c.name, c.not_null))
        .collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

pub fn flags(expected: &[(&str, bool)]) -> Vec<(String, bool)> {
    expected.iter().map(|(a, b)| (a.to_string(), *b)).collect()
}
