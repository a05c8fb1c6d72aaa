//! Dataset fixtures: table names, DDL, and deterministic seed data.

pub mod movies;
pub mod shopify;
