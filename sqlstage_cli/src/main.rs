use std::io::{self, Write};

use anyhow::Context;
use sqlstage_core::render::format_rows;
use sqlstage_core::Database;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "./stage.db".to_string());
    let db = Database::open(&path).with_context(|| format!("opening snapshot '{path}'"))?;
    info!(path = %path, "snapshot opened");

    println!("sqlstage_cli (type 'help' or 'exit')");

    loop {
        print!("sql> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            println!("Failed to read input");
            continue;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            println!("Commands:");
            println!("  tables            -> list tables");
            println!("  info <table>      -> column descriptors (JSON)");
            println!("  indexes <table>   -> index descriptors (JSON)");
            println!("  fk on             -> enable foreign-key enforcement");
            println!("  exit|quit         -> quit");
            println!("  (anything else is executed as SQL)");
            continue;
        }

        if input.eq_ignore_ascii_case("tables") {
            match db.select_multiple_rows(
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            ) {
                Ok(rows) => println!("{}", format_rows(&rows)),
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }

        if let Some(table) = input.strip_prefix("info ") {
            match db.table_info(table.trim()) {
                Ok(columns) => println!("{}", serde_json::to_string_pretty(&columns)?),
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }

        if let Some(table) = input.strip_prefix("indexes ") {
            match db.index_list(table.trim()) {
                Ok(indexes) => println!("{}", serde_json::to_string_pretty(&indexes)?),
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }

        if input.eq_ignore_ascii_case("fk on") {
            match db.enable_foreign_keys() {
                Ok(()) => println!("foreign keys enabled"),
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }

        // ---- SQL EXECUTION ----
        if input.to_ascii_lowercase().starts_with("select") {
            match db.select_multiple_rows(input) {
                Ok(rows) => println!("{}", format_rows(&rows)),
                Err(e) => eprintln!("{e}"),
            }
        } else {
            match db.execute(input) {
                Ok(n) => println!("{n} row(s) affected"),
                Err(e) => eprintln!("{e}"),
            }
        }
    }

    Ok(())
}
