//! SQL string builders shared by the stages and the CLI.

pub fn select_row_by_id(table: &str, id: i64) -> String {
    format!("SELECT * FROM {table} WHERE id = {id}")
}

pub fn count_rows(table: &str) -> String {
    format!("SELECT COUNT(*) AS count FROM {table}")
}
