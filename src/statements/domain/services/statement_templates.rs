use crate::statements::domain::services::sql_table::SqlTable;

pub fn create_database_statement(database_name: &str) -> String {
    format!("CREATE DATABASE {database_name};")
}

pub fn drop_database_statement(database_name: &str) -> String {
    format!("DROP DATABASE IF EXISTS {database_name};")
}

pub fn create_schema_statement(schema: &str) -> String {
    format!("CREATE SCHEMA {schema};")
}

pub fn drop_schema_statement(schema: &str) -> String {
    format!("DROP SCHEMA IF EXISTS {schema} CASCADE;")
}

pub fn drop_table_statement(table: &dyn SqlTable) -> String {
    format!("DROP TABLE IF EXISTS {};", table.table_name())
}

fn placeholders(count: usize, first_position: usize) -> String {
    (0..count)
        .map(|offset| format!("${}", first_position + offset))
        .collect::<Vec<_>>()
        .join(",")
}

fn insert_statement_for_columns(table: &dyn SqlTable, columns: &[String]) -> String {
    format!(
        "INSERT INTO {}({}) VALUES({}) RETURNING {};",
        table.table_name(),
        columns.join(","),
        placeholders(columns.len(), 1),
        table.key_column()
    )
}

/// `INSERT INTO t(c1,c2,...) VALUES($1,$2,...) RETURNING key;`
///
/// Needs at least one column.
pub fn insert_statement(table: &dyn SqlTable) -> String {
    insert_statement_for_columns(table, &table.column_names())
}

/// Same as [`insert_statement`] without the first column, for generated keys.
/// Needs at least two columns.
pub fn insert_omit_primary_statement(table: &dyn SqlTable) -> String {
    let columns = table.column_names();
    let remaining = columns.get(1..).unwrap_or_default();
    insert_statement_for_columns(table, remaining)
}

/// `UPDATE t SET c2=$2,c3=$3,... WHERE key=$1;` with the first column skipped.
/// Needs at least two columns.
pub fn update_statement(table: &dyn SqlTable, key_column: &str) -> String {
    let set_clause = table
        .column_names()
        .iter()
        .enumerate()
        .skip(1)
        .map(|(position, column)| format!("{}=${}", column, position + 1))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "UPDATE {} SET {} WHERE {}=$1;",
        table.table_name(),
        set_clause,
        key_column
    )
}

pub fn delete_statement(table: &dyn SqlTable, key_column: &str) -> String {
    format!("DELETE FROM {} WHERE {}=$1;", table.table_name(), key_column)
}

pub fn select_by_key_statement(table: &dyn SqlTable) -> String {
    format!(
        "SELECT * FROM {} WHERE {} = $1",
        table.table_name(),
        table.key_column()
    )
}

pub fn count_statement(table: &dyn SqlTable) -> String {
    format!("SELECT count(*) FROM {};", table.table_name())
}

pub fn max_statement(table: &dyn SqlTable, column: &str) -> String {
    format!("SELECT max({}) FROM {};", column, table.table_name())
}
