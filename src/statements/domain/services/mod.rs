pub mod sql_table;
pub mod statement_templates;
