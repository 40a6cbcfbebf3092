pub mod column_descriptor;
pub mod select_statement_builder;
pub mod table_descriptor;
