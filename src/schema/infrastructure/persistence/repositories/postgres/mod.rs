pub mod sqlx_connection_factory_repository_impl;
pub mod sqlx_statement_executor_repository_impl;
pub mod untyped_null;
