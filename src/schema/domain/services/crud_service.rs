use async_trait::async_trait;
use serde_json::Value;

use crate::{
    schema::domain::model::enums::schema_domain_error::SchemaDomainError,
    statements::domain::{
        model::{
            entities::select_statement_builder::SelectStatementBuilder,
            value_objects::sql_param::SqlParam,
        },
        services::sql_table::SqlTable,
    },
};

#[async_trait]
pub trait CrudService: Send + Sync {
    /// `values` are aligned with `table.column_names()`; returns the key column
    /// of the inserted row.
    async fn insert(&self, table: &dyn SqlTable, values: &[SqlParam])
    -> Result<i64, SchemaDomainError>;

    /// Like `insert`, but `values` skip the first column.
    async fn insert_omit_primary(
        &self,
        table: &dyn SqlTable,
        values: &[SqlParam],
    ) -> Result<i64, SchemaDomainError>;

    /// `values[0]` is the key, the rest follow `table.column_names()[1..]`.
    async fn update(
        &self,
        table: &dyn SqlTable,
        key_column: &str,
        values: &[SqlParam],
    ) -> Result<(), SchemaDomainError>;

    async fn update_with_statement(
        &self,
        statement: &str,
        table: &dyn SqlTable,
        values: &[SqlParam],
    ) -> Result<(), SchemaDomainError>;

    async fn delete(
        &self,
        key: SqlParam,
        key_column: &str,
        table: &dyn SqlTable,
    ) -> Result<(), SchemaDomainError>;

    async fn count(&self, table: &dyn SqlTable) -> Result<i64, SchemaDomainError>;

    async fn count_by_statement(
        &self,
        table: &dyn SqlTable,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<i64, SchemaDomainError>;

    async fn max(&self, table: &dyn SqlTable, column: &str) -> Result<i64, SchemaDomainError>;

    async fn find_by_key(
        &self,
        table: &dyn SqlTable,
        key: SqlParam,
    ) -> Result<Option<Value>, SchemaDomainError>;

    async fn select(
        &self,
        builder: &SelectStatementBuilder,
    ) -> Result<Vec<Value>, SchemaDomainError>;
}
