use async_trait::async_trait;
use serde_json::Value;

use crate::{
    schema::domain::model::enums::schema_domain_error::SchemaDomainError,
    statements::domain::model::value_objects::sql_param::SqlParam,
};

#[async_trait]
pub trait StatementExecutorRepository: Send + Sync {
    /// Runs a single statement and returns the number of affected rows.
    async fn execute(&self, statement: &str, params: &[SqlParam])
    -> Result<u64, SchemaDomainError>;

    /// Reads the first column of the first row. `Ok(None)` is a NULL value;
    /// a missing row is `SchemaDomainError::RowNotFound`.
    async fn fetch_scalar_i64(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Option<i64>, SchemaDomainError>;

    /// Runs a SELECT and returns every row as a JSON object keyed by column.
    async fn fetch_json_rows(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Vec<Value>, SchemaDomainError>;

    async fn ping(&self) -> Result<(), SchemaDomainError>;

    async fn close(&self);
}
