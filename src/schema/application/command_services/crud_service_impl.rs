use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    schema::{
        domain::{
            model::enums::schema_domain_error::SchemaDomainError,
            services::crud_service::CrudService,
        },
        infrastructure::persistence::repositories::statement_executor_repository::StatementExecutorRepository,
    },
    statements::domain::{
        model::{
            entities::select_statement_builder::SelectStatementBuilder,
            value_objects::sql_param::SqlParam,
        },
        services::{sql_table::SqlTable, statement_templates},
    },
};

pub struct CrudServiceImpl {
    executor: Arc<dyn StatementExecutorRepository>,
    log_statements: bool,
}

impl CrudServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutorRepository>, log_statements: bool) -> Self {
        Self {
            executor,
            log_statements,
        }
    }

    fn ensure_column_count(table: &dyn SqlTable, required: usize) -> Result<(), SchemaDomainError> {
        let actual = table.column_names().len();
        if actual < required {
            return Err(SchemaDomainError::TooFewColumns {
                table: table.table_name().to_string(),
                required,
                actual,
            });
        }

        Ok(())
    }

    fn ensure_value_count(
        table: &dyn SqlTable,
        expected: usize,
        values: &[SqlParam],
    ) -> Result<(), SchemaDomainError> {
        if values.len() != expected {
            return Err(SchemaDomainError::ValueCountMismatch {
                table: table.table_name().to_string(),
                expected,
                actual: values.len(),
            });
        }

        Ok(())
    }

    async fn insert_returning_key(
        &self,
        table: &dyn SqlTable,
        statement: &str,
        values: &[SqlParam],
    ) -> Result<i64, SchemaDomainError> {
        self.executor
            .fetch_scalar_i64(statement, values)
            .await?
            .ok_or_else(|| {
                SchemaDomainError::DecodeError(format!(
                    "insert into {} returned a NULL {}",
                    table.table_name(),
                    table.key_column()
                ))
            })
    }
}

#[async_trait]
impl CrudService for CrudServiceImpl {
    async fn insert(
        &self,
        table: &dyn SqlTable,
        values: &[SqlParam],
    ) -> Result<i64, SchemaDomainError> {
        Self::ensure_column_count(table, 1)?;
        Self::ensure_value_count(table, table.column_names().len(), values)?;

        let statement = statement_templates::insert_statement(table);
        self.insert_returning_key(table, &statement, values).await
    }

    async fn insert_omit_primary(
        &self,
        table: &dyn SqlTable,
        values: &[SqlParam],
    ) -> Result<i64, SchemaDomainError> {
        Self::ensure_column_count(table, 2)?;
        let expected = table.column_names().len() - 1;
        Self::ensure_value_count(table, expected, values)?;

        let statement = statement_templates::insert_omit_primary_statement(table);
        self.insert_returning_key(table, &statement, values).await
    }

    async fn update(
        &self,
        table: &dyn SqlTable,
        key_column: &str,
        values: &[SqlParam],
    ) -> Result<(), SchemaDomainError> {
        Self::ensure_column_count(table, 2)?;
        Self::ensure_value_count(table, table.column_names().len(), values)?;

        let statement = statement_templates::update_statement(table, key_column);
        self.update_with_statement(&statement, table, values).await
    }

    async fn update_with_statement(
        &self,
        statement: &str,
        table: &dyn SqlTable,
        values: &[SqlParam],
    ) -> Result<(), SchemaDomainError> {
        let affected = self.executor.execute(statement, values).await?;

        if affected != 1 {
            if self.log_statements {
                tracing::warn!(table = table.table_name(), affected, "update did not hit exactly one row");
            }

            return Err(SchemaDomainError::UpdateRowCountMismatch {
                table: table.table_name().to_string(),
                affected,
            });
        }

        Ok(())
    }

    async fn delete(
        &self,
        key: SqlParam,
        key_column: &str,
        table: &dyn SqlTable,
    ) -> Result<(), SchemaDomainError> {
        let statement = statement_templates::delete_statement(table, key_column);
        self.executor.execute(&statement, &[key]).await?;
        Ok(())
    }

    async fn count(&self, table: &dyn SqlTable) -> Result<i64, SchemaDomainError> {
        let statement = statement_templates::count_statement(table);
        self.count_by_statement(table, &statement, &[]).await
    }

    async fn count_by_statement(
        &self,
        table: &dyn SqlTable,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<i64, SchemaDomainError> {
        if self.log_statements {
            tracing::debug!(table = table.table_name(), "counting rows");
        }

        Ok(self
            .executor
            .fetch_scalar_i64(statement, params)
            .await?
            .unwrap_or(0))
    }

    async fn max(&self, table: &dyn SqlTable, column: &str) -> Result<i64, SchemaDomainError> {
        let statement = statement_templates::max_statement(table, column);

        // max() over an empty table is NULL
        Ok(self
            .executor
            .fetch_scalar_i64(&statement, &[])
            .await?
            .unwrap_or(0))
    }

    async fn find_by_key(
        &self,
        table: &dyn SqlTable,
        key: SqlParam,
    ) -> Result<Option<Value>, SchemaDomainError> {
        let statement = statement_templates::select_by_key_statement(table);
        let rows = self.executor.fetch_json_rows(&statement, &[key]).await?;
        Ok(rows.into_iter().next())
    }

    async fn select(
        &self,
        builder: &SelectStatementBuilder,
    ) -> Result<Vec<Value>, SchemaDomainError> {
        self.executor
            .fetch_json_rows(builder.statement(), builder.params())
            .await
    }
}
