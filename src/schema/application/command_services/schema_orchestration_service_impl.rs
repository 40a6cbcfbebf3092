use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    schema::{
        domain::{
            model::{
                commands::initialize_database_command::InitializeDatabaseCommand,
                enums::schema_domain_error::SchemaDomainError,
                value_objects::sql_identifier::SqlIdentifier,
            },
            services::schema_orchestration_service::SchemaOrchestrationService,
        },
        infrastructure::persistence::repositories::statement_executor_repository::StatementExecutorRepository,
    },
    statements::domain::services::{sql_table::SqlTable, statement_templates},
};

pub struct SchemaOrchestrationServiceImpl {
    executor: Arc<dyn StatementExecutorRepository>,
    log_statements: bool,
}

impl SchemaOrchestrationServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutorRepository>, log_statements: bool) -> Self {
        Self {
            executor,
            log_statements,
        }
    }

    async fn run_ddl(&self, statement: &str) -> Result<(), SchemaDomainError> {
        self.executor.execute(statement, &[]).await?;
        Ok(())
    }

    async fn run_idempotent_ddl(&self, statement: &str) -> Result<(), SchemaDomainError> {
        match self.run_ddl(statement).await {
            Err(SchemaDomainError::AlreadyExists(message)) => {
                if self.log_statements {
                    tracing::info!(statement, reason = %message, "object already exists, skipping");
                }
                Ok(())
            }
            result => result,
        }
    }
}

#[async_trait]
impl SchemaOrchestrationService for SchemaOrchestrationServiceImpl {
    async fn maybe_create_database(
        &self,
        database_name: &SqlIdentifier,
    ) -> Result<(), SchemaDomainError> {
        if self.log_statements {
            tracing::info!(database = database_name.value(), "maybe create database");
        }

        self.run_idempotent_ddl(&statement_templates::create_database_statement(
            database_name.value(),
        ))
        .await
    }

    async fn drop_database_if_exists(
        &self,
        database_name: &SqlIdentifier,
    ) -> Result<(), SchemaDomainError> {
        if self.log_statements {
            tracing::info!(database = database_name.value(), "dropping database");
        }

        self.run_ddl(&statement_templates::drop_database_statement(
            database_name.value(),
        ))
        .await
    }

    async fn maybe_create_schema(&self, schema: &SqlIdentifier) -> Result<(), SchemaDomainError> {
        if self.log_statements {
            tracing::info!(schema = schema.value(), "maybe create schema");
        }

        self.run_idempotent_ddl(&statement_templates::create_schema_statement(schema.value()))
            .await
    }

    async fn drop_schema_if_exists(
        &self,
        schema: &SqlIdentifier,
    ) -> Result<(), SchemaDomainError> {
        if self.log_statements {
            tracing::info!(schema = schema.value(), "dropping schema");
        }

        self.run_ddl(&statement_templates::drop_schema_statement(schema.value()))
            .await
    }

    async fn maybe_create_table(&self, table: &dyn SqlTable) -> Result<(), SchemaDomainError> {
        if self.log_statements {
            tracing::info!(table = table.table_name(), "maybe create table");
        }

        self.run_idempotent_ddl(&table.create_statement()).await
    }

    async fn drop_table_if_exists(&self, table: &dyn SqlTable) -> Result<(), SchemaDomainError> {
        self.run_ddl(&statement_templates::drop_table_statement(table))
            .await
    }

    async fn maybe_initialize_tables(
        &self,
        tables: &[Arc<dyn SqlTable>],
    ) -> Result<(), SchemaDomainError> {
        for table in tables {
            self.maybe_create_table(table.as_ref()).await?;
        }

        Ok(())
    }

    async fn initialize_database(
        &self,
        command: &InitializeDatabaseCommand,
    ) -> Result<(), SchemaDomainError> {
        if self.log_statements {
            tracing::info!(
                database = command.database_name().value(),
                schema = command.schema().value(),
                force_recreate = command.force_recreate(),
                "initializing database"
            );
        }

        if command.force_recreate() {
            self.drop_schema_if_exists(command.schema()).await?;
        }

        self.maybe_create_schema(command.schema()).await?;
        self.maybe_initialize_tables(command.tables()).await
    }
}
