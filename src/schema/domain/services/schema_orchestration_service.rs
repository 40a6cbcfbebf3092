use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    schema::domain::model::{
        commands::initialize_database_command::InitializeDatabaseCommand,
        enums::schema_domain_error::SchemaDomainError, value_objects::sql_identifier::SqlIdentifier,
    },
    statements::domain::services::sql_table::SqlTable,
};

#[async_trait]
pub trait SchemaOrchestrationService: Send + Sync {
    async fn maybe_create_database(
        &self,
        database_name: &SqlIdentifier,
    ) -> Result<(), SchemaDomainError>;

    async fn drop_database_if_exists(
        &self,
        database_name: &SqlIdentifier,
    ) -> Result<(), SchemaDomainError>;

    async fn maybe_create_schema(&self, schema: &SqlIdentifier) -> Result<(), SchemaDomainError>;

    async fn drop_schema_if_exists(&self, schema: &SqlIdentifier)
    -> Result<(), SchemaDomainError>;

    async fn maybe_create_table(&self, table: &dyn SqlTable) -> Result<(), SchemaDomainError>;

    async fn drop_table_if_exists(&self, table: &dyn SqlTable) -> Result<(), SchemaDomainError>;

    async fn maybe_initialize_tables(
        &self,
        tables: &[Arc<dyn SqlTable>],
    ) -> Result<(), SchemaDomainError>;

    async fn initialize_database(
        &self,
        command: &InitializeDatabaseCommand,
    ) -> Result<(), SchemaDomainError>;
}
