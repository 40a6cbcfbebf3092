use std::sync::Arc;

use async_trait::async_trait;

use crate::schema::{
    domain::model::{
        enums::schema_domain_error::SchemaDomainError,
        value_objects::connection_settings::ConnectionSettings,
    },
    infrastructure::persistence::repositories::statement_executor_repository::StatementExecutorRepository,
};

#[async_trait]
pub trait ConnectionFactoryRepository: Send + Sync {
    async fn open(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<Arc<dyn StatementExecutorRepository>, SchemaDomainError>;
}
