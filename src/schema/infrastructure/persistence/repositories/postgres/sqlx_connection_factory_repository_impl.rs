use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::schema::{
    domain::model::{
        enums::schema_domain_error::SchemaDomainError,
        value_objects::connection_settings::ConnectionSettings,
    },
    infrastructure::persistence::repositories::{
        connection_factory_repository::ConnectionFactoryRepository,
        postgres::sqlx_statement_executor_repository_impl::SqlxStatementExecutorRepositoryImpl,
        statement_executor_repository::StatementExecutorRepository,
    },
};

pub struct SqlxConnectionFactoryRepositoryImpl {
    log_statements: bool,
}

impl SqlxConnectionFactoryRepositoryImpl {
    pub fn new(log_statements: bool) -> Self {
        Self { log_statements }
    }
}

#[async_trait]
impl ConnectionFactoryRepository for SqlxConnectionFactoryRepositoryImpl {
    async fn open(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<Arc<dyn StatementExecutorRepository>, SchemaDomainError> {
        if self.log_statements {
            tracing::info!(
                connection = %settings.redacted_connection_string(),
                "opening postgres connection pool"
            );
        }

        let mut options = PgConnectOptions::new()
            .host(settings.host())
            .port(settings.port())
            .username(settings.user())
            .password(settings.password())
            .database(settings.database_name())
            .ssl_mode(PgSslMode::Disable);

        if let Some(schema) = settings.search_path() {
            options = options.options([("search_path", schema)]);
        }

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections())
            .connect_with(options)
            .await
            .map_err(|e| SchemaDomainError::ConnectionError(e.to_string()))?;

        Ok(Arc::new(SqlxStatementExecutorRepositoryImpl::new(
            pool,
            self.log_statements,
        )))
    }
}
