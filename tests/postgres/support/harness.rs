use std::sync::Arc;

use pg_orchestrator::{
    config::app_config::AppConfig,
    schema::{
        application::{
            command_services::schema_orchestration_service_impl::SchemaOrchestrationServiceImpl,
            database_creator::DatabaseCreator,
        },
        domain::{
            model::value_objects::{
                connection_settings::ConnectionSettings, sql_identifier::SqlIdentifier,
            },
            services::schema_orchestration_service::SchemaOrchestrationService,
        },
        infrastructure::persistence::repositories::{
            connection_factory_repository::ConnectionFactoryRepository,
            postgres::sqlx_connection_factory_repository_impl::SqlxConnectionFactoryRepositoryImpl,
        },
    },
};
use uuid::Uuid;

use super::fixtures::items_table;

pub const LIVE_SCHEMA: &str = "inventory";

/// A throwaway database on the server named by `TEST_POSTGRES_HOST`; the
/// remaining connection settings come from the usual `POSTGRES_*` variables.
pub struct LiveDatabase {
    config: AppConfig,
    database_name: String,
}

impl LiveDatabase {
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("TEST_POSTGRES_HOST").ok()?;
        let mut config = AppConfig::from_env();
        config.postgres_host = host;

        Some(Self {
            config,
            database_name: format!("orchestrator_it_{}", Uuid::now_v7().simple()),
        })
    }

    pub fn creator(&self) -> DatabaseCreator {
        DatabaseCreator::new(self.database_name.clone())
            .with_host(self.config.postgres_host.clone())
            .with_port(self.config.postgres_port)
            .with_user(self.config.postgres_user.clone())
            .with_password(self.config.postgres_password.clone())
            .with_admin_database(self.config.postgres_admin_database.clone())
            .with_schema(LIVE_SCHEMA)
            .with_max_connections(2)
            .with_log_statements(false)
            .add_table(Arc::new(items_table()))
    }

    pub async fn drop_database(self) {
        let settings = ConnectionSettings::new(
            self.config.postgres_host.clone(),
            self.config.postgres_port,
            self.config.postgres_user.clone(),
            self.config.postgres_password.clone(),
            self.config.postgres_admin_database.clone(),
            1,
        );
        let admin = SqlxConnectionFactoryRepositoryImpl::new(false)
            .open(&settings)
            .await
            .expect("admin connection should open");

        SchemaOrchestrationServiceImpl::new(admin.clone(), false)
            .drop_database_if_exists(
                &SqlIdentifier::new(self.database_name).expect("generated name is valid"),
            )
            .await
            .expect("test database should drop");

        admin.close().await;
    }
}
