use std::sync::Arc;

use crate::{
    config::app_config::AppConfig,
    schema::{
        application::command_services::{
            crud_service_impl::CrudServiceImpl,
            schema_orchestration_service_impl::SchemaOrchestrationServiceImpl,
        },
        domain::{
            model::{
                commands::initialize_database_command::InitializeDatabaseCommand,
                enums::schema_domain_error::SchemaDomainError,
                value_objects::connection_settings::ConnectionSettings,
            },
            services::schema_orchestration_service::SchemaOrchestrationService,
        },
        infrastructure::persistence::repositories::{
            connection_factory_repository::ConnectionFactoryRepository,
            postgres::sqlx_connection_factory_repository_impl::SqlxConnectionFactoryRepositoryImpl,
            statement_executor_repository::StatementExecutorRepository,
        },
    },
    statements::domain::services::sql_table::SqlTable,
};

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_ADMIN_DATABASE: &str = "postgres";
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// A connection to a provisioned database.
pub struct DatabaseHandle {
    settings: ConnectionSettings,
    executor: Arc<dyn StatementExecutorRepository>,
    log_statements: bool,
}

impl DatabaseHandle {
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    pub fn executor(&self) -> Arc<dyn StatementExecutorRepository> {
        self.executor.clone()
    }

    pub fn crud_service(&self) -> CrudServiceImpl {
        CrudServiceImpl::new(self.executor.clone(), self.log_statements)
    }

    pub fn orchestration_service(&self) -> SchemaOrchestrationServiceImpl {
        SchemaOrchestrationServiceImpl::new(self.executor.clone(), self.log_statements)
    }

    pub async fn close(&self) {
        self.executor.close().await;
    }
}

/// Collects everything needed to bring a database, its schema and its tables
/// into existence, then opens a connection to it.
pub struct DatabaseCreator {
    database_name: String,
    schema: String,
    host: String,
    port: u16,
    user: String,
    password: String,
    admin_database: String,
    max_connections: u32,
    log_statements: bool,
    tables: Vec<Arc<dyn SqlTable>>,
    connection_factory: Option<Arc<dyn ConnectionFactoryRepository>>,
}

impl DatabaseCreator {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            schema: String::new(),
            host: String::new(),
            port: DEFAULT_PORT,
            user: String::new(),
            password: String::new(),
            admin_database: DEFAULT_ADMIN_DATABASE.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_statements: true,
            tables: Vec::new(),
            connection_factory: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.postgres_database.clone())
            .with_host(config.postgres_host.clone())
            .with_port(config.postgres_port)
            .with_user(config.postgres_user.clone())
            .with_password(config.postgres_password.clone())
            .with_schema(config.postgres_schema.clone())
            .with_admin_database(config.postgres_admin_database.clone())
            .with_max_connections(config.postgres_max_connections)
            .with_log_statements(config.log_statements)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_admin_database(mut self, admin_database: impl Into<String>) -> Self {
        self.admin_database = admin_database.into();
        self
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_log_statements(mut self, log_statements: bool) -> Self {
        self.log_statements = log_statements;
        self
    }

    pub fn with_connection_factory(
        mut self,
        connection_factory: Arc<dyn ConnectionFactoryRepository>,
    ) -> Self {
        self.connection_factory = Some(connection_factory);
        self
    }

    /// Registers a table; a table with the same name replaces the earlier one
    /// in place.
    pub fn add_table(mut self, table: Arc<dyn SqlTable>) -> Self {
        match self
            .tables
            .iter()
            .position(|existing| existing.table_name() == table.table_name())
        {
            Some(position) => self.tables[position] = table,
            None => self.tables.push(table),
        }
        self
    }

    pub fn tables(&self) -> &[Arc<dyn SqlTable>] {
        &self.tables
    }

    fn validate(&self) -> Result<(), SchemaDomainError> {
        let required = [
            ("host", &self.host),
            ("database", &self.database_name),
            ("schema", &self.schema),
            ("user", &self.user),
            ("password", &self.password),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((setting, _)) => Err(SchemaDomainError::MissingSetting(*setting)),
            None => Ok(()),
        }
    }

    fn connection_settings(&self, database_name: &str) -> ConnectionSettings {
        ConnectionSettings::new(
            self.host.clone(),
            self.port,
            self.user.clone(),
            self.password.clone(),
            database_name,
            self.max_connections,
        )
    }

    /// Creates the database through the administrative database if needed,
    /// reconnects to it, creates schema and tables, and checks the connection.
    pub async fn open_and_initialize(
        &self,
        force_recreate: bool,
    ) -> Result<DatabaseHandle, SchemaDomainError> {
        self.validate()?;

        let command = InitializeDatabaseCommand::new(
            self.database_name.clone(),
            self.schema.clone(),
            self.tables.clone(),
            force_recreate,
        )?;

        let connection_factory: Arc<dyn ConnectionFactoryRepository> =
            match &self.connection_factory {
                Some(connection_factory) => connection_factory.clone(),
                None => Arc::new(SqlxConnectionFactoryRepositoryImpl::new(self.log_statements)),
            };

        let admin_executor = connection_factory
            .open(&self.connection_settings(&self.admin_database))
            .await?;

        let admin_orchestration =
            SchemaOrchestrationServiceImpl::new(admin_executor.clone(), self.log_statements);
        let created = admin_orchestration
            .maybe_create_database(command.database_name())
            .await;
        admin_executor.close().await;
        created?;

        let settings = self
            .connection_settings(command.database_name().value())
            .with_search_path(command.schema().value());
        let executor = connection_factory.open(&settings).await?;

        SchemaOrchestrationServiceImpl::new(executor.clone(), self.log_statements)
            .initialize_database(&command)
            .await?;

        executor.ping().await?;

        if self.log_statements {
            tracing::info!(
                database = command.database_name().value(),
                schema = command.schema().value(),
                tables = command.tables().len(),
                "database ready"
            );
        }

        Ok(DatabaseHandle {
            settings,
            executor,
            log_statements: self.log_statements,
        })
    }
}
