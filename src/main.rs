use dotenvy::dotenv;
use pg_orchestrator::{
    config::app_config::AppConfig, schema::application::database_creator::DatabaseCreator,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let database = DatabaseCreator::from_config(&config)
        .open_and_initialize(config.force_recreate)
        .await
        .expect("failed to provision database");

    tracing::info!(
        connection = %database.settings().redacted_connection_string(),
        schema = %config.postgres_schema,
        "database provisioned"
    );

    database.close().await;
}
