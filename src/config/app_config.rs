#[derive(Clone, Debug)]
pub struct AppConfig {
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_admin_database: String,
    pub postgres_database: String,
    pub postgres_schema: String,
    pub postgres_max_connections: u32,
    pub log_statements: bool,
    pub force_recreate: bool,
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_admin_database: std::env::var("POSTGRES_ADMIN_DATABASE")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "app".to_string()),
            postgres_schema: std::env::var("POSTGRES_SCHEMA")
                .unwrap_or_else(|_| "public".to_string()),
            postgres_max_connections: std::env::var("POSTGRES_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),
            log_statements: env_flag("DATABASE_LOG_STATEMENTS", true),
            force_recreate: env_flag("DATABASE_FORCE_RECREATE", false),
        }
    }
}
