#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionSettings {
    host: String,
    port: u16,
    user: String,
    password: String,
    database_name: String,
    search_path: Option<String>,
    max_connections: u32,
}

impl ConnectionSettings {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        database_name: impl Into<String>,
        max_connections: u32,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            database_name: database_name.into(),
            search_path: None,
            max_connections,
        }
    }

    /// Resolves unqualified names against `schema` on every connection.
    pub fn with_search_path(mut self, schema: impl Into<String>) -> Self {
        self.search_path = Some(schema.into());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn search_path(&self) -> Option<&str> {
        self.search_path.as_deref()
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn connection_string(&self) -> String {
        self.render(&self.password)
    }

    pub fn redacted_connection_string(&self) -> String {
        self.render("***")
    }

    fn render(&self, password: &str) -> String {
        let rendered = format!(
            "host={} port={} user={} password={} dbname={} sslmode=disable",
            self.host, self.port, self.user, password, self.database_name
        );

        match &self.search_path {
            Some(schema) => format!("{rendered} options='-c search_path={schema}'"),
            None => rendered,
        }
    }
}
