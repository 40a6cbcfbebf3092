#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatementOrderBy {
    by: String,
    descending: bool,
}

impl StatementOrderBy {
    pub fn new(by: impl Into<String>, descending: bool) -> Self {
        Self {
            by: by.into(),
            descending,
        }
    }

    pub fn ascending(by: impl Into<String>) -> Self {
        Self::new(by, false)
    }

    pub fn descending(by: impl Into<String>) -> Self {
        Self::new(by, true)
    }

    pub fn by(&self) -> &str {
        &self.by
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    pub fn direction(&self) -> &'static str {
        if self.descending { "DESC" } else { "ASC" }
    }
}
