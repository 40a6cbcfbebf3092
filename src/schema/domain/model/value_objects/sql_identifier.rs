use regex::Regex;

use crate::schema::domain::model::enums::schema_domain_error::SchemaDomainError;

/// Database and schema names, which are interpolated unquoted into DDL.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SqlIdentifier(String);

impl SqlIdentifier {
    pub fn new(value: String) -> Result<Self, SchemaDomainError> {
        let trimmed = value.trim();
        let regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex");

        if !regex.is_match(trimmed) {
            return Err(SchemaDomainError::InvalidIdentifier(value));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
