use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaDomainError {
    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("object already exists: {0}")]
    AlreadyExists(String),

    #[error("statement failed: {0}")]
    StatementFailed(String),

    #[error("failed to update {table}: expected exactly one affected row, got {affected}")]
    UpdateRowCountMismatch { table: String, affected: u64 },

    #[error("failed to decode result: {0}")]
    DecodeError(String),

    #[error("query returned no rows")]
    RowNotFound,

    #[error("{table} expects {expected} values, got {actual}")]
    ValueCountMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("{table} needs at least {required} columns for this statement, has {actual}")]
    TooFewColumns {
        table: String,
        required: usize,
        actual: usize,
    },

    #[error("no {0} provided")]
    MissingSetting(&'static str),

    #[error("identifier is invalid; use [A-Za-z_][A-Za-z0-9_]*: {0}")]
    InvalidIdentifier(String),
}
