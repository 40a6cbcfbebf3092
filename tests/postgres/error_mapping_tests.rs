use pg_orchestrator::schema::{
    domain::model::enums::schema_domain_error::SchemaDomainError,
    infrastructure::persistence::repositories::postgres::{
        sqlx_statement_executor_repository_impl::SqlxStatementExecutorRepositoryImpl,
        untyped_null::UntypedNull,
    },
};
use sqlx::{Postgres, Type, postgres::types::Oid};

use crate::support::database_error;

fn map(error: sqlx::Error) -> SchemaDomainError {
    SqlxStatementExecutorRepositoryImpl::map_error(error)
}

#[test]
fn duplicate_object_codes_map_to_already_exists() {
    for code in ["42P04", "42P06", "42P07", "42710"] {
        let mapped = map(database_error(Some(code), "duplicate object"));

        assert!(
            matches!(mapped, SchemaDomainError::AlreadyExists(ref message) if message == "duplicate object"),
            "{code} mapped to {mapped:?}"
        );
    }
}

#[test]
fn already_exists_message_without_code_maps_to_already_exists() {
    let mapped = map(database_error(None, "relation \"items\" already exists"));

    assert!(matches!(mapped, SchemaDomainError::AlreadyExists(_)));
}

#[test]
fn other_server_errors_map_to_statement_failed() {
    let mapped = map(database_error(
        Some("42804"),
        "column \"amount\" is of type bigint but expression is of type text",
    ));

    assert!(matches!(mapped, SchemaDomainError::StatementFailed(_)));
}

#[test]
fn transport_failures_map_to_connection_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");

    assert!(matches!(
        map(sqlx::Error::Io(io)),
        SchemaDomainError::ConnectionError(_)
    ));
    assert!(matches!(
        map(sqlx::Error::PoolTimedOut),
        SchemaDomainError::ConnectionError(_)
    ));
    assert!(matches!(
        map(sqlx::Error::PoolClosed),
        SchemaDomainError::ConnectionError(_)
    ));
}

#[test]
fn decode_and_missing_row_errors_keep_their_meaning() {
    assert!(matches!(
        map(sqlx::Error::ColumnIndexOutOfBounds { index: 3, len: 1 }),
        SchemaDomainError::DecodeError(_)
    ));
    assert!(matches!(
        map(sqlx::Error::RowNotFound),
        SchemaDomainError::RowNotFound
    ));
}

#[test]
fn null_parameters_leave_the_type_to_the_server() {
    assert_eq!(
        <UntypedNull as Type<Postgres>>::type_info().oid(),
        Some(Oid(0))
    );
}
