use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use sqlx::{
    Column, Connection, Decode, PgPool, Postgres, Row, Type, TypeInfo,
    postgres::{PgArguments, PgRow},
    query::Query,
};
use uuid::Uuid;

use crate::{
    schema::{
        domain::model::enums::schema_domain_error::SchemaDomainError,
        infrastructure::persistence::repositories::{
            postgres::untyped_null::UntypedNull,
            statement_executor_repository::StatementExecutorRepository,
        },
    },
    statements::domain::model::value_objects::sql_param::{SqlParam, params_as_json},
};

const DUPLICATE_DATABASE: &str = "42P04";
const DUPLICATE_SCHEMA: &str = "42P06";
const DUPLICATE_TABLE: &str = "42P07";
const DUPLICATE_OBJECT: &str = "42710";

pub struct SqlxStatementExecutorRepositoryImpl {
    pool: PgPool,
    log_statements: bool,
}

impl SqlxStatementExecutorRepositoryImpl {
    pub fn new(pool: PgPool, log_statements: bool) -> Self {
        Self {
            pool,
            log_statements,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn trace(&self, statement: &str, params: &[SqlParam]) {
        if self.log_statements {
            tracing::debug!(statement, params = %params_as_json(params), "executing statement");
        }
    }

    fn bind_params<'q>(
        mut query: Query<'q, Postgres, PgArguments>,
        params: &'q [SqlParam],
    ) -> Query<'q, Postgres, PgArguments> {
        for param in params {
            query = match param {
                SqlParam::Null => query.bind(UntypedNull),
                SqlParam::Bool(value) => query.bind(*value),
                SqlParam::Int(value) => query.bind(*value),
                SqlParam::BigInt(value) => query.bind(*value),
                SqlParam::Double(value) => query.bind(*value),
                SqlParam::Text(value) => query.bind(value.as_str()),
                SqlParam::Bytes(value) => query.bind(value.as_slice()),
                SqlParam::Timestamp(value) => query.bind(*value),
                SqlParam::Uuid(value) => query.bind(*value),
                SqlParam::Json(value) => query.bind(value),
            };
        }
        query
    }

    pub fn map_error(error: sqlx::Error) -> SchemaDomainError {
        match &error {
            sqlx::Error::Database(database_error) => {
                let duplicate_code = matches!(
                    database_error.code().as_deref(),
                    Some(DUPLICATE_DATABASE | DUPLICATE_SCHEMA | DUPLICATE_TABLE | DUPLICATE_OBJECT)
                );

                if duplicate_code || database_error.message().contains("already exists") {
                    SchemaDomainError::AlreadyExists(database_error.message().to_string())
                } else {
                    SchemaDomainError::StatementFailed(error.to_string())
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => SchemaDomainError::ConnectionError(error.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. } => {
                SchemaDomainError::DecodeError(error.to_string())
            }
            sqlx::Error::RowNotFound => SchemaDomainError::RowNotFound,
            _ => SchemaDomainError::StatementFailed(error.to_string()),
        }
    }

    fn decode_i64(row: &PgRow) -> Result<Option<i64>, SchemaDomainError> {
        match row.try_get::<Option<i64>, _>(0) {
            Ok(value) => Ok(value),
            Err(_) => row
                .try_get::<Option<i32>, _>(0)
                .map(|value| value.map(i64::from))
                .map_err(|e| SchemaDomainError::DecodeError(e.to_string())),
        }
    }

    fn decode_column<'r, T>(row: &'r PgRow, index: usize) -> Result<Option<T>, SchemaDomainError>
    where
        T: Decode<'r, Postgres> + Type<Postgres>,
    {
        row.try_get::<Option<T>, _>(index)
            .map_err(|e| SchemaDomainError::DecodeError(e.to_string()))
    }

    fn column_to_json(
        row: &PgRow,
        index: usize,
        type_name: &str,
    ) -> Result<Value, SchemaDomainError> {
        let value = match type_name {
            "BOOL" => Self::decode_column::<bool>(row, index)?.map(Value::from),
            "INT2" => Self::decode_column::<i16>(row, index)?.map(Value::from),
            "INT4" => Self::decode_column::<i32>(row, index)?.map(Value::from),
            "INT8" => Self::decode_column::<i64>(row, index)?.map(Value::from),
            "FLOAT4" => Self::decode_column::<f32>(row, index)?.map(Value::from),
            "FLOAT8" => Self::decode_column::<f64>(row, index)?.map(Value::from),
            "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => {
                Self::decode_column::<String>(row, index)?.map(Value::from)
            }
            "BYTEA" => Self::decode_column::<Vec<u8>>(row, index)?.map(|bytes| {
                let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
                Value::from(format!("\\x{hex}"))
            }),
            "UUID" => Self::decode_column::<Uuid>(row, index)?.map(|v| Value::from(v.to_string())),
            "JSON" | "JSONB" => Self::decode_column::<Value>(row, index)?,
            "TIMESTAMPTZ" => Self::decode_column::<DateTime<Utc>>(row, index)?
                .map(|v| Value::from(v.to_rfc3339())),
            "TIMESTAMP" => Self::decode_column::<NaiveDateTime>(row, index)?
                .map(|v| Value::from(v.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
            "DATE" => Self::decode_column::<NaiveDate>(row, index)?
                .map(|v| Value::from(v.to_string())),
            other => {
                return Err(SchemaDomainError::DecodeError(format!(
                    "unsupported column type {other}"
                )));
            }
        };

        Ok(value.unwrap_or(Value::Null))
    }

    fn row_to_json(row: &PgRow) -> Result<Value, SchemaDomainError> {
        let mut object = Map::new();
        for (index, column) in row.columns().iter().enumerate() {
            let value = Self::column_to_json(row, index, column.type_info().name())?;
            object.insert(column.name().to_string(), value);
        }

        Ok(Value::Object(object))
    }
}

#[async_trait]
impl StatementExecutorRepository for SqlxStatementExecutorRepositoryImpl {
    async fn execute(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<u64, SchemaDomainError> {
        self.trace(statement, params);

        let result = Self::bind_params(sqlx::query(statement), params)
            .execute(&self.pool)
            .await
            .map_err(Self::map_error)?;

        Ok(result.rows_affected())
    }

    async fn fetch_scalar_i64(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Option<i64>, SchemaDomainError> {
        self.trace(statement, params);

        let row = Self::bind_params(sqlx::query(statement), params)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_error)?
            .ok_or(SchemaDomainError::RowNotFound)?;

        Self::decode_i64(&row)
    }

    async fn fetch_json_rows(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Vec<Value>, SchemaDomainError> {
        self.trace(statement, params);

        let rows = Self::bind_params(sqlx::query(statement), params)
            .fetch_all(&self.pool)
            .await
            .map_err(Self::map_error)?;

        rows.iter().map(Self::row_to_json).collect()
    }

    async fn ping(&self) -> Result<(), SchemaDomainError> {
        let mut connection = self
            .pool
            .acquire()
            .await
            .map_err(|e| SchemaDomainError::ConnectionError(e.to_string()))?;

        connection
            .ping()
            .await
            .map_err(|e| SchemaDomainError::ConnectionError(e.to_string()))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
