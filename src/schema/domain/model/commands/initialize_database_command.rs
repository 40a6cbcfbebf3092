use std::sync::Arc;

use crate::{
    schema::domain::model::{
        enums::schema_domain_error::SchemaDomainError, value_objects::sql_identifier::SqlIdentifier,
    },
    statements::domain::services::sql_table::SqlTable,
};

#[derive(Clone)]
pub struct InitializeDatabaseCommand {
    database_name: SqlIdentifier,
    schema: SqlIdentifier,
    tables: Vec<Arc<dyn SqlTable>>,
    force_recreate: bool,
}

impl InitializeDatabaseCommand {
    pub fn new(
        database_name: String,
        schema: String,
        tables: Vec<Arc<dyn SqlTable>>,
        force_recreate: bool,
    ) -> Result<Self, SchemaDomainError> {
        Ok(Self {
            database_name: SqlIdentifier::new(database_name)?,
            schema: SqlIdentifier::new(schema)?,
            tables,
            force_recreate,
        })
    }

    pub fn database_name(&self) -> &SqlIdentifier {
        &self.database_name
    }

    pub fn schema(&self) -> &SqlIdentifier {
        &self.schema
    }

    pub fn tables(&self) -> &[Arc<dyn SqlTable>] {
        &self.tables
    }

    pub fn force_recreate(&self) -> bool {
        self.force_recreate
    }
}
