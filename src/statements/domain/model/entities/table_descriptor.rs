use crate::statements::domain::{
    model::{
        entities::column_descriptor::ColumnDescriptor, enums::column_type::ColumnType,
    },
    services::sql_table::SqlTable,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableDescriptor {
    table_name: String,
    columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_column_descriptor(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_column(
        self,
        name: impl Into<String>,
        column_type: ColumnType,
        not_null: bool,
    ) -> Self {
        self.with_column_descriptor(ColumnDescriptor::new(name, column_type, false, not_null))
    }

    pub fn with_serial_column(self, name: impl Into<String>) -> Self {
        self.with_column(name, ColumnType::Serial, false)
    }

    pub fn with_text_column(self, name: impl Into<String>, not_null: bool) -> Self {
        self.with_column(name, ColumnType::Text, not_null)
    }

    pub fn with_boolean_column(self, name: impl Into<String>, not_null: bool) -> Self {
        self.with_column(name, ColumnType::Boolean, not_null)
    }

    pub fn with_big_int_column(self, name: impl Into<String>, not_null: bool) -> Self {
        self.with_column(name, ColumnType::BigInt, not_null)
    }

    pub fn with_int_column(self, name: impl Into<String>, not_null: bool) -> Self {
        self.with_column(name, ColumnType::Int, not_null)
    }

    pub fn with_byte_a_column(self, name: impl Into<String>, not_null: bool) -> Self {
        self.with_column(name, ColumnType::ByteA, not_null)
    }

    /// Marks the most recently added column as the primary key.
    pub fn as_primary(mut self) -> Self {
        if let Some(last) = self.columns.pop() {
            self.columns.push(last.into_primary());
        }
        self
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }
}

impl SqlTable for TableDescriptor {
    fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.name().to_string())
            .collect()
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key_column(&self) -> &str {
        self.columns
            .iter()
            .find(|column| column.is_primary())
            .or_else(|| self.columns.first())
            .map(|column| column.name())
            .unwrap_or_default()
    }

    fn create_statement(&self) -> String {
        let last_position = self.columns.len().saturating_sub(1);
        let body = self
            .columns
            .iter()
            .enumerate()
            .map(|(position, column)| column.statement(position != last_position))
            .collect::<String>();

        format!("CREATE TABLE {}({});", self.table_name, body)
    }
}
