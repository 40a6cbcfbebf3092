use crate::statements::domain::model::enums::column_type::ColumnType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnDescriptor {
    name: String,
    column_type: ColumnType,
    is_primary: bool,
    not_null: bool,
}

impl ColumnDescriptor {
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        is_primary: bool,
        not_null: bool,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            is_primary,
            not_null,
        }
    }

    pub(crate) fn into_primary(self) -> Self {
        Self {
            is_primary: true,
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn not_null(&self) -> bool {
        self.not_null
    }

    /// Renders `name TYPE[ PRIMARY KEY][ NOT NULL]`, optionally followed by a comma.
    pub fn statement(&self, with_comma: bool) -> String {
        let mut fragment = format!("{} {}", self.name, self.column_type);

        if self.is_primary {
            fragment.push_str(" PRIMARY KEY");
        }

        if self.not_null {
            fragment.push_str(" NOT NULL");
        }

        if with_comma {
            fragment.push(',');
        }

        fragment
    }
}
