use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColumnType {
    Serial,
    Text,
    Boolean,
    BigInt,
    Int,
    ByteA,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serial => "SERIAL",
            Self::Text => "TEXT",
            Self::Boolean => "BOOLEAN",
            Self::BigInt => "BIGINT",
            Self::Int => "INT",
            Self::ByteA => "BYTEA",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
