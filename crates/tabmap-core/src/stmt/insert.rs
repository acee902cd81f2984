use super::{Statement, ValueRecord};

/// `INSERT INTO table (columns) VALUES (values)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table; may be schema-qualified (`dbo.Contractors`)
    pub table: String,

    /// Column names, in the order values are bound
    pub columns: Vec<String>,

    /// One value per column
    pub values: ValueRecord,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
