use super::{Statement, Value};

/// Caller-written SQL with positional parameters.
///
/// The text is passed to the driver verbatim, so placeholders must use the
/// driver's native syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Query {
    pub fn new(sql: impl Into<String>, params: impl IntoIterator<Item = Value>) -> Self {
        Self {
            sql: sql.into(),
            params: params.into_iter().collect(),
        }
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}

impl From<&str> for Query {
    fn from(sql: &str) -> Self {
        Self::new(sql, [])
    }
}

impl From<String> for Query {
    fn from(sql: String) -> Self {
        Self::new(sql, [])
    }
}
