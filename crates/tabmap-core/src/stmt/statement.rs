use super::{Delete, Filter, Insert, Query, Update};

/// A statement to execute against a tabular store.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Query(Query),
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// The table a generated statement targets. `None` for raw queries.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::Insert(stmt) => Some(&stmt.table),
            Self::Update(stmt) => Some(&stmt.table),
            Self::Delete(stmt) => Some(&stmt.table),
            Self::Query(_) => None,
        }
    }

    /// The identity predicate of an UPDATE or DELETE.
    pub fn filter(&self) -> Option<&Filter> {
        match self {
            Self::Update(stmt) => Some(&stmt.filter),
            Self::Delete(stmt) => Some(&stmt.filter),
            _ => None,
        }
    }
}
