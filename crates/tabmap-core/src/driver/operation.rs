use crate::stmt::Statement;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Execute a statement. Queries produce a recordset, everything else an
    /// affected-row count.
    Statement(Statement),

    /// Transaction control
    Transaction(Transaction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Start,
    Commit,
    Rollback,
}

impl Operation {
    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }
}

impl From<Statement> for Operation {
    fn from(value: Statement) -> Self {
        Self::Statement(value)
    }
}

impl From<Transaction> for Operation {
    fn from(value: Transaction) -> Self {
        Self::Transaction(value)
    }
}
