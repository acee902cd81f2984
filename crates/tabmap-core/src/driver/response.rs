use crate::{stmt::Recordset, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows returned by a query
    Recordset(Recordset),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn recordset(recordset: Recordset) -> Self {
        Self {
            rows: Rows::Recordset(recordset),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            Rows::Recordset(_) => bail!("expected an affected-row count, got a recordset"),
        }
    }

    pub fn into_recordset(self) -> Result<Recordset> {
        match self.rows {
            Rows::Recordset(recordset) => Ok(recordset),
            Rows::Count(_) => bail!("expected a recordset, got an affected-row count"),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_recordset(&self) -> bool {
        matches!(self, Self::Recordset(_))
    }
}
