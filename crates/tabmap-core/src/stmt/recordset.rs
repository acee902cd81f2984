use super::{Value, ValueRecord};
use crate::{Error, Result};

/// The result of a query: named columns and rows of dynamically typed cells.
///
/// Every row holds exactly one value per column. Column names are the
/// aliases written in the query and are looked up case-insensitively.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recordset {
    columns: Vec<String>,
    rows: Vec<ValueRecord>,
}

impl Recordset {
    /// Create an empty recordset with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    /// Create a recordset from columns and rows, checking the width of every
    /// row.
    pub fn from_rows<I, S>(columns: I, rows: Vec<ValueRecord>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut recordset = Self::new(columns);
        recordset.rows.reserve(rows.len());

        for row in rows {
            recordset.push(row)?;
        }

        Ok(recordset)
    }

    /// Append a row.
    pub fn push(&mut self, row: impl Into<ValueRecord>) -> Result<()> {
        let row = row.into();

        if row.len() != self.columns.len() {
            return Err(Error::invalid_recordset(format!(
                "row {} has {} values, expected {}",
                self.rows.len(),
                row.len(),
                self.columns.len()
            )));
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ValueRecord] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first column whose name matches, ignoring ASCII case.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    /// The cell at `row` in the column named `column`.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|row| &row[index])
    }

    /// The first column of the first row, if any.
    pub fn first_value(&self) -> Option<&Value> {
        self.rows.first().and_then(|row| row.get(0))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValueRecord> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<ValueRecord> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a Recordset {
    type Item = &'a ValueRecord;
    type IntoIter = std::slice::Iter<'a, ValueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
