//! Maps recordset rows onto models.
//!
//! Column names are aliases of the form `Segment/Segment/Leaf`: every segment
//! but the last names a nested model field, the last names the scalar field
//! that receives the cell. Aliases are resolved once per recordset, before any
//! row is touched, so a bad alias fails even when there are no rows.

use crate::{Field, Model, Result};

use tabmap_core::stmt::{Recordset, ValueRecord};

/// Resolved field path for every column of a recordset, in column order.
struct Plan<'a> {
    columns: Vec<(&'a str, Vec<usize>)>,
}

impl<'a> Plan<'a> {
    fn build<T: Model>(recordset: &'a Recordset) -> Result<Self> {
        let schema = T::schema();
        let columns = recordset
            .columns()
            .iter()
            .map(|alias| Ok((alias.as_str(), schema.resolve(alias)?)))
            .collect::<Result<_>>()?;

        Ok(Self { columns })
    }

    fn map<T: Model>(&self, row: &ValueRecord) -> Result<T> {
        let mut item = T::default();

        for ((alias, path), value) in self.columns.iter().zip(row) {
            Field::assign(&mut item, path, value.clone())
                .map_err(|err| err.in_column(alias))?;
        }

        Ok(item)
    }
}

/// Map every row of `recordset` to a new `T`, preserving row order.
///
/// Fails without partial results on the first unresolvable alias or
/// unconvertible cell.
pub fn map_rows<T: Model>(recordset: &Recordset) -> Result<Vec<T>> {
    let plan = Plan::build::<T>(recordset)?;
    recordset.iter().map(|row| plan.map::<T>(row)).collect()
}

/// Map the row at `index`, or `None` when there is no such row.
pub fn map_row<T: Model>(recordset: &Recordset, index: usize) -> Result<Option<T>> {
    let plan = Plan::build::<T>(recordset)?;
    recordset
        .rows()
        .get(index)
        .map(|row| plan.map::<T>(row))
        .transpose()
}

/// Convert the first column of the first row to `V`.
///
/// An empty recordset yields `V::default()`; use `Option<V>` to tell an
/// empty or null result apart from a default value.
pub fn map_scalar<V: Field + Default>(recordset: &Recordset) -> Result<V> {
    let mut scalar = V::default();

    if let Some(value) = recordset.first_value() {
        scalar
            .assign(&[], value.clone())
            .map_err(|err| err.in_column(&recordset.columns()[0]))?;
    }

    Ok(scalar)
}
