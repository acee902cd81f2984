//! Turns row-state-tagged items into INSERT / UPDATE / DELETE statements.

use crate::{schema::Schema, Model, Result, RowState, Tracked};

use tabmap_core::{
    stmt::{Assignment, Delete, Filter, Insert, Statement, Update, ValueRecord},
    Error,
};

/// Build one statement per pending change, in item order.
///
/// `included` lists the properties written by INSERT and UPDATE, in column
/// order. Names resolve case-insensitively against top-level scalar fields
/// of `T`; the identity field is never written and only appears in the
/// `WHERE` predicate. Every name is checked, and the identity of every
/// `Modified` / `Deleted` item validated, before any statement is built.
pub fn build_change_set<T, S>(
    items: &[Tracked<T>],
    table: &str,
    included: &[S],
) -> Result<Vec<Statement>>
where
    T: Model,
    S: AsRef<str>,
{
    let schema = T::schema();
    let columns = included_fields(schema, included)?;
    check_identity(schema, items)?;

    let mut statements = vec![];

    for tracked in items {
        let item = &tracked.item;

        match tracked.state {
            RowState::Unchanged => {}
            RowState::Added => {
                let values = columns
                    .iter()
                    .map(|&index| item.read_field(index, &[]))
                    .collect::<Result<Vec<_>>>()?;

                statements.push(
                    Insert {
                        table: table.to_string(),
                        columns: column_names(schema, &columns),
                        values: ValueRecord::from_vec(values),
                    }
                    .into(),
                );
            }
            RowState::Modified => {
                if columns.is_empty() {
                    continue;
                }

                let assignments = columns
                    .iter()
                    .map(|&index| {
                        Ok(Assignment {
                            column: schema.field(index).name.to_string(),
                            value: item.read_field(index, &[])?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                statements.push(
                    Update {
                        table: table.to_string(),
                        assignments,
                        filter: identity_filter(schema, item)?,
                    }
                    .into(),
                );
            }
            RowState::Deleted => {
                statements.push(
                    Delete {
                        table: table.to_string(),
                        filter: identity_filter(schema, item)?,
                    }
                    .into(),
                );
            }
        }
    }

    Ok(statements)
}

/// Resolve included property names to field indices, dropping the identity
/// field and duplicates.
fn included_fields<S: AsRef<str>>(schema: &Schema, included: &[S]) -> Result<Vec<usize>> {
    let mut fields = vec![];

    for name in included {
        let name = name.as_ref();

        let Some(index) = schema.field_index(name) else {
            return Err(Error::unknown_property(name, schema.name));
        };

        if schema.field(index).ty.is_embedded() {
            return Err(Error::invalid_column_alias(
                name,
                schema.name,
                format!("`{name}` is a nested model, not a scalar property"),
            ));
        }

        if Some(index) != schema.identity && !fields.contains(&index) {
            fields.push(index);
        }
    }

    Ok(fields)
}

/// Items that are updated or deleted need a scalar identity field holding a
/// non-null value.
fn check_identity<T: Model>(schema: &Schema, items: &[Tracked<T>]) -> Result<()> {
    let mut pending = items
        .iter()
        .filter(|tracked| tracked.state.requires_identity())
        .peekable();

    if pending.peek().is_none() {
        return Ok(());
    }

    let Some(index) = schema.identity else {
        return Err(Error::missing_identity(schema.name));
    };

    let identity = schema.field(index);

    if identity.ty.is_embedded() {
        return Err(Error::invalid_identity(
            identity.name,
            schema.name,
            "a nested model cannot be an identity",
        ));
    }

    for tracked in pending {
        if tracked.item.read_field(index, &[])?.is_null() {
            return Err(Error::invalid_identity(
                identity.name,
                schema.name,
                "value is null",
            ));
        }
    }

    Ok(())
}

fn column_names(schema: &Schema, fields: &[usize]) -> Vec<String> {
    fields
        .iter()
        .map(|&index| schema.field(index).name.to_string())
        .collect()
}

fn identity_filter<T: Model>(schema: &Schema, item: &T) -> Result<Filter> {
    let identity = schema
        .identity
        .ok_or_else(|| Error::missing_identity(schema.name))?;

    Ok(Filter::eq(
        schema.field(identity).name,
        item.read_field(identity, &[])?,
    ))
}
