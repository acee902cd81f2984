use crate::{schema::Schema, Field, Result};

use tabmap_core::stmt::Value;

/// A struct the mapper can populate from recordset rows and read back into
/// statements. Implemented with `#[derive(Model)]`.
///
/// The derive generates an accessor table indexed by field position, so
/// mapping never needs runtime reflection.
pub trait Model: Field + Default + Sized {
    /// The model's accessor table
    fn schema() -> &'static Schema;

    /// Assign `value` to the property at `path` below the field at index
    /// `field`.
    fn assign_field(&mut self, field: usize, path: &[usize], value: Value) -> Result<()>;

    /// Read the property at `path` below the field at index `field`.
    fn read_field(&self, field: usize, path: &[usize]) -> Result<Value>;
}
