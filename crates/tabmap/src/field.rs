use crate::{schema::FieldTy, Model, Result};

use tabmap_core::{
    err,
    stmt::{Type, Value},
    Error,
};

/// A value that can be stored in a [`Model`] field.
///
/// `path` addresses a property below this field: it is empty for scalars and
/// holds one field index per remaining alias segment for nested models.
pub trait Field {
    fn field_ty() -> FieldTy;

    /// Assign a cell to the property at `path`. `Null` resets the target to
    /// its default value.
    fn assign(&mut self, path: &[usize], value: Value) -> Result<()>;

    /// Read the property at `path` back as a cell.
    fn read(&self, path: &[usize]) -> Result<Value>;
}

macro_rules! impl_primitive_field {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Field for $ty {
                fn field_ty() -> FieldTy {
                    FieldTy::Primitive(Type::$variant)
                }

                fn assign(&mut self, path: &[usize], value: Value) -> Result<()> {
                    expect_leaf(path, Type::$variant)?;

                    *self = if value.is_null() {
                        <$ty>::default()
                    } else {
                        <$ty>::try_from(value)?
                    };

                    Ok(())
                }

                #[allow(clippy::clone_on_copy)]
                fn read(&self, path: &[usize]) -> Result<Value> {
                    expect_leaf(path, Type::$variant)?;
                    Ok(Value::from(self.clone()))
                }
            }
        )*
    };
}

impl_primitive_field! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    uuid::Uuid => Uuid,
}

#[cfg(feature = "chrono")]
impl_primitive_field! {
    chrono::DateTime<chrono::Utc> => DateTime,
    chrono::NaiveDateTime => NaiveDateTime,
    chrono::NaiveDate => NaiveDate,
}

impl<T: Field + Default> Field for Option<T> {
    fn field_ty() -> FieldTy {
        T::field_ty()
    }

    fn assign(&mut self, path: &[usize], value: Value) -> Result<()> {
        if value.is_null() {
            if path.is_empty() {
                *self = None;
                return Ok(());
            }

            // A null nested property does not bring an absent parent into
            // existence.
            if self.is_none() {
                return Ok(());
            }
        }

        self.get_or_insert_with(T::default).assign(path, value)
    }

    fn read(&self, path: &[usize]) -> Result<Value> {
        match self {
            Some(value) => value.read(path),
            None => Ok(Value::Null),
        }
    }
}

fn expect_leaf(path: &[usize], ty: Type) -> Result<()> {
    if path.is_empty() {
        Ok(())
    } else {
        Err(err!("{ty:?} is a scalar type and has no nested properties"))
    }
}

/// Assigns through a nested model: the first path element picks the field,
/// the rest is passed down.
pub fn assign_embedded<M: Model>(model: &mut M, path: &[usize], value: Value) -> Result<()> {
    let [field, rest @ ..] = path else {
        return Err(err!(
            "cannot assign a single value to nested model `{}`",
            M::schema().name
        ));
    };

    model.assign_field(*field, rest, value)
}

pub fn read_embedded<M: Model>(model: &M, path: &[usize]) -> Result<Value> {
    let [field, rest @ ..] = path else {
        return Err(err!(
            "cannot read nested model `{}` as a single value",
            M::schema().name
        ));
    };

    model.read_field(*field, rest)
}

pub fn no_such_field<M: Model>(field: usize) -> Error {
    err!("`{}` has no field at index {field}", M::schema().name)
}
