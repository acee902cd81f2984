use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use tabmap_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core tabmap value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads a cell by its storage class. SQLite columns are untyped, so the
    /// mapper converts the cell to the field type afterwards. TEXT that is not
    /// valid UTF-8 is an error.
    pub fn from_sql(row: &Row, index: usize) -> rusqlite::Result<Self> {
        let core_value = match row.get_ref(index)? {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(value) => CoreValue::F64(value),
            ValueRef::Text(value) => CoreValue::String(
                std::str::from_utf8(value)
                    .map_err(rusqlite::Error::Utf8Error)?
                    .to_owned(),
            ),
            ValueRef::Blob(value) => CoreValue::Bytes(value.to_vec()),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use CoreValue::*;

        match &self.0 {
            Bool(v) => integer(i64::from(*v)),
            I8(v) => integer(i64::from(*v)),
            I16(v) => integer(i64::from(*v)),
            I32(v) => integer(i64::from(*v)),
            I64(v) => integer(*v),
            U8(v) => integer(i64::from(*v)),
            U16(v) => integer(i64::from(*v)),
            U32(v) => integer(i64::from(*v)),
            U64(v) => match i64::try_from(*v) {
                Ok(v) => integer(v),
                Err(err) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
            },
            F32(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(f64::from(*v)))),
            F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.hyphenated().to_string(),
            ))),
            #[cfg(feature = "chrono")]
            DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_rfc3339()))),
            #[cfg(feature = "chrono")]
            NaiveDateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
            ))),
            #[cfg(feature = "chrono")]
            NaiveDate(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format("%Y-%m-%d").to_string(),
            ))),
            Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            // Date variants exist when `tabmap-core/chrono` is enabled without
            // this crate's `chrono` feature
            #[allow(unreachable_patterns)]
            value => Err(rusqlite::Error::ToSqlConversionFailure(
                format!("unsupported value: {value:?}").into(),
            )),
        }
    }
}

fn integer(value: i64) -> rusqlite::Result<ToSqlOutput<'static>> {
    Ok(ToSqlOutput::Owned(SqlValue::Integer(value)))
}
