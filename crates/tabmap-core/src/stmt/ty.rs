/// The runtime type of a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Binary blob
    Bytes,

    /// 32-bit floating point number
    F32,

    /// 64-bit floating point number
    F64,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// String type
    String,

    /// UUID
    Uuid,

    /// Instant in time, UTC
    #[cfg(feature = "chrono")]
    DateTime,

    /// Date and time without a timezone
    #[cfg(feature = "chrono")]
    NaiveDateTime,

    /// Calendar date
    #[cfg(feature = "chrono")]
    NaiveDate,

    /// The type of `Value::Null`. Null can be assigned to any type.
    Null,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }
}
