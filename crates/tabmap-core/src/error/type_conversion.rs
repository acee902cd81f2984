use super::{Error, ErrorKind};
use crate::stmt::{Type, Value};

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    column: Option<Box<str>>,
    from: Type,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if let Some(column) = &self.column {
            write!(f, "column `{}`: ", column)?;
        }
        write!(f, "cannot convert {:?} to {}", self.from, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// This is used when a value cannot be converted to the expected type.
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::from(ErrorKind::TypeConversion(TypeConversionError {
            column: None,
            from: value.infer_ty(),
            to_type,
        }))
    }

    /// Attaches the column alias to a type conversion error.
    ///
    /// Errors of any other kind, and conversion errors that already name a
    /// column, are returned unchanged.
    pub fn in_column(self, alias: &str) -> Error {
        match self.kind() {
            ErrorKind::TypeConversion(err) if err.column.is_none() => {
                Error::from(ErrorKind::TypeConversion(TypeConversionError {
                    column: Some(alias.into()),
                    from: err.from.clone(),
                    to_type: err.to_type,
                }))
            }
            _ => self,
        }
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), ErrorKind::TypeConversion(_))
    }

    /// The column alias a type conversion error occurred in, if known.
    pub fn conversion_column(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::TypeConversion(err) => err.column.as_deref(),
            _ => None,
        }
    }

    /// The runtime type of the value that failed to convert.
    pub fn conversion_source(&self) -> Option<&Type> {
        match self.kind() {
            ErrorKind::TypeConversion(err) => Some(&err.from),
            _ => None,
        }
    }

    /// The name of the type the value was being converted to.
    pub fn conversion_target(&self) -> Option<&'static str> {
        match self.kind() {
            ErrorKind::TypeConversion(err) => Some(err.to_type),
            _ => None,
        }
    }
}
