use super::Error;

/// Error when a recordset is malformed, e.g. a row does not have one value
/// per column.
#[derive(Debug)]
pub(super) struct InvalidRecordset {
    message: Box<str>,
}

impl std::error::Error for InvalidRecordset {}

impl core::fmt::Display for InvalidRecordset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid recordset: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid recordset error.
    pub fn invalid_recordset(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecordset(InvalidRecordset {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid recordset error.
    pub fn is_invalid_recordset(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecordset(_))
    }
}
