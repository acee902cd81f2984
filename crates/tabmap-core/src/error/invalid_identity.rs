use super::Error;

/// Error when a model has an identity field, but it cannot address a row.
///
/// This occurs when:
/// - the identity field is a nested model
/// - an item to update or delete holds a null identity value
#[derive(Debug)]
pub(super) struct InvalidIdentity {
    field: &'static str,
    model: &'static str,
    reason: Box<str>,
}

impl std::error::Error for InvalidIdentity {}

impl core::fmt::Display for InvalidIdentity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid identity `{}` on `{}`: {}",
            self.field, self.model, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid identity error.
    pub fn invalid_identity(
        field: &'static str,
        model: &'static str,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidIdentity(InvalidIdentity {
            field,
            model,
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid identity error.
    pub fn is_invalid_identity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentity(_))
    }
}
