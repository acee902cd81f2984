use super::Error;

/// Error when an UPDATE or DELETE is required for a model that has no
/// identity field.
#[derive(Debug)]
pub(super) struct MissingIdentity {
    model: &'static str,
}

impl std::error::Error for MissingIdentity {}

impl core::fmt::Display for MissingIdentity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "`{}` has no identity field; mark one with #[key] or name it `Id`",
            self.model
        )
    }
}

impl Error {
    /// Creates a missing identity error.
    pub fn missing_identity(model: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingIdentity(MissingIdentity { model }))
    }

    /// Returns `true` if this error is a missing identity error.
    pub fn is_missing_identity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentity(_))
    }
}
