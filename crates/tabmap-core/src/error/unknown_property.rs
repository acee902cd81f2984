use super::Error;

/// Error when a column alias or an included property name does not resolve to
/// a field of the target model.
#[derive(Debug)]
pub(super) struct UnknownProperty {
    name: Box<str>,
    model: &'static str,
}

impl std::error::Error for UnknownProperty {}

impl core::fmt::Display for UnknownProperty {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown property `{}` on `{}`", self.name, self.model)
    }
}

impl Error {
    /// Creates an unknown property error.
    ///
    /// `name` is the offending column alias or property name as written by the
    /// caller; `model` is the name of the type it was resolved against.
    pub fn unknown_property(name: impl Into<String>, model: &'static str) -> Error {
        Error::from(super::ErrorKind::UnknownProperty(UnknownProperty {
            name: name.into().into(),
            model,
        }))
    }

    /// Returns `true` if this error is an unknown property error.
    pub fn is_unknown_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownProperty(_))
    }
}
