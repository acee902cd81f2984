use super::Error;

/// Error when a column alias resolves, but not to something assignable.
///
/// This occurs when:
/// - an alias contains an empty segment (`A//B`, `/A`, `A/`)
/// - an intermediate segment names a scalar field instead of a nested model
/// - the leaf segment names a nested model instead of a scalar field
#[derive(Debug)]
pub(super) struct InvalidColumnAlias {
    alias: Box<str>,
    model: &'static str,
    reason: Box<str>,
}

impl std::error::Error for InvalidColumnAlias {}

impl core::fmt::Display for InvalidColumnAlias {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid column alias `{}` for `{}`: {}",
            self.alias, self.model, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid column alias error.
    pub fn invalid_column_alias(
        alias: impl Into<String>,
        model: &'static str,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidColumnAlias(InvalidColumnAlias {
            alias: alias.into().into(),
            model,
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid column alias error.
    pub fn is_invalid_column_alias(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidColumnAlias(_))
    }
}
