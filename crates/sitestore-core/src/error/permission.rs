use super::Error;

/// Error when the caller lacks the role or the tenant ownership an operation
/// requires.
#[derive(Debug)]
pub(super) struct PermissionError {
    message: Box<str>,
}

impl std::error::Error for PermissionError {}

impl core::fmt::Display for PermissionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "permission denied: {}", self.message)
    }
}

impl Error {
    /// Creates a permission error.
    pub fn permission(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Permission(PermissionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a permission error.
    pub fn is_permission(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::Permission(_)))
    }
}
