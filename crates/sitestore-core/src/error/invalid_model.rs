use super::Error;

/// Error when a field model (or table definition) cannot be parsed.
#[derive(Debug)]
pub(super) struct InvalidModelError {
    message: Box<str>,
}

impl std::error::Error for InvalidModelError {}

impl core::fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid field model: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid model error.
    pub fn invalid_model(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModel(InvalidModelError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid model error.
    pub fn is_invalid_model(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidModel(_)))
    }
}
