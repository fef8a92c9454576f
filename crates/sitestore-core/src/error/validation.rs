use super::Error;

/// A single field that failed coercion or an attribute constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Error when one or more fields of an input fail validation.
#[derive(Debug)]
pub(super) struct ValidationError {
    errors: Vec<FieldError>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("validation failed")?;

        let mut s = ": ";
        for error in &self.errors {
            write!(f, "{s}{error}")?;
            s = "; ";
        }
        Ok(())
    }
}

impl Error {
    /// Creates a validation error from the collected field errors.
    pub fn validation(errors: Vec<FieldError>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError { errors }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        self.validation_errors().is_some()
    }

    /// Returns the individual field errors if this is a validation error.
    pub fn validation_errors(&self) -> Option<&[FieldError]> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::Validation(validation) => Some(&validation.errors[..]),
            _ => None,
        })
    }
}
