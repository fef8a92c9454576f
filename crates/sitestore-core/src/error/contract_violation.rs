use super::Error;

/// Error when an operation is invoked with arguments that break its contract
/// (non-positive key, unknown table, bad ordering column, ...). These never
/// reach the store.
#[derive(Debug)]
pub(super) struct ContractViolationError {
    message: Box<str>,
}

impl std::error::Error for ContractViolationError {}

impl core::fmt::Display for ContractViolationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "contract violation: {}", self.message)
    }
}

impl Error {
    /// Creates a contract violation error.
    pub fn contract_violation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ContractViolation(ContractViolationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a contract violation.
    pub fn is_contract_violation(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::ContractViolation(_)))
    }
}
