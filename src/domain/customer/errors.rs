use super::repository::RepositoryError;

// ============================================================================
// Customer Creation Errors
// ============================================================================

/// Which name bound was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameViolation {
    #[error("Name must have at least 3 letters")]
    TooShort,

    #[error("Name must have at most 50 letters")]
    TooLong,
}

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("{0}")]
    InvalidName(NameViolation),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid value for age: {0}")]
    InvalidAgeValue(f64),

    #[error("Customer must be at least 18 years old to register (got {0})")]
    AgeTooLow(f64),

    #[error("Customer must be at most 110 years old to register (got {0})")]
    AgeTooHigh(f64),

    #[error("Invalid phone: must be a mobile number with area code, e.g. 32988888888 (got {0:?})")]
    InvalidPhone(Option<u64>),

    #[error("Could not save to the database")]
    PersistenceFailure,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl CustomerError {
    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            CustomerError::InvalidName(_) => "invalid_name",
            CustomerError::InvalidEmail(_) => "invalid_email",
            CustomerError::InvalidAgeValue(_) => "invalid_age_value",
            CustomerError::AgeTooLow(_) => "age_too_low",
            CustomerError::AgeTooHigh(_) => "age_too_high",
            CustomerError::InvalidPhone(_) => "invalid_phone",
            CustomerError::PersistenceFailure => "persistence_failure",
            CustomerError::Repository(_) => "repository_error",
        }
    }

    /// True when the request itself was rejected, before any persistence
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            CustomerError::PersistenceFailure | CustomerError::Repository(_)
        )
    }
}
