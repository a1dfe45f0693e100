//! Error handling module for the matching engine.
//!
//! Every rejected operation is reported through [`AppError`]; state is never mutated
//! when an error is returned.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Missing or inconsistent input
    Validation(String),
    /// Referenced listing or profile does not exist
    NotFound(String),
    /// Invalid environment configuration
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation("x".into()).error_code(),
            codes::VALIDATION_ERROR
        );
        assert_eq!(AppError::NotFound("x".into()).error_code(), codes::NOT_FOUND);
        assert_eq!(AppError::Config("x".into()).error_code(), codes::CONFIG_ERROR);
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = AppError::Validation("Title is required".to_string());
        assert_eq!(err.to_string(), "VALIDATION_ERROR: Title is required");
    }
}
