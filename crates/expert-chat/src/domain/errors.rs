//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Blank or whitespace-only user text, rejected before any request is made
    #[error("Input is empty")]
    EmptyInput,

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// Failures raised while looking up the persona or calling the provider.
    ///
    /// Presentation layers render all of these the same way.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::UnknownPersona(_)
                | Self::Authentication(_)
                | Self::RateLimited(_)
                | Self::ExternalService(_)
                | Self::MalformedResponse(_)
        )
    }
}

/// Reject blank input before it reaches the composer.
pub fn validate_user_text(text: &str) -> Result<&str, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::EmptyInput);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        assert!(matches!(validate_user_text(""), Err(DomainError::EmptyInput)));
        assert!(matches!(
            validate_user_text("  \n\t "),
            Err(DomainError::EmptyInput)
        ));
    }

    #[test]
    fn test_text_returned_untouched() {
        assert_eq!(validate_user_text("  hi  ").unwrap(), "  hi  ");
    }

    #[test]
    fn test_request_failure_category() {
        assert!(DomainError::UnknownPersona("C".into()).is_request_failure());
        assert!(DomainError::Authentication("bad key".into()).is_request_failure());
        assert!(DomainError::MalformedResponse("no choices".into()).is_request_failure());
        assert!(!DomainError::EmptyInput.is_request_failure());
        assert!(!DomainError::Config("LLM_TEMPERATURE".into()).is_request_failure());
    }
}
