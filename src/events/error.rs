//! Event Vocabulary Error Types

use thiserror::Error;

/// Result type for event vocabulary operations
pub type EventResult<T> = Result<T, EventError>;

/// Errors raised while interpreting event codes from external input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Name does not match any event code
    #[error("Unknown event code: '{0}'")]
    UnknownCode(String),

    /// Numeric value outside the event code range
    #[error("Unknown event code discriminant: {0}")]
    UnknownDiscriminant(u8),
}

impl EventError {
    /// Create an unknown code error
    pub fn unknown_code(name: impl Into<String>) -> Self {
        Self::UnknownCode(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_error_messages() {
        let error = EventError::unknown_code("Bogus");
        assert_eq!(error.to_string(), "Unknown event code: 'Bogus'");

        let error = EventError::UnknownDiscriminant(42);
        assert_eq!(error.to_string(), "Unknown event code discriminant: 42");
    }
}
