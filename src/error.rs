//! Error Types
//!
//! Validation failures (shown as blocking alerts) and endpoint failures
//! (shown in the status banner or as a disabled favorites option).

use thiserror::Error;

/// Fallback when the server rejects a submission without a message
pub const FAILED_TO_SAVE: &str = "Failed to save activity";

/// Fallback for transport and decode failures
pub const GENERIC_SAVE_ERROR: &str = "An error occurred while saving the activity";

/// Required-field check failures. The display text is the alert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please fill in the date and time fields.")]
    MissingDateTime,
}

/// Failures talking to the activity endpoints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("browser window unavailable")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("server responded {status}: {}", .message.as_deref().unwrap_or(FAILED_TO_SAVE))]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// Text surfaced to the user for a failed submission
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } if !message.is_empty() => message.clone(),
            ApiError::Server { .. } => FAILED_TO_SAVE.to_string(),
            _ => GENERIC_SAVE_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_alert_text() {
        assert_eq!(ValidationError::MissingRequired.to_string(), "Please fill in all required fields.");
        assert_eq!(ValidationError::MissingDateTime.to_string(), "Please fill in the date and time fields.");
    }

    #[test]
    fn test_server_message_is_surfaced() {
        let err = ApiError::Server { status: 400, message: Some("Category not found".into()) };
        assert_eq!(err.user_message(), "Category not found");
    }

    #[test]
    fn test_missing_or_empty_server_message_falls_back() {
        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(err.user_message(), FAILED_TO_SAVE);
        let err = ApiError::Server { status: 500, message: Some(String::new()) };
        assert_eq!(err.user_message(), FAILED_TO_SAVE);
    }

    #[test]
    fn test_transport_errors_use_generic_message() {
        assert_eq!(ApiError::Network("Failed to fetch".into()).user_message(), GENERIC_SAVE_ERROR);
        assert_eq!(ApiError::Decode("bad json".into()).user_message(), GENERIC_SAVE_ERROR);
    }
}
