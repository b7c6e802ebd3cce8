use thiserror::Error;

use crate::types::InputMode;

/// Message used when the service rejects a request without a usable `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed";

/// Shown when the service cannot be reached or its reply cannot be read.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Could not reach the analysis service";

/// Shown when the request ran past the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "The analysis service did not respond in time";

/// Errors produced while submitting an analysis.
///
/// `EmptyInput`, `RequestFailed` and `TransportFailure` all end the current
/// submission and are shown to the user as a single error message; see
/// [`AnalysisError::user_message`]. None of them are retried.
///
/// `SubmissionInFlight` is the in-flight guard: it is returned when a new
/// submission is attempted before the previous one settled, and the view is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The active input was empty after trimming. No request was sent.
    #[error("{}", .mode.empty_input_message())]
    EmptyInput { mode: InputMode },

    /// The service answered with a non-success status.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Connection, timeout or decoding fault.
    #[error("Transport failure: {detail}")]
    TransportFailure { detail: String, timed_out: bool },

    /// Another submission has not settled yet.
    #[error("An analysis is already running")]
    SubmissionInFlight,
}

impl AnalysisError {
    pub fn transport(detail: impl ToString) -> Self {
        Self::TransportFailure {
            detail: detail.to_string(),
            timed_out: false,
        }
    }

    pub fn timeout(detail: impl ToString) -> Self {
        Self::TransportFailure {
            detail: detail.to_string(),
            timed_out: true,
        }
    }

    /// Text for the error view.
    ///
    /// Server-provided messages are passed through verbatim. Transport faults
    /// get a generic message; their detail only goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput { mode } => mode.empty_input_message().to_string(),
            Self::RequestFailed { message, .. } => message.clone(),
            Self::TransportFailure {
                timed_out: true, ..
            } => TIMEOUT_MESSAGE.to_string(),
            Self::TransportFailure { .. } => TRANSPORT_FAILURE_MESSAGE.to_string(),
            Self::SubmissionInFlight => self.to_string(),
        }
    }

    /// Whether the failure is routine user or server feedback, for log levels.
    ///
    /// `true` logs at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. } | Self::RequestFailed { .. } | Self::SubmissionInFlight
        )
    }
}

/// Result alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_messages_are_mode_specific() {
        let url = AnalysisError::EmptyInput {
            mode: InputMode::Url,
        };
        let text = AnalysisError::EmptyInput {
            mode: InputMode::Text,
        };
        assert_eq!(url.user_message(), "Please enter a URL");
        assert_eq!(text.user_message(), "Please enter some text");
        assert_eq!(url.to_string(), "Please enter a URL");
    }

    #[test]
    fn request_failed_passes_message_through() {
        let e = AnalysisError::RequestFailed {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(e.user_message(), "rate limited");
        assert!(e.is_expected());
    }

    #[test]
    fn transport_failure_hides_detail() {
        let e = AnalysisError::transport("connection refused (os error 111)");
        assert_eq!(e.user_message(), TRANSPORT_FAILURE_MESSAGE);
        assert!(e.to_string().contains("os error 111"));
        assert!(!e.is_expected());
    }

    #[test]
    fn timeout_has_its_own_message() {
        let e = AnalysisError::timeout("operation timed out");
        assert_eq!(e.user_message(), TIMEOUT_MESSAGE);
    }
}
