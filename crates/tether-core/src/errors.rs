//! Collaborator error types.
//!
//! The core itself has no fatal-error class: both passes are total. The one
//! fallible call is the host's navigation sink, whose failures are carried
//! by [`SinkError`], logged by the driver, and never retried.

/// Failure reported by a navigation sink.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    /// The host environment rejected or could not apply the navigation.
    #[error("Navigation failed: {message}")]
    Navigation {
        /// Host-supplied description of the failure
        message: String,
    },
}

impl SinkError {
    /// Create a navigation failure with the given message.
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation {
            message: message.into(),
        }
    }
}
