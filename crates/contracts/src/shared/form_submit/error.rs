use thiserror::Error;

/// Failures of a single intercepted submission.
///
/// HTTP status codes are never errors here: a 404 or a 302 is a normal
/// [`InboundResponse`](super::InboundResponse) that simply does not navigate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form declares a method other than GET or POST.
    #[error("Unsupported form method: {0}")]
    UnsupportedMethod(String),

    /// The request could not be built or the fetch rejected.
    #[error("Network error: {0}")]
    Network(String),

    /// The browser refused the location change.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// A required element is missing or is not what the binding expects.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl SubmitError {
    /// True for errors raised before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::UnsupportedMethod(_))
    }
}
