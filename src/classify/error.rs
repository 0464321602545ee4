use thiserror::Error;

/// Everything that can stop a classification from producing a report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("missing API key")]
    MissingApiKey,

    #[error("missing email content")]
    MissingEmail,

    #[error("a classification is already in progress")]
    AlreadyPending,

    /// Connection, TLS or timeout failure before a response arrived
    #[error("request to completion service failed: {0}")]
    Transport(String),

    /// Error status or malformed payload from the service
    #[error("{0}")]
    Remote(String),
}

impl ClassifyError {
    /// True for failures detected locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::MissingEmail | Self::AlreadyPending
        )
    }
}

impl From<reqwest::Error> for ClassifyError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors may embed the request URL but never headers, so the
        // bearer token cannot leak through here
        if e.is_decode() {
            Self::Remote(format!("malformed response: {e}"))
        } else {
            Self::Transport(e.to_string())
        }
    }
}
