use thiserror::Error;

/// Failures inside the fetch boundary. Never surfaced to tool callers.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(u16),

    #[error("failed to decode JSON body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// Classifies a reqwest error raised while sending or reading a response
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err)
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err)
        }
    }
}
