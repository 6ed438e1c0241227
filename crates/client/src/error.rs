//! Client-side error model for inter-service calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connect/timeout/decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

impl From<ClientError> for merx_core::Error {
    fn from(err: ClientError) -> Self {
        merx_core::Error::Upstream(err.to_string())
    }
}
