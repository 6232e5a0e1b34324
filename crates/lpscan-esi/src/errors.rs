use thiserror::Error;

/// Request failures against the ESI API. Transport problems, non-2xx
/// statuses and undecodable bodies all land here; callers that absorb
/// failures treat them uniformly.
#[derive(Error, Debug)]
pub enum EsiError {
    #[error("HTTP {status} from {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Core domain error: {0}")]
    Core(#[from] lpscan_core::CoreError),
}

pub type Result<T> = std::result::Result<T, EsiError>;
