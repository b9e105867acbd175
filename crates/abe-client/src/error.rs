use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}")]
    Status { status: u16, path: &'static str },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("token endpoint returned no usable token")]
    MissingToken,
}
