use thiserror::Error;

use abe_client::ClientError;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("upstream api error: {0}")]
    Client(#[from] ClientError),

    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}
