mod client;
pub use client::AirbyteClient;
pub use client::DEFAULT_JOB_WINDOW;

mod config;
pub use config::ClientConfig;

mod error;
pub use error::ClientError;
