mod http;
pub use http::HttpApi;

pub use axum;
