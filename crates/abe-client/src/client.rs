use abe_model::{Connection, ConnectionId, Job};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// How many recent jobs to fetch per connection.
pub const DEFAULT_JOB_WINDOW: usize = 10;

const TOKEN_PATH: &str = "/api/public/v1/applications/token";
const CONNECTIONS_PATH: &str = "/api/public/v1/connections";
const JOBS_PATH: &str = "/api/public/v1/jobs";

/// Client for the Airbyte public API.
///
/// Every operation performs exactly one outbound call; there is no caching,
/// no retrying, and no timeout. Errors propagate to the caller and abort
/// the scrape that triggered them.
pub struct AirbyteClient {
    http: reqwest::Client,
    config: ClientConfig,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<Vec<T>>,
}

impl AirbyteClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Exchange the configured client credentials for a bearer token.
    pub async fn acquire_token(&self) -> Result<String, ClientError> {
        debug!(
            "requesting access token from {}{}",
            self.config.base_url, TOKEN_PATH
        );
        let request = TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            grant_type: "client_credentials",
        };
        let response = self
            .http
            .post(format!("{}{}", self.config.base_url, TOKEN_PATH))
            .json(&request)
            .send()
            .await?;
        let body = read_body(response, TOKEN_PATH).await?;

        let token: TokenResponse = decode(&body)?;
        match token.access_token {
            Some(token) if !token.is_empty() => {
                debug!("received access token");
                Ok(token)
            }
            _ => Err(ClientError::MissingToken),
        }
    }

    /// List every connection visible to the credential.
    pub async fn list_connections(&self, token: &str) -> Result<Vec<Connection>, ClientError> {
        debug!("listing connections");
        let response = self
            .http
            .get(format!("{}{}", self.config.base_url, CONNECTIONS_PATH))
            .bearer_auth(token)
            .send()
            .await?;
        let body = read_body(response, CONNECTIONS_PATH).await?;

        let envelope: Envelope<Connection> = decode(&body)?;
        let connections = envelope.data.unwrap_or_default();
        debug!("found {} connections", connections.len());
        Ok(connections)
    }

    /// Fetch up to `limit` recent jobs for a connection, newest first.
    pub async fn recent_jobs(
        &self,
        token: &str,
        connection_id: &ConnectionId,
        limit: usize,
    ) -> Result<Vec<Job>, ClientError> {
        debug!("fetching jobs for connection {}", connection_id);
        let response = self
            .http
            .get(format!("{}{}", self.config.base_url, JOBS_PATH))
            .query(&[
                ("connectionId", connection_id.as_str()),
                ("orderBy", "createdAt|DESC"),
                ("limit", &limit.to_string()),
            ])
            .bearer_auth(token)
            .send()
            .await?;
        let body = read_body(response, JOBS_PATH).await?;

        let envelope: Envelope<Job> = decode(&body)?;
        let jobs = envelope.data.unwrap_or_default();
        if jobs.is_empty() {
            debug!("no jobs found for connection {}", connection_id);
        }
        Ok(jobs)
    }
}

async fn read_body(response: reqwest::Response, path: &'static str) -> Result<String, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            path,
        });
    }
    Ok(response.text().await?)
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| {
        ClientError::InvalidResponse(format!("failed to parse response: {}, body: {}", e, body))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{}", addr)
    }

    fn client(base_url: String) -> AirbyteClient {
        AirbyteClient::new(ClientConfig {
            base_url,
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        })
    }

    #[tokio::test]
    async fn acquires_token() {
        let router = Router::new().route(
            TOKEN_PATH,
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["grant_type"], "client_credentials");
                assert_eq!(body["client_id"], "id");
                Json(json!({"access_token": "tok-1"}))
            }),
        );
        let base = serve(router).await;

        let token = client(base).acquire_token().await.unwrap();
        assert_eq!(token, "tok-1");
    }

    #[tokio::test]
    async fn missing_token_is_an_error() {
        let router = Router::new().route(TOKEN_PATH, post(|| async { Json(json!({})) }));
        let base = serve(router).await;

        let err = client(base).acquire_token().await.unwrap_err();
        assert!(matches!(err, ClientError::MissingToken));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let router = Router::new().route(
            TOKEN_PATH,
            post(|| async { (axum::http::StatusCode::UNAUTHORIZED, "nope") }),
        );
        let base = serve(router).await;

        let err = client(base).acquire_token().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn absent_data_lists_no_connections() {
        let router = Router::new().route(CONNECTIONS_PATH, get(|| async { Json(json!({})) }));
        let base = serve(router).await;

        let connections = client(base).list_connections("tok").await.unwrap();
        assert!(connections.is_empty());
    }

    #[tokio::test]
    async fn fetches_jobs_with_window_query() {
        let router = Router::new().route(
            JOBS_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params["connectionId"], "c-1");
                assert_eq!(params["orderBy"], "createdAt|DESC");
                assert_eq!(params["limit"], "10");
                Json(json!({"data": [{"status": "succeeded"}]}))
            }),
        );
        let base = serve(router).await;

        let jobs = client(base)
            .recent_jobs("tok", &ConnectionId::from("c-1"), DEFAULT_JOB_WINDOW)
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert!(jobs[0].status.is_succeeded());
    }
}
