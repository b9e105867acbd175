use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a connection in the upstream Airbyte instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ConnectionId {
    fn from(id: String) -> Self {
        ConnectionId(id)
    }
}

impl From<&str> for ConnectionId {
    fn from(id: &str) -> Self {
        ConnectionId(id.to_string())
    }
}

impl AsRef<str> for ConnectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Administrative state of a connection.
///
/// Unrecognized values decode as [`ConnectionStatus::Unknown`] so that new
/// upstream states never break a scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Active,
    Inactive,
    Deprecated,
    #[serde(other)]
    Unknown,
}

impl ConnectionStatus {
    /// Label text used for the `connection_status` metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Active => "active",
            ConnectionStatus::Inactive => "inactive",
            ConnectionStatus::Deprecated => "deprecated",
            ConnectionStatus::Unknown => "unknown",
        }
    }
}

/// A configured source-to-destination pipeline link.
///
/// Retrieved fresh on every scrape; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub connection_id: ConnectionId,
    pub name: String,
    pub status: ConnectionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_connection() {
        let json = r#"{"connectionId":"c-1","name":"orders","status":"active"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.connection_id, ConnectionId::from("c-1"));
        assert_eq!(conn.name, "orders");
        assert_eq!(conn.status, ConnectionStatus::Active);
    }

    #[test]
    fn unknown_status_is_lenient() {
        let json = r#"{"connectionId":"c-2","name":"events","status":"paused"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.status, ConnectionStatus::Unknown);
        assert_eq!(conn.status.as_str(), "unknown");
    }
}
