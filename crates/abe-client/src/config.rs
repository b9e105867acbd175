/// Connection parameters for the upstream Airbyte public API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Airbyte instance, without a trailing slash.
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
}
