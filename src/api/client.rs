//! HTTP client for the user endpoint

use std::time::Duration;

use reqwest::Client;

use super::error::UserApiError;
use super::models::User;
use crate::config::Config;

/// Default base URL of the user endpoint
pub const DEFAULT_USER_API_URL: &str = "https://api.example.com/users";

/// User endpoint client
pub struct UserClient {
    /// HTTP client
    client: Client,
    /// Base URL; users live at `{base_url}/{id}`
    base_url: String,
}

impl UserClient {
    /// Request timeout
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, UserApiError> {
        let client = Client::builder().timeout(Self::TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Create a client for the configured endpoint
    pub fn from_config(config: &Config) -> Result<Self, UserApiError> {
        Self::new(config.user_api_url.clone())
    }

    /// URL for a user id
    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}/{}", self.base_url, user_id)
    }

    /// Fetch a user by id
    ///
    /// Failures are logged and then returned to the caller.
    pub async fn fetch_user(&self, user_id: &str) -> Result<User, UserApiError> {
        let result = self.request_user(user_id).await;
        if let Err(e) = &result {
            tracing::error!("Error fetching user {:?}: {}", user_id, e);
        }
        result
    }

    async fn request_user(&self, user_id: &str) -> Result<User, UserApiError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(UserApiError::EmptyId);
        }

        let response = self.client.get(self.user_url(user_id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UserApiError::Status { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        let user: User = serde_json::from_str(&body)?;
        Ok(user)
    }
}
