use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::action::LobbyAction;

/// Path of the multiplexed lobby handler on the server.
const LOBBY_PATH: &str = "client_lobby";

#[derive(Debug, Error)]
pub enum LobbyError {
    /// The request never produced a usable response (connect failure,
    /// timeout, body read error).
    #[error("lobby request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("lobby returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Thin HTTP client for the lobby endpoint.
#[derive(Debug, Clone)]
pub struct LobbyClient {
    http: reqwest::Client,
    base_url: String,
}

impl LobbyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Like [`LobbyClient::new`], but with a caller-configured
    /// `reqwest::Client`.
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs one `GET client_lobby?user=<user>&action=<action>` exchange
    /// and returns the raw response body.
    ///
    /// The username is passed through as-is (the server decides what an
    /// unknown user means); the query serializer percent-encodes it.
    pub async fn fetch(&self, user: &str, action: LobbyAction) -> Result<String, LobbyError> {
        let url = format!("{}/{}", self.base_url, LOBBY_PATH);
        debug!(user, action = action.as_str(), "querying lobby");

        let response = self
            .http
            .get(&url)
            .query(&[("user", user), ("action", action.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LobbyError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes_from_base_url() {
        let client = LobbyClient::new("http://localhost:8080/ecare///");
        assert_eq!(client.base_url(), "http://localhost:8080/ecare");
    }
}
