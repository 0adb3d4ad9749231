//! HTTP client for the CrossFit Games leaderboard API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{LeaderboardQuery, Query},
    types::LeaderboardResponse,
    user_agent::get_user_agent,
    Error,
};

/// HTTP client for the CrossFit Games leaderboard API.
///
/// Each request builds a fresh `reqwest::Client` with a browser user agent
/// and a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://c3po.crossfit.com`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production leaderboard API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://c3po.crossfit.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        tracing::debug!("GET {}", url);
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    /// Fetches one page of the leaderboard described by `query`.
    pub async fn get_leaderboard(
        &self,
        query: &LeaderboardQuery,
    ) -> Result<LeaderboardResponse, Error> {
        if query.common.page < 1 {
            return Err(Error::InvalidQuery(format!(
                "page must be 1 or greater, got {}",
                query.common.page
            )));
        }
        self.get::<LeaderboardResponse, LeaderboardQuery>(&query.path(), query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let client = Client::with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }
}
