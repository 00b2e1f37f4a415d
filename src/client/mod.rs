//! HTTP client for the Agora API
//!
//! `ApiClient` carries the base-URL plumbing, the per-request form login,
//! the per-operation expected-status policy and the JSON decode helper.
//! The per-resource lifecycle controllers live in the submodules and are
//! all implemented on `ApiClient`.

use std::time::Duration;

use reqwest::{redirect, Client, StatusCode};
use tracing::debug;

use crate::auth::AuthContext;
use crate::config::HarnessConfig;
use crate::endpoints;
use crate::error::{HarnessError, Result};
use crate::oracle::SearchOracle;

mod comments;
mod posts;
mod requests;
mod skills;
mod users;

/// Client for the service under test
///
/// # Example
///
/// ```rust,no_run
/// use agora_harness::{ApiClient, HarnessConfig, Role};
///
/// # async fn example() -> agora_harness::Result<()> {
/// let api = ApiClient::new(HarnessConfig::default());
///
/// let author = api.register_user(Role::User).await?;
/// let post = api.create_post(&author, true).await?;
/// let reader = api.register_user(Role::User).await?;
/// let comment = api.create_comment(&reader, &post).await?;
/// assert!(comment.is_some());
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    config: HarnessConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client
    pub fn new(config: HarnessConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to build HTTP client");

        Self { config, http }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The Search Oracle over this client: the second, index-backed read
    /// path used for cross-validation
    pub fn oracle(&self) -> SearchOracle<'_> {
        SearchOracle::new(self)
    }

    /// Anonymous client for unauthenticated calls
    pub(crate) fn anonymous(&self) -> &Client {
        &self.http
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_root(), path)
    }

    pub(crate) fn base_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Authenticate an actor for a single call
    ///
    /// Builds a fresh cookie-jar client and posts the actor's form
    /// credentials to the login endpoint. The returned client carries the
    /// resulting session for exactly one harness operation; nothing is
    /// persisted across calls, so every operation re-authenticates.
    pub(crate) async fn login(&self, ctx: &AuthContext) -> Result<Client> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .redirect(redirect::Policy::none())
            .build()?;

        let response = client
            .post(self.base_url(endpoints::AUTHENTICATE))
            .form(&ctx.form_params())
            .send()
            .await?;

        let status = response.status();
        // Form login answers with a redirect on success; a plain success
        // status is accepted as well.
        if !status.is_success() && !status.is_redirection() {
            let message = response.text().await.unwrap_or_default();
            return Err(HarnessError::Server {
                status: status.as_u16(),
                message,
            });
        }

        debug!(username = ctx.username(), "authenticated");
        Ok(client)
    }

    /// Enforce a per-operation expected status
    ///
    /// Most operations expect a plain 200; the admin status endpoint
    /// expects a redirect-class 302, which is its own distinct success
    /// code, not the default one.
    pub(crate) fn expect_status(
        &self,
        operation: &'static str,
        expected: StatusCode,
        response: &reqwest::Response,
    ) -> Result<()> {
        let actual = response.status();
        if actual == expected {
            Ok(())
        } else {
            Err(HarnessError::UnexpectedStatus {
                operation,
                expected: expected.as_u16(),
                actual: actual.as_u16(),
            })
        }
    }

    /// Decode a JSON response, mapping 404 to `NotFound` and any other
    /// non-success status to `Server`
    pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(HarnessError::NotFound(operation.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(HarnessError::Server { status, message });
        }

        let body = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_compose_base_and_api_root() {
        let api = ApiClient::new(HarnessConfig::default());
        assert_eq!(api.api_url("/posts"), "http://localhost:8080/api/posts");
        assert_eq!(
            api.base_url(endpoints::AUTHENTICATE),
            "http://localhost:8080/authenticate"
        );
    }
}
