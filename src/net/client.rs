//! Shared API client: base-URL joining, JSON encode/decode, status mapping,
//! and authorizer application for every outgoing request.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::authorizer;
use crate::config::ApiConfig;
use crate::session::SessionContext;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    #[error("api request failed: {0}")]
    Request(String),
    #[error("api returned {status}: {body}")]
    Response { status: u16, body: String },
    #[error("failed to decode api response: {0}")]
    Decode(String),
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl ApiClient {
    /// # Errors
    /// Returns [`ApiError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig, session: Arc<SessionContext>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), session })
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Builder for `path` with the stored token attached when present.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        authorizer::attach_token(builder, self.session.token().as_deref())
    }

    /// Send a request without interpreting the response status. Callers that
    /// need to branch on status (auth flows) use this directly.
    ///
    /// # Errors
    /// Returns [`ApiError::Request`] on transport failure.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(%method, path, "api request");
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder.send().await.map_err(|e| ApiError::Request(e.to_string()))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Response { status: status.as_u16(), body });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// # Errors
    /// Transport failure, non-2xx status, or an undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    /// # Errors
    /// Transport failure, non-2xx status, or an undecodable body.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// # Errors
    /// Transport failure, non-2xx status, or an undecodable body.
    pub async fn put_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// POST with an empty JSON object body, discarding any response payload.
    ///
    /// # Errors
    /// Transport failure or a non-2xx status.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({});
        let response = self.send(Method::POST, path, Some(&body)).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Response { status: status.as_u16(), body });
        }
        Ok(())
    }

    /// # Errors
    /// Transport failure or a non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, path, None::<&()>).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Response { status: status.as_u16(), body });
        }
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
