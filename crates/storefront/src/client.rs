//! HTTP client for the catalog backend.
//!
//! One request per call: no retry, no timeout policy, no caching. Failures are
//! returned to the caller as-is; views decide how to degrade.

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use stylehub_catalog::ProductId;

use crate::config::StorefrontConfig;
use crate::types::{
    CategoriesResponse, ErrorPayload, MessageResponse, ProductQuery, ProductResponse,
    ProductsResponse, SubscribeRequest,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, body read or JSON decode failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("API error ({status}): {}", .payload.error.as_deref().unwrap_or("no details"))]
    Api { status: u16, payload: ErrorPayload },
    /// The configured base URL cannot carry a request path.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Error text supplied by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { payload, .. } => payload.error.as_deref(),
            ClientError::Transport(_) | ClientError::InvalidUrl(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidUrl(_) => None,
        }
    }
}

/// Operations the storefront needs from the backend.
///
/// Futures are not `Send`: in the browser they run on the page's event loop.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// `GET /products`, optionally filtered.
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductsResponse, ClientError>;

    /// `GET /categories`.
    async fn list_categories(&self) -> Result<CategoriesResponse, ClientError>;

    /// `GET /products/{id}`.
    async fn get_product(&self, id: &ProductId) -> Result<ProductResponse, ClientError>;

    /// `POST /subscribe`.
    async fn subscribe(&self, email: &str) -> Result<MessageResponse, ClientError>;

    /// `POST /unsubscribe`.
    async fn unsubscribe(&self, email: &str) -> Result<MessageResponse, ClientError>;
}

/// `reqwest`-backed client bound to one base URL.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    config: StorefrontConfig,
}

impl StorefrontClient {
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(StorefrontConfig::from_env())
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// `{base}/products/{id}` with the id escaped as a single path segment.
    pub(crate) fn product_url(&self, id: &ProductId) -> Result<reqwest::Url, ClientError> {
        let base = self.config.endpoint("/products");
        let mut url =
            reqwest::Url::parse(&base).map_err(|e| ClientError::InvalidUrl(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(base.clone()))?
            .push(id.as_str());
        Ok(url)
    }

    async fn post_email(&self, path: &str, email: &str) -> Result<MessageResponse, ClientError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST");

        let body = SubscribeRequest {
            email: email.to_string(),
        };
        let resp = self.http.post(&url).json(&body).send().await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        // Non-JSON failure bodies still surface the status.
        let payload = resp.json::<ErrorPayload>().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            error = payload.error.as_deref().unwrap_or(""),
            "backend returned an error"
        );
        return Err(ClientError::Api {
            status: status.as_u16(),
            payload,
        });
    }

    Ok(resp.json::<T>().await?)
}

#[async_trait(?Send)]
impl StorefrontApi for StorefrontClient {
    #[tracing::instrument(level = "debug", skip(self, query))]
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductsResponse, ClientError> {
        let url = self.config.endpoint("/products");
        tracing::debug!(%url, category = ?query.category, featured = ?query.featured, "GET");

        let resp = self.http.get(&url).query(query).send().await?;
        decode(resp).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_categories(&self) -> Result<CategoriesResponse, ClientError> {
        let url = self.config.endpoint("/categories");
        tracing::debug!(%url, "GET");

        let resp = self.http.get(&url).send().await?;
        decode(resp).await
    }

    #[tracing::instrument(level = "debug", skip(self, id), fields(id = %id))]
    async fn get_product(&self, id: &ProductId) -> Result<ProductResponse, ClientError> {
        let url = self.product_url(id)?;
        tracing::debug!(%url, "GET");

        let resp = self.http.get(url).send().await?;
        decode(resp).await
    }

    #[tracing::instrument(level = "debug", skip(self, email))]
    async fn subscribe(&self, email: &str) -> Result<MessageResponse, ClientError> {
        self.post_email("/subscribe", email).await
    }

    #[tracing::instrument(level = "debug", skip(self, email))]
    async fn unsubscribe(&self, email: &str) -> Result<MessageResponse, ClientError> {
        self.post_email("/unsubscribe", email).await
    }
}
