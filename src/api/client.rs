use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{
    FetchError, HealthStatus, Summary, TransactionFilter, TransactionRecord, TransactionType,
};

/// The endpoints the dashboard reads from
///
/// Implemented by [`MomoApiClient`] over HTTP; tests swap in an in-memory fake.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// GET /transaction-types
    async fn list_transaction_types(&self) -> Result<Vec<TransactionType>, FetchError>;

    /// GET /transactions with the non-empty filter fields as query parameters
    async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>, FetchError>;

    /// GET /summary
    async fn summary(&self) -> Result<Summary, FetchError>;

    /// GET /health
    async fn health(&self) -> Result<HealthStatus, FetchError>;
}

/// HTTP client for the mobile-money transactions API
pub struct MomoApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl MomoApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000/api";

    /// Create a client against `base_url` (no trailing slash needed)
    ///
    /// The underlying client keeps a cookie jar so session cookies set by the
    /// API are sent back on every request.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .cookie_store(true)
            .default_headers(Self::create_headers())
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fixed JSON headers sent with every request
    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build the `/transactions` request without sending it
    pub fn transactions_request(
        &self,
        filter: &TransactionFilter,
    ) -> Result<reqwest::Request, FetchError> {
        let mut builder = self.http_client.get(self.endpoint("transactions"));
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        builder
            .build()
            .map_err(|e| FetchError::Network(format!("Invalid request: {}", e)))
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<T, FetchError> {
        debug!("GET {}", request.url());

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let request = self
            .http_client
            .get(self.endpoint(path))
            .build()
            .map_err(|e| FetchError::Network(format!("Invalid request: {}", e)))?;
        self.execute_json(request).await
    }
}

#[async_trait]
impl DashboardApi for MomoApiClient {
    async fn list_transaction_types(&self) -> Result<Vec<TransactionType>, FetchError> {
        self.get_json("transaction-types").await
    }

    async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>, FetchError> {
        let request = self.transactions_request(filter)?;
        self.execute_json(request).await
    }

    async fn summary(&self) -> Result<Summary, FetchError> {
        self.get_json("summary").await
    }

    async fn health(&self) -> Result<HealthStatus, FetchError> {
        self.get_json("health").await
    }
}
