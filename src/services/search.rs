use async_trait::async_trait;
use url::Url;

use crate::{error::AppError, models::trip::SearchResult};

#[async_trait]
pub trait TripSearchClient: Send + Sync {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<SearchResult>, AppError>;
}

/// Gateway to the remote trip-search api. One request per call, no retries,
/// no caching; the transport's default timeout applies.
#[derive(Debug, Clone)]
pub struct HttpSearchGateway {
    client: reqwest::Client,
    api_url: Url,
    api_key: String,
}

impl HttpSearchGateway {
    pub fn new(api_url: Url, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl TripSearchClient for HttpSearchGateway {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<SearchResult>, AppError> {
        let response = self
            .client
            .get(self.api_url.clone())
            .header("x-api-key", &self.api_key)
            .query(&[("origin", origin), ("destination", destination)])
            .send()
            .await
            .map_err(|err| AppError::Upstream(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("search api answered {status}")));
        }

        response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("malformed response body: {err}")))
    }
}
