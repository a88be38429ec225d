//! JSON-over-HTTP implementation of [`ItemApi`]

use std::time::Duration;

use async_trait::async_trait;
use fintrack_core::{CoreError, CoreResult, FetchResult, ItemApi};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::http::HttpUtils;

/// One client for every endpoint of the store.
///
/// `GET`/`POST` go to `{base}/{endpoint}`, `PUT`/`DELETE` to `{base}/{endpoint}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpItemApi {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpItemApi {
    pub fn new(config: &ApiConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn url(&self, endpoint: &str, id: Option<i64>) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        match id {
            Some(id) => format!("{}/{endpoint}/{id}", self.base_url),
            None => format!("{}/{endpoint}", self.base_url),
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn exchange<R: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &Method,
        url: &str,
    ) -> CoreResult<FetchResult<R>> {
        let (status, body) = HttpUtils::execute_request(builder, method.as_str(), url).await?;
        let result = HttpUtils::into_fetch_result(status, &body)?;
        if !result.successful {
            log::warn!("{method} {url} refused ({status}): {}", result.response_message);
        }
        Ok(result)
    }
}

#[async_trait]
impl<T> ItemApi<T> for HttpItemApi
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn query(&self, endpoint: &str) -> CoreResult<FetchResult<Vec<T>>> {
        let url = self.url(endpoint, None);
        self.exchange(self.request(Method::GET, &url), &Method::GET, &url)
            .await
    }

    async fn create(&self, endpoint: &str, body: &T) -> CoreResult<FetchResult<T>> {
        let url = self.url(endpoint, None);
        let builder = self.request(Method::POST, &url).json(body);
        self.exchange(builder, &Method::POST, &url).await
    }

    async fn update(&self, endpoint: &str, id: i64, body: &T) -> CoreResult<FetchResult<T>> {
        let url = self.url(endpoint, Some(id));
        let builder = self.request(Method::PUT, &url).json(body);
        self.exchange(builder, &Method::PUT, &url).await
    }

    async fn remove(&self, endpoint: &str, id: i64) -> CoreResult<FetchResult<T>> {
        let url = self.url(endpoint, Some(id));
        self.exchange(self.request(Method::DELETE, &url), &Method::DELETE, &url)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpItemApi {
        HttpItemApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn urls_join_cleanly() {
        let api = api("http://localhost:8080/api/");
        assert_eq!(api.url("budgets", None), "http://localhost:8080/api/budgets");
        assert_eq!(
            api.url("/cash-flows", Some(12)),
            "http://localhost:8080/api/cash-flows/12"
        );
        assert_eq!(
            api.url("snapshots?startDate=2024-01-01&endDate=2024-01-31", None),
            "http://localhost:8080/api/snapshots?startDate=2024-01-01&endDate=2024-01-31"
        );
    }
}
