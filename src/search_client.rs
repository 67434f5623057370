use futures::future::try_join_all;
use serde_json::json;
use std::time::Duration;

use crate::config::Config;
use crate::data_models::{KeywordResults, ProviderResponse, SearchResult};
use crate::error::{Result, SearchError};

/// Thin client over the hosted search API. One `POST` per keyword.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    max_results: usize,
}

impl SearchClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        max_results: usize,
        timeout: Duration,
    ) -> Result<SearchClient> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(SearchClient {
            http,
            endpoint: endpoint.into(),
            api_key,
            max_results,
        })
    }

    pub fn from_config(config: &Config) -> Result<SearchClient> {
        Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.max_results,
            config.timeout,
        )
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SearchError::EmptyKeyword);
        }
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let res = self
            .http
            .post(&self.endpoint)
            .header("X-API-KEY", api_key)
            .json(&json!({ "q": keyword }))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("failed to read error body for {keyword:?}: {e}");
                    String::new()
                }
            };
            tracing::error!("search for {keyword:?} failed with status {status}: {body}");
            return Err(SearchError::Upstream { status, body });
        }

        let results = res
            .json::<ProviderResponse>()
            .await?
            .into_results(self.max_results);
        tracing::info!("search for {keyword:?} returned {} results", results.len());
        Ok(results)
    }

    /// Searches every keyword concurrently. Output keeps input order; the first
    /// failure fails the whole batch.
    pub async fn search_all<S>(&self, keywords: &[S]) -> Result<Vec<KeywordResults>>
    where
        S: AsRef<str>,
    {
        let searches = keywords.iter().map(|keyword| async move {
            let keyword = keyword.as_ref().trim();
            let results = self.search(keyword).await?;
            Ok::<_, SearchError>(KeywordResults {
                keyword: keyword.to_string(),
                results,
            })
        });
        try_join_all(searches).await
    }
}
