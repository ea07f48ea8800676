use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use ns_core::{Error, Result, SearchResult, WebSearcher};

pub const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Web search backed by the Tavily Search API.
pub struct TavilySearcher {
    api_key: String,
    endpoint: String,
    client: Client,
}

impl TavilySearcher {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.unwrap_or_default(),
            endpoint: TAVILY_SEARCH_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl std::fmt::Debug for TavilySearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TavilySearcher")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl WebSearcher for TavilySearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        let request = TavilySearchRequest {
            api_key: &self.api_key,
            query,
            max_results,
        };

        let response = self.client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Search(format!("Tavily API returned {}: {}", status, body)));
        }

        let response: TavilySearchResponse = response.json().await?;
        Ok(response.results)
    }
}
