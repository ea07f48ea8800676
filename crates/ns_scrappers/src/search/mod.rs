use std::sync::Arc;
use tracing::{error, info};
use ns_core::{SearchResult, WebSearcher};

pub mod tavily;

pub use tavily::TavilySearcher;

pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Search entry point used by the pipeline. Never fails: provider errors are
/// logged and reported as no results.
#[derive(Clone)]
pub struct WebSearchClient {
    searcher: Arc<dyn WebSearcher>,
    max_results: usize,
}

impl WebSearchClient {
    pub fn new(searcher: Arc<dyn WebSearcher>) -> Self {
        Self {
            searcher,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        match self.searcher.search(query, self.max_results).await {
            Ok(results) => {
                info!("🔍 Found {} results for '{}'", results.len(), query);
                results
            }
            Err(e) => {
                error!("❌ Search error: {}", e);
                Vec::new()
            }
        }
    }
}
