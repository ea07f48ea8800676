use async_trait::async_trait;
use crate::types::{ExtractedArticle, SearchResult};
use crate::Result;

#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Search the web for `query`, asking for at most `max_results` hits
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>>;
}

#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    /// Download `url` and pull out its title and body text
    async fn extract(&self, url: &str) -> Result<ExtractedArticle>;
}
