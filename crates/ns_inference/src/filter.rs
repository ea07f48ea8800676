use std::sync::Arc;
use tracing::{debug, error, info};
use ns_core::{CompletionRequest, LanguageModel, SearchResult};
use crate::prompts;

/// URL fragments of listing pages that never hold an article body.
const NON_ARTICLE_PATTERNS: &[&str] = &["/topics/", "/category/", "/tag/", "/search", "/latest"];

/// Section front pages that are only an index when the path ends there.
const NON_ARTICLE_SUFFIXES: &[&str] = &["/politics/"];

const MIN_TITLE_CHARS: usize = 11;
const MAX_CANDIDATES: usize = 7;
pub const MAX_SELECTED: usize = 5;

/// Narrows search results down to a handful of article URLs picked by the model.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    model: Arc<dyn LanguageModel>,
}

impl RelevanceFilter {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Returns at most five URLs, each starting with `http`. Errors yield an
    /// empty list.
    pub async fn filter(&self, results: &[SearchResult]) -> Vec<String> {
        let candidates = prefilter(results);
        let candidates = &candidates[..candidates.len().min(MAX_CANDIDATES)];
        debug!("Asking the model to pick among {} candidates", candidates.len());

        let request = CompletionRequest::new(prompts::select_articles(candidates))
            .with_temperature(0.7)
            .with_max_tokens(200);

        match self.model.complete(&request).await {
            Ok(reply) => {
                let urls = parse_urls(&reply);
                info!("🤖 Model selected {} URLs", urls.len());
                urls
            }
            Err(e) => {
                error!("❌ Error selecting relevant articles: {}", e);
                Vec::new()
            }
        }
    }
}

pub fn is_listing_page(url: &str) -> bool {
    let url = url.to_lowercase();
    NON_ARTICLE_PATTERNS.iter().any(|p| url.contains(p))
        || NON_ARTICLE_SUFFIXES.iter().any(|s| url.ends_with(s))
}

/// Drops index pages and results without a meaningful title. Never empties a
/// non-empty input: when everything would be dropped the input is kept.
pub fn prefilter(results: &[SearchResult]) -> Vec<SearchResult> {
    let kept: Vec<SearchResult> = results
        .iter()
        .filter(|r| !is_listing_page(&r.url) && r.title.chars().count() >= MIN_TITLE_CHARS)
        .cloned()
        .collect();

    if kept.is_empty() {
        results.to_vec()
    } else {
        kept
    }
}

/// Keeps the reply lines that look like URLs, in order and without
/// de-duplication.
pub fn parse_urls(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .take(MAX_SELECTED)
        .map(str::to_string)
        .collect()
}
