use std::sync::Arc;
use ns_core::{CompletionRequest, Error, LanguageModel, Result};
use crate::prompts;

pub const MAX_ARTICLE_CHARS: usize = 4000;

/// Produces the short per-article summaries.
#[derive(Debug, Clone)]
pub struct ArticleSummarizer {
    model: Arc<dyn LanguageModel>,
}

impl ArticleSummarizer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        let request = CompletionRequest::new(prompts::summarize_article(&truncate(text, MAX_ARTICLE_CHARS)))
            .with_temperature(0.7)
            .with_max_tokens(300);

        let summary = self.model.complete(&request).await?;
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(Error::Inference("Model returned an empty summary".to_string()));
        }
        Ok(summary.to_string())
    }
}

/// Cuts `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
