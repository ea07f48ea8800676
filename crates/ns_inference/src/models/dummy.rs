use std::fmt;
use ns_core::{CompletionRequest, LanguageModel, Result};

/// Offline stand-in for a real model. Echoes any URLs found in the prompt one
/// per line, otherwise the first 20 words of the prompt's largest block.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LanguageModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let urls: Vec<&str> = request.prompt
            .split_whitespace()
            .filter(|word| word.starts_with("http"))
            .collect();
        if !urls.is_empty() {
            return Ok(urls.join("\n"));
        }

        let block = request.prompt
            .split("\n\n")
            .max_by_key(|block| block.len())
            .unwrap_or_default();
        let words: Vec<&str> = block.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}
