use ns_core::config::DEFAULT_MODEL_NAME;

pub mod filter;
pub mod models;
pub mod prompts;
pub mod refiner;
pub mod summarizer;

#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: String,
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            base_url: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::filter::RelevanceFilter;
    pub use super::models::{create_model, ModelKind};
    pub use super::refiner::QueryRefiner;
    pub use super::summarizer::ArticleSummarizer;
    pub use ns_core::{CompletionRequest, Error, LanguageModel, Result};
}

pub use filter::RelevanceFilter;
pub use models::{create_model, ModelKind};
pub use refiner::QueryRefiner;
pub use summarizer::ArticleSummarizer;
