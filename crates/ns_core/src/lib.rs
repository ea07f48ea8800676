pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod storage;
pub mod types;

pub use config::{Credentials, PipelineConfig};
pub use error::{Error, Result};
pub use models::{CompletionRequest, LanguageModel};
pub use sources::{ArticleExtractor, WebSearcher};
pub use storage::ReportStorage;
pub use types::{ExtractedArticle, PipelineResult, ProcessedArticle, SearchResult};
