pub mod extractor;
pub mod logging;
pub mod processor;
pub mod quality;
pub mod search;

pub use extractor::{FetchFailure, HtmlArticleExtractor};
pub use processor::ArticleProcessor;
pub use search::{TavilySearcher, WebSearchClient};

pub mod prelude {
    pub use super::extractor::HtmlArticleExtractor;
    pub use super::processor::ArticleProcessor;
    pub use super::search::{TavilySearcher, WebSearchClient};
    pub use ns_core::{ArticleExtractor, Error, PipelineResult, ProcessedArticle, Result, WebSearcher};
}
