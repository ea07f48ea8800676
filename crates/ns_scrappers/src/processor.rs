use std::sync::Arc;
use futures::stream::{self, StreamExt};
use ns_core::{ArticleExtractor, Error, PipelineResult, ProcessedArticle, Result};
use ns_inference::ArticleSummarizer;
use crate::extractor::FetchFailure;
use crate::logging::Logger;
use crate::quality;

/// Fetches, vets and summarizes articles. A failing URL is recorded and the
/// batch moves on.
pub struct ArticleProcessor {
    extractor: Arc<dyn ArticleExtractor>,
    summarizer: ArticleSummarizer,
    concurrency: usize,
}

impl ArticleProcessor {
    pub fn new(extractor: Arc<dyn ArticleExtractor>, summarizer: ArticleSummarizer) -> Self {
        Self {
            extractor,
            summarizer,
            concurrency: 1,
        }
    }

    /// Number of URLs in flight at once. Results keep input order either way.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn process_all(&self, urls: &[String]) -> PipelineResult {
        let total = urls.len();
        let tasks: Vec<_> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| async move {
                let logger = Logger::new().with_prefix(format!("[{}/{}]", i + 1, total));
                logger.info(&format!("🔄 Processing: {}", url));
                (url, self.process_logged(url, &logger).await)
            })
            .collect();
        let outcomes: Vec<(&String, Result<ProcessedArticle>)> = stream::iter(tasks)
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut result = PipelineResult::default();
        for (url, outcome) in outcomes {
            match outcome {
                Ok(article) => result.processed.push(article),
                Err(_) => result.failed.push(url.clone()),
            }
        }
        result
    }

    pub async fn process_one(&self, url: &str) -> Result<ProcessedArticle> {
        self.process_logged(url, &Logger::new()).await
    }

    async fn process_logged(&self, url: &str, logger: &Logger) -> Result<ProcessedArticle> {
        let article = match self.extractor.extract(url).await {
            Ok(article) => article,
            Err(e) => {
                match FetchFailure::classify(&e) {
                    FetchFailure::Other => logger.error(&format!("❌ {} from {}: {}", FetchFailure::Other, url, e)),
                    failure => logger.warn(&format!("⚠️  {}: {}", failure, url)),
                }
                return Err(e);
            }
        };

        if let Err(rejection) = quality::check(&article.title, &article.text) {
            logger.warn(&format!("⚠️  Article at {} rejected: {}", url, rejection));
            return Err(Error::Scraping(format!("{} rejected: {}", url, rejection)));
        }

        let summary = match self.summarizer.summarize(article.text.trim()).await {
            Ok(summary) => summary,
            Err(e) => {
                logger.error(&format!("❌ Error summarizing article: {}", e));
                return Err(e);
            }
        };

        let title = article.title.trim().to_string();
        logger.info(&format!("✅ Successfully processed: {}", title));
        Ok(ProcessedArticle {
            url: url.to_string(),
            title,
            summary,
        })
    }
}
