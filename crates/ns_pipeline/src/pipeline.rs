use std::sync::Arc;
use tracing::{error, info, warn};
use ns_core::{
    ArticleExtractor, Credentials, Error, LanguageModel, PipelineConfig, ReportStorage, Result,
    WebSearcher,
};
use ns_inference::{create_model, ArticleSummarizer, Config, ModelKind, QueryRefiner, RelevanceFilter};
use ns_report::ReportComposer;
use ns_scrappers::{ArticleProcessor, HtmlArticleExtractor, TavilySearcher, WebSearchClient};
use crate::outcome::RunOutcome;

/// Runs refine, search, filter, process and compose in that order, stopping
/// early with a short message when a stage comes back empty.
pub struct Pipeline {
    refiner: QueryRefiner,
    search: WebSearchClient,
    filter: RelevanceFilter,
    processor: ArticleProcessor,
    composer: ReportComposer,
    storage: Option<Arc<dyn ReportStorage>>,
}

impl Pipeline {
    /// Wires every stage around the given service handles. `storage` is only
    /// used when `config.save_reports` is set.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        searcher: Arc<dyn WebSearcher>,
        extractor: Arc<dyn ArticleExtractor>,
        storage: Arc<dyn ReportStorage>,
        config: &PipelineConfig,
    ) -> Self {
        Self {
            refiner: QueryRefiner::new(model.clone()),
            search: WebSearchClient::new(searcher).with_max_results(config.max_search_results),
            filter: RelevanceFilter::new(model.clone()),
            processor: ArticleProcessor::new(extractor, ArticleSummarizer::new(model.clone()))
                .with_concurrency(config.concurrency),
            composer: ReportComposer::new(model),
            storage: config.save_reports.then_some(storage),
        }
    }

    /// Builds the production services: the chosen model, Tavily search and
    /// the HTML extractor.
    pub fn connect(
        credentials: &Credentials,
        model_kind: ModelKind,
        storage: Arc<dyn ReportStorage>,
        config: &PipelineConfig,
    ) -> Result<Self> {
        let model = create_model(
            model_kind,
            Config {
                api_key: credentials.llm_api_key.clone(),
                model_name: config.model_name.clone(),
                base_url: None,
            },
        )?;
        let searcher = Arc::new(TavilySearcher::new(credentials.search_api_key.clone()));
        let extractor = Arc::new(HtmlArticleExtractor::new(config.fetch_timeout())?);

        Ok(Self::new(model, searcher, extractor, storage, config))
    }

    pub async fn run(&self, topic: &str) -> RunOutcome {
        match self.run_stages(topic).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("❌ AGENT ERROR: {}", e);
                RunOutcome::Failed(e.to_string())
            }
        }
    }

    async fn run_stages(&self, topic: &str) -> Result<RunOutcome> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::InvalidTopic("Topic is required".to_string()));
        }
        info!("🚀 Starting news summarization for: {}", topic);

        info!("🔍 Step 1: Refining search query...");
        let query = self.refiner.refine(topic).await;

        info!("🌐 Step 2: Searching for news...");
        let results = self.search.search(&query).await;
        if results.is_empty() {
            return Ok(RunOutcome::NoSearchResults);
        }

        info!("🎯 Step 3: Filtering relevant articles...");
        let urls = self.filter.filter(&results).await;
        if urls.is_empty() {
            return Ok(RunOutcome::NoRelevantArticles);
        }

        info!("📰 Step 4: Processing {} articles...", urls.len());
        let result = self.processor.process_all(&urls).await;
        info!(
            "✅ Processed {} articles, {} failed",
            result.processed.len(),
            result.failed.len()
        );
        if result.processed.is_empty() {
            return Ok(RunOutcome::NoProcessedArticles);
        }

        info!("📝 Step 5: Composing report...");
        let report = self.composer.compose(topic, &result.processed, &result.failed).await;
        let saved_to = self.save(&report).await;

        Ok(RunOutcome::Report { report, result, saved_to })
    }

    async fn save(&self, report: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.save_report(report, None).await {
            Ok(location) => Some(location),
            Err(e) => {
                warn!("⚠️  Could not save report: {}", e);
                None
            }
        }
    }
}
