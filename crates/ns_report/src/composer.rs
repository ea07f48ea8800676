use std::sync::Arc;
use chrono::Local;
use tracing::{error, info};
use ns_core::{CompletionRequest, LanguageModel, ProcessedArticle};
use ns_inference::prompts;
use crate::format::format_report;

/// Builds the final report: one executive-summary call to the model followed
/// by deterministic formatting.
#[derive(Debug, Clone)]
pub struct ReportComposer {
    model: Arc<dyn LanguageModel>,
}

impl ReportComposer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Always returns report-shaped text, even when assembly fails.
    pub async fn compose(&self, topic: &str, processed: &[ProcessedArticle], failed: &[String]) -> String {
        let executive_summary = self.executive_summary(topic, processed).await;

        match format_report(topic, processed, failed, executive_summary.as_deref(), &Local::now()) {
            Ok(report) => report,
            Err(e) => {
                error!("❌ Error generating final report: {}", e);
                fallback_report(topic, &e)
            }
        }
    }

    /// `None` when there is nothing to summarize or the model call fails.
    pub async fn executive_summary(&self, topic: &str, processed: &[ProcessedArticle]) -> Option<String> {
        if processed.is_empty() {
            return None;
        }

        let summaries: Vec<&str> = processed.iter().map(|a| a.summary.as_str()).collect();
        let request = CompletionRequest::new(prompts::executive_summary(topic, &summaries))
            .with_temperature(0.7)
            .with_max_tokens(500);

        match self.model.complete(&request).await {
            Ok(summary) => {
                info!("📋 Executive summary generated");
                Some(summary.trim().to_string()).filter(|s| !s.is_empty())
            }
            Err(e) => {
                error!("❌ Error generating report section: {}", e);
                None
            }
        }
    }
}

pub fn fallback_report(topic: &str, error: &dyn std::fmt::Display) -> String {
    format!("⚠️  Error generating report for topic '{}': {}", topic, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use ns_core::{Error, Result};
    use crate::format::{ARTICLES_HEADING, EXECUTIVE_SUMMARY_HEADING};

    #[derive(Debug, Default)]
    struct CountingModel {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl LanguageModel for CountingModel {
        fn name(&self) -> &str {
            "counting"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(request.max_tokens, Some(500));
            if self.fail {
                return Err(Error::Inference("service unavailable".to_string()));
            }
            Ok("Leaders met and agreed on a plan.".to_string())
        }
    }

    fn articles() -> Vec<ProcessedArticle> {
        vec![ProcessedArticle {
            url: "https://news.test/1".to_string(),
            title: "Leaders meet".to_string(),
            summary: "Leaders met in Geneva.".to_string(),
        }]
    }

    #[tokio::test]
    async fn test_compose_includes_executive_summary() {
        let model = Arc::new(CountingModel::default());
        let composer = ReportComposer::new(model.clone());
        let report = composer.compose("Summit", &articles(), &[]).await;

        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert!(report.contains(EXECUTIVE_SUMMARY_HEADING));
        assert!(report.contains("Leaders met and agreed on a plan."));
        assert!(report.contains(ARTICLES_HEADING));
    }

    #[tokio::test]
    async fn test_compose_survives_model_failure() {
        let model = Arc::new(CountingModel { fail: true, ..Default::default() });
        let report = ReportComposer::new(model).compose("Summit", &articles(), &[]).await;

        assert!(!report.contains(EXECUTIVE_SUMMARY_HEADING));
        assert!(report.contains("1. Leaders meet"));
    }

    #[tokio::test]
    async fn test_no_model_call_without_articles() {
        let model = Arc::new(CountingModel::default());
        let report = ReportComposer::new(model.clone()).compose("Summit", &[], &["https://x.test".to_string()]).await;

        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
        assert!(report.contains("Failed to Process: 1"));
    }

    #[test]
    fn test_fallback_report() {
        let message = fallback_report("Summit", &Error::Format(std::fmt::Error));
        assert!(message.starts_with("⚠️  Error generating report for topic 'Summit': Formatting error"));
    }
}
