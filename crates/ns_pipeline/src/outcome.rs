use std::fmt;
use ns_core::PipelineResult;

pub const NO_SEARCH_RESULTS: &str = "❌ No news articles found for this topic.";
pub const NO_RELEVANT_ARTICLES: &str = "⚠️  Could not find relevant articles to summarize.";
pub const NO_PROCESSED_ARTICLES: &str = "❌ Failed to extract and summarize articles.";

/// How a single run ended. Every variant renders to the text shown to the
/// user.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Report {
        report: String,
        result: PipelineResult,
        saved_to: Option<String>,
    },
    NoSearchResults,
    NoRelevantArticles,
    NoProcessedArticles,
    Failed(String),
}

impl RunOutcome {
    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report { .. })
    }

    pub fn result(&self) -> Option<&PipelineResult> {
        match self {
            Self::Report { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn saved_to(&self) -> Option<&str> {
        match self {
            Self::Report { saved_to, .. } => saved_to.as_deref(),
            _ => None,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Report { report, .. } => report,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report { report, .. } => f.write_str(report),
            Self::NoSearchResults => f.write_str(NO_SEARCH_RESULTS),
            Self::NoRelevantArticles => f.write_str(NO_RELEVANT_ARTICLES),
            Self::NoProcessedArticles => f.write_str(NO_PROCESSED_ARTICLES),
            Self::Failed(error) => write!(f, "❌ AGENT ERROR: {}", error),
        }
    }
}
