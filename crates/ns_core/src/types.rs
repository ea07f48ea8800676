use serde::{Deserialize, Serialize};

/// A single hit returned by the search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default, alias = "content")]
    pub snippet: String,
}

/// Title and body text pulled out of an article page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub text: String,
}

/// An article that was fetched, passed the quality gate and got summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedArticle {
    pub url: String,
    pub title: String,
    pub summary: String,
}

/// Outcome of processing a batch of URLs. Every input URL ends up in exactly
/// one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub processed: Vec<ProcessedArticle>,
    pub failed: Vec<String>,
}

impl PipelineResult {
    pub fn total(&self) -> usize {
        self.processed.len() + self.failed.len()
    }

    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.processed.len() as f64 * 100.0 / self.total() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_accepts_provider_content_field() {
        let json = r#"{"title": "Rates held", "url": "https://news.test/a", "content": "The bank kept rates."}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.snippet, "The bank kept rates.");

        let json = r#"{"title": "Rates held", "url": "https://news.test/a"}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert!(result.snippet.is_empty());
    }

    #[test]
    fn test_success_rate() {
        let result = PipelineResult {
            processed: vec![ProcessedArticle {
                url: "https://news.test/a".to_string(),
                title: "Some title".to_string(),
                summary: "Summary.".to_string(),
            }],
            failed: vec!["https://news.test/b".to_string()],
        };
        assert_eq!(result.total(), 2);
        assert!((result.success_rate() - 50.0).abs() < f64::EPSILON);
        assert_eq!(PipelineResult::default().success_rate(), 0.0);
    }
}
