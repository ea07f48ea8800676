use std::env;
use std::time::Duration;
use serde::{Deserialize, Serialize};

pub const LLM_API_KEY_VAR: &str = "GROQ_API_KEY";
pub const SEARCH_API_KEY_VAR: &str = "TAVILY_API_KEY";

pub const DEFAULT_MODEL_NAME: &str = "llama-3.3-70b-versatile";

/// API credentials resolved once at process start. Missing keys are not an
/// error here; the service that needs them rejects the request later.
#[derive(Clone, Default)]
pub struct Credentials {
    pub llm_api_key: Option<String>,
    pub search_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: env::var(LLM_API_KEY_VAR).ok(),
            search_api_key: env::var(SEARCH_API_KEY_VAR).ok(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("llm_api_key", &self.llm_api_key.as_deref().map(|_| "<redacted>"))
            .field("search_api_key", &self.search_api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub model_name: String,
    pub max_search_results: usize,
    pub fetch_timeout_secs: u64,
    pub concurrency: usize,
    pub save_reports: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            max_search_results: 10,
            fetch_timeout_secs: 10,
            concurrency: 1,
            save_reports: true,
        }
    }
}

impl PipelineConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_keys() {
        let credentials = Credentials {
            llm_api_key: Some("gsk_secret".to_string()),
            search_api_key: None,
        };
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_pipeline_config_defaults_fill_missing_fields() {
        let config: PipelineConfig = serde_json::from_str(r#"{"concurrency": 3}"#).unwrap();
        assert_eq!(config.concurrency, 3);
        assert_eq!(config.max_search_results, 10);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        assert!(config.save_reports);
    }
}
