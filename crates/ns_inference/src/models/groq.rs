use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ns_core::{CompletionRequest, Error, LanguageModel, Result};
use crate::Config;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client for Groq's OpenAI compatible endpoint. Works with
/// any server speaking the same protocol when given another `base_url`.
pub struct GroqModel {
    client: Arc<Client>,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl GroqModel {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client: Arc::new(client),
            api_key: config.api_key.unwrap_or_default(),
            model_name: config.model_name,
            base_url: config.base_url.unwrap_or_else(|| GROQ_BASE_URL.to_string()),
        })
    }

    fn chat_request<'a>(&'a self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

impl fmt::Debug for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl LanguageModel for GroqModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        debug!("Sending {} char prompt to {}", request.prompt.len(), self.model_name);

        let response = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.chat_request(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!("{} returned {}: {}", self.model_name, status, body)));
        }

        let response = response.json::<ChatResponse>().await?;
        response.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Inference("Completion contained no message content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_omits_unset_options() {
        let model = GroqModel::new(Config::default()).unwrap();
        let request = CompletionRequest::new("Hello");
        let json = serde_json::to_value(model.chat_request(&request)).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());

        let request = CompletionRequest::new("Hello").with_temperature(0.7).with_max_tokens(300);
        let json = serde_json::to_value(model.chat_request(&request)).unwrap();
        assert_eq!(json["max_tokens"], 300);
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = Config {
            api_key: Some("gsk_secret".to_string()),
            ..Config::default()
        };
        let model = GroqModel::new(config).unwrap();
        let rendered = format!("{:?}", model);
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains(GROQ_BASE_URL));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let config = Config {
            base_url: Some("http://127.0.0.1:9".to_string()),
            ..Config::default()
        };
        let model = GroqModel::new(config).unwrap();
        let result = model.complete(&CompletionRequest::new("Hello")).await;
        assert!(result.is_err());
    }
}
