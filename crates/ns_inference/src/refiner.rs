use std::sync::Arc;
use tracing::{error, info};
use ns_core::{CompletionRequest, LanguageModel};
use crate::prompts;

/// Rewrites a topic into a search query. Best effort: the topic itself is
/// returned whenever the model fails or answers with nothing.
#[derive(Debug, Clone)]
pub struct QueryRefiner {
    model: Arc<dyn LanguageModel>,
}

impl QueryRefiner {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn refine(&self, topic: &str) -> String {
        let request = CompletionRequest::new(prompts::refine_query(topic));
        match self.model.complete(&request).await {
            Ok(reply) => {
                let query = reply.trim();
                if query.is_empty() {
                    info!("📝 Model returned an empty query, searching for the topic as is");
                    topic.to_string()
                } else {
                    query.to_string()
                }
            }
            Err(e) => {
                error!("❌ Error generating search query: {}", e);
                topic.to_string()
            }
        }
    }
}
