use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use ns_core::{Error, LanguageModel, Result};
use crate::Config;

pub mod dummy;
pub mod groq;

pub use dummy::DummyModel;
pub use groq::GroqModel;

/// Which backend `create_model` should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    Groq,
    Dummy,
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "dummy" => Ok(Self::Dummy),
            other => Err(Error::Config(format!(
                "Unknown model '{}'. Available models: groq (default), dummy",
                other
            ))),
        }
    }
}

pub fn create_model(kind: ModelKind, config: Config) -> Result<Arc<dyn LanguageModel>> {
    let model: Arc<dyn LanguageModel> = match kind {
        ModelKind::Groq => Arc::new(GroqModel::new(config)?),
        ModelKind::Dummy => Arc::new(DummyModel::new()),
    };
    info!("🧠 Inference model initialized (using {})", model.name());
    Ok(model)
}
