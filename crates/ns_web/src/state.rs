use std::sync::Arc;
use ns_pipeline::Pipeline;
use ns_report::ReportStyle;

pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    /// Used when a request names no style.
    pub default_style: ReportStyle,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            default_style: ReportStyle::default(),
        }
    }
}
