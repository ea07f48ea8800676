use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// Persist a report, returning where it ended up
    async fn save_report(&self, report: &str, name: Option<&str>) -> Result<String>;

    /// Load a previously saved report by the location `save_report` returned
    async fn load_report(&self, location: &str) -> Result<String>;
}
