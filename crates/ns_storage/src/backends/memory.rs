use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use ns_core::{Error, ReportStorage, Result};
use super::file::FileStorage;

/// Keeps reports in process memory, keyed by their file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    reports: Arc<RwLock<Vec<(String, String)>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

#[async_trait]
impl ReportStorage for MemoryStorage {
    async fn save_report(&self, report: &str, name: Option<&str>) -> Result<String> {
        let location = name.map(str::to_string).unwrap_or_else(FileStorage::default_file_name);
        let mut reports = self.reports.write().await;
        match reports.iter_mut().find(|(existing, _)| *existing == location) {
            Some((_, content)) => *content = report.to_string(),
            None => reports.push((location.clone(), report.to_string())),
        }
        Ok(location)
    }

    async fn load_report(&self, location: &str) -> Result<String> {
        self.reports
            .read()
            .await
            .iter()
            .find(|(existing, _)| existing == location)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| Error::Storage(format!("No report stored at {}", location)))
    }
}
