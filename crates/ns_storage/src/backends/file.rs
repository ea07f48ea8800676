use std::path::{Path, PathBuf};
use async_trait::async_trait;
use chrono::Local;
use tracing::info;
use ns_core::{Error, ReportStorage, Result};

/// Writes each report to its own UTF-8 text file inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn default_file_name() -> String {
        format!("news_report_{}.txt", Local::now().format("%Y%m%d_%H%M%S"))
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let path = Path::new(name);
        if path.file_name().is_none() || path.components().count() != 1 {
            return Err(Error::Storage(format!("Invalid report file name: {}", name)));
        }
        Ok(self.dir.join(path))
    }
}

#[async_trait]
impl ReportStorage for FileStorage {
    async fn save_report(&self, report: &str, name: Option<&str>) -> Result<String> {
        let file_name = name.map(str::to_string).unwrap_or_else(Self::default_file_name);
        let path = self.resolve(&file_name)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, report.as_bytes()).await?;

        let location = path.display().to_string();
        info!("💾 Report saved to: {}", location);
        Ok(location)
    }

    async fn load_report(&self, location: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(location).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        let name = FileStorage::default_file_name();
        assert!(name.starts_with("news_report_"));
        assert!(name.ends_with(".txt"));
        // news_report_YYYYmmdd_HHMMSS.txt
        assert_eq!(name.len(), "news_report_".len() + 15 + ".txt".len());
    }

    #[tokio::test]
    async fn test_save_and_load_report() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("reports"));

        let report = "\nNEWS SUMMARY REPORT\nTopic: Café prices ☕\n";
        let location = storage.save_report(report, None).await.unwrap();

        assert!(location.contains("news_report_"));
        assert_eq!(storage.load_report(&location).await.unwrap(), report);
        assert_eq!(std::fs::read_to_string(&location).unwrap(), report);
    }

    #[tokio::test]
    async fn test_explicit_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        let location = storage.save_report("report", Some("weekly.txt")).await.unwrap();
        assert_eq!(Path::new(&location), dir.path().join("weekly.txt"));
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.save_report("report", Some("../escape.txt")).await.is_err());
        assert!(storage.save_report("report", Some("")).await.is_err());
    }
}
