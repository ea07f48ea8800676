use serde::{Deserialize, Serialize};
use crate::format::{FAILED_LABEL, PROCESSED_LABEL, SUCCESS_RATE_LABEL, TOTAL_LABEL};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: u64,
    pub processed: u64,
    pub failed: u64,
    pub success_rate: f64,
}

impl ReportStats {
    /// Recovers the counts from the statistics block of a rendered report.
    /// Only the first line carrying each label counts, so summaries printed
    /// later cannot override the figures. Anything missing or unreadable
    /// stays at zero.
    pub fn from_report(report: &str) -> Self {
        let mut total = None;
        let mut processed = None;
        let mut failed = None;
        let mut success_rate = None;
        for line in report.lines() {
            if line.contains(TOTAL_LABEL) {
                total.get_or_insert_with(|| parse_count(line));
            } else if line.contains(PROCESSED_LABEL) {
                processed.get_or_insert_with(|| parse_count(line));
            } else if line.contains(FAILED_LABEL) {
                failed.get_or_insert_with(|| parse_count(line));
            } else if line.contains(SUCCESS_RATE_LABEL) {
                success_rate.get_or_insert_with(|| parse_rate(line));
            }
        }

        Self {
            total: total.flatten().unwrap_or_default(),
            processed: processed.flatten().unwrap_or_default(),
            failed: failed.flatten().unwrap_or_default(),
            success_rate: success_rate.flatten().unwrap_or_default(),
        }
    }
}

fn value_part(line: &str) -> Option<&str> {
    line.split(':').nth(1)
}

fn parse_count(line: &str) -> Option<u64> {
    let digits: String = value_part(line)?.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn parse_rate(line: &str) -> Option<f64> {
    let digits: String = value_part(line)?
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}
