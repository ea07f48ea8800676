use std::fmt::Write;
use chrono::{DateTime, TimeZone};
use ns_core::{ProcessedArticle, Result};

pub const LINE_WIDTH: usize = 80;

pub const TITLE: &str = "NEWS SUMMARY REPORT";
pub const STATISTICS_HEADING: &str = "REPORT STATISTICS";
pub const EXECUTIVE_SUMMARY_HEADING: &str = "EXECUTIVE SUMMARY";
pub const ARTICLES_HEADING: &str = "ARTICLE SUMMARIES";
pub const END_MARKER: &str = "END OF REPORT";

pub const TOTAL_LABEL: &str = "Total Articles Found:";
pub const PROCESSED_LABEL: &str = "Successfully Processed:";
pub const FAILED_LABEL: &str = "Failed to Process:";
pub const SUCCESS_RATE_LABEL: &str = "Success Rate:";

/// Greedy word wrap. Words are never split, so a single word longer than
/// `width` ends up on a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !current.is_empty() && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Trims every source line and drops blank ones. Lines that already fit are
/// kept verbatim; longer ones are re-flowed.
pub fn wrap_paragraphs(text: &str, width: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| {
            if line.chars().count() > width {
                wrap_words(line, width)
            } else {
                vec![line.to_string()]
            }
        })
        .collect()
}

fn rule(c: char) -> String {
    c.to_string().repeat(LINE_WIDTH)
}

fn write_wrapped(out: &mut String, text: &str) -> Result<()> {
    for line in wrap_paragraphs(text, LINE_WIDTH) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Renders the plain-text report. `generated_at` is stamped into the header.
pub fn format_report<Tz>(
    topic: &str,
    processed: &[ProcessedArticle],
    failed: &[String],
    executive_summary: Option<&str>,
    generated_at: &DateTime<Tz>,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "{}", TITLE)?;
    write_wrapped(&mut out, &format!("Topic: {}", topic))?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out)?;
    writeln!(out, "Report Date: {}", generated_at.format("%B %d, %Y"))?;
    writeln!(out, "Report Time: {}", generated_at.format("%I:%M %p"))?;
    writeln!(out)?;

    let total = processed.len() + failed.len();
    let success_rate = if total == 0 {
        0.0
    } else {
        processed.len() as f64 * 100.0 / total as f64
    };
    writeln!(out, "{}", STATISTICS_HEADING)?;
    writeln!(out, "{}", rule('-'))?;
    writeln!(out)?;
    writeln!(out, "{} {}", TOTAL_LABEL, total)?;
    writeln!(out, "{} {}", PROCESSED_LABEL, processed.len())?;
    writeln!(out, "{} {}", FAILED_LABEL, failed.len())?;
    writeln!(out, "{} {:.1}%", SUCCESS_RATE_LABEL, success_rate)?;
    writeln!(out)?;

    if let Some(summary) = executive_summary.filter(|s| !s.trim().is_empty()) {
        writeln!(out, "{}", EXECUTIVE_SUMMARY_HEADING)?;
        writeln!(out, "{}", rule('-'))?;
        writeln!(out)?;
        write_wrapped(&mut out, summary)?;
        writeln!(out)?;
        writeln!(out)?;
    }

    if !processed.is_empty() {
        writeln!(out, "{}", ARTICLES_HEADING)?;
        writeln!(out, "{}", rule('-'))?;
        writeln!(out)?;

        for (idx, article) in processed.iter().enumerate() {
            write_wrapped(&mut out, &format!("{}. {}", idx + 1, article.title))?;
            writeln!(out)?;
            write_wrapped(&mut out, &article.summary)?;
            writeln!(out)?;
            write_wrapped(&mut out, &format!("Source: {}", article.url))?;
            writeln!(out)?;
            writeln!(out, "{}", rule('-'))?;
            writeln!(out)?;
        }
    }

    writeln!(out, "{}", END_MARKER)?;
    writeln!(out, "{}", rule('='))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(n: usize, summary: &str) -> ProcessedArticle {
        ProcessedArticle {
            url: format!("https://news.test/{}", n),
            title: format!("Headline number {}", n),
            summary: summary.to_string(),
        }
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_wrap_words_respects_width_and_order() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
                    incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
                    exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";
        let lines = wrap_words(text, LINE_WIDTH);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= LINE_WIDTH));
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_words_never_breaks_a_word() {
        let long = "x".repeat(95);
        let lines = wrap_words(&format!("short {} tail", long), LINE_WIDTH);
        assert_eq!(lines, vec!["short".to_string(), long, "tail".to_string()]);
    }

    #[test]
    fn test_wrap_words_fills_exactly_to_width() {
        let word = "y".repeat(39);
        let lines = wrap_words(&format!("{} {} z", word, word), LINE_WIDTH);
        assert_eq!(lines[0].chars().count(), 79);
        assert_eq!(lines[1], "z");
    }

    #[test]
    fn test_wrap_paragraphs_keeps_short_lines() {
        let lines = wrap_paragraphs("  First   line  \n\n\nSecond line", LINE_WIDTH);
        assert_eq!(lines, vec!["First   line", "Second line"]);
    }

    #[test]
    fn test_format_report_layout() {
        let long_summary = "word ".repeat(60);
        let processed = vec![article(1, &long_summary), article(2, "Short summary.")];
        let failed = vec!["https://news.test/broken".to_string()];
        let report = format_report(
            "Climate change",
            &processed,
            &failed,
            Some("Governments agreed on new targets."),
            &generated_at(),
        )
        .unwrap();

        assert!(report.starts_with("\nNEWS SUMMARY REPORT\nTopic: Climate change\n"));
        assert!(report.contains("Report Date: October 18, 2026\nReport Time: 02:05 PM\n"));
        assert!(report.contains("Total Articles Found: 3\nSuccessfully Processed: 2\nFailed to Process: 1\nSuccess Rate: 66.7%\n"));
        assert!(report.contains("EXECUTIVE SUMMARY\n"));
        assert!(report.contains("1. Headline number 1\n"));
        assert!(report.contains("2. Headline number 2\n\nShort summary.\n\nSource: https://news.test/2\n"));
        assert!(report.ends_with(&format!("END OF REPORT\n{}\n", "=".repeat(80))));
        assert!(!report.contains("https://news.test/broken"));
        assert!(report.lines().all(|l| l.chars().count() <= LINE_WIDTH));
    }

    #[test]
    fn test_long_source_url_stays_within_width() {
        let source = |url: &str| ProcessedArticle {
            url: url.to_string(),
            title: "Climate policy".to_string(),
            summary: "Summary.".to_string(),
        };

        // "Source: " plus this URL is 82 columns
        let url = "https://www.example-news-site.com/world/2026/10/18/long-slug-about-climate";
        let report = format_report("Climate", &[source(url)], &[], None, &generated_at()).unwrap();
        assert!(report.contains(&format!("Source:\n{}\n", url)));
        assert!(report.lines().all(|l| l.chars().count() <= LINE_WIDTH));

        // A URL wider than a line is the only line allowed past the width
        let url = "https://www.example-news-site.com/world/2026/10/18/long-slug-about-climate-policy-x";
        let report = format_report("Climate", &[source(url)], &[], None, &generated_at()).unwrap();
        let too_wide: Vec<&str> = report.lines().filter(|l| l.chars().count() > LINE_WIDTH).collect();
        assert_eq!(too_wide, vec![url]);
    }

    #[test]
    fn test_format_report_without_summary_or_articles() {
        let report = format_report("Quiet topic", &[], &[], None, &generated_at()).unwrap();
        assert!(!report.contains(EXECUTIVE_SUMMARY_HEADING));
        assert!(!report.contains(ARTICLES_HEADING));
        assert!(report.contains("Success Rate: 0.0%"));
    }
}
