use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

const MAX_HEADING_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    Standard,
    Serif,
    Mono,
    #[default]
    Corporate,
}

impl ReportStyle {
    /// Unknown keys fall back to `Corporate`.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    pub fn font_family(&self) -> &'static str {
        match self {
            ReportStyle::Standard | ReportStyle::Corporate => "'Segoe UI', Tahoma, Geneva, Verdana, sans-serif",
            ReportStyle::Serif => "Georgia, 'Times New Roman', Times, serif",
            ReportStyle::Mono => "'Courier New', Courier, monospace",
        }
    }

    pub fn accent_color(&self) -> &'static str {
        "#2a3550"
    }
}

impl FromStr for ReportStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(ReportStyle::Standard),
            "serif" => Ok(ReportStyle::Serif),
            "mono" => Ok(ReportStyle::Mono),
            "corporate" => Ok(ReportStyle::Corporate),
            other => Err(format!("Unknown report style: {}", other)),
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            ReportStyle::Standard => "standard",
            ReportStyle::Serif => "serif",
            ReportStyle::Mono => "mono",
            ReportStyle::Corporate => "corporate",
        };
        f.write_str(key)
    }
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| matches!(c, '=' | '-' | ' '))
}

/// At least one cased character and no lowercase ones.
fn is_uppercase_line(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}

fn title_case(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut at_word_start = true;
    for c in line.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Renders a plain-text report as an HTML fragment. All text is escaped
/// before any markup is added.
pub fn render_html(report: &str, style: ReportStyle) -> String {
    let escaped = html_escape::encode_safe(report);
    let lines: Vec<&str> = escaped
        .split('\n')
        .map(str::trim_end)
        .filter(|line| !is_separator(line))
        .collect();

    let mut parts = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        if is_uppercase_line(line) && line.chars().count() < MAX_HEADING_CHARS {
            parts.push(format!(
                "<h2 style=\"color:{}; margin-top:18px;\">{}</h2>",
                style.accent_color(),
                title_case(line)
            ));
            i += 1;
            continue;
        }

        let mut paragraph = vec![line];
        let mut j = i + 1;
        while j < lines.len() && !lines[j].trim().is_empty() {
            paragraph.push(lines[j].trim());
            j += 1;
        }
        let paragraph = paragraph.join(" ").replace("  ", " ");
        parts.push(format!("<p style=\"margin:8px 0;\">{}</p>", paragraph));
        i = j + 1;
    }

    format!(
        r#"
<div style="font-family: {font}; color:#111; line-height:1.6; padding:8px;">
  <div style="max-width:100%; padding:20px; background: #fbfdff; border-radius:10px; border:1px solid #eef3fb; box-shadow: 0 6px 18px rgba(50,70,120,0.04);">
    {body}
  </div>
</div>
"#,
        font = style.font_family(),
        body = parts.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_fallback() {
        assert_eq!(ReportStyle::from_key("serif"), ReportStyle::Serif);
        assert_eq!(ReportStyle::from_key("MONO"), ReportStyle::Mono);
        assert_eq!(ReportStyle::from_key("times"), ReportStyle::Corporate);
        assert_eq!(ReportStyle::from_key(""), ReportStyle::Corporate);
        assert_eq!(ReportStyle::Serif.to_string(), "serif");
    }

    #[test]
    fn test_script_is_escaped() {
        let report = "ARTICLE SUMMARIES\n\n1. Headline\n\nBad <script>alert('x')</script> summary\n";
        let html = render_html(report, ReportStyle::Corporate);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let report = "\nNEWS SUMMARY REPORT\nTopic: Climate\n====\n\nReport Date: October 18, 2026\nReport Time: 02:05 PM\n\nEXECUTIVE SUMMARY\n----\n\nFirst line\nsecond  line\n\n";
        let html = render_html(report, ReportStyle::Serif);
        assert!(html.contains("<h2 style=\"color:#2a3550; margin-top:18px;\">News Summary Report</h2>"));
        assert!(html.contains("<h2 style=\"color:#2a3550; margin-top:18px;\">Executive Summary</h2>"));
        assert!(html.contains("<p style=\"margin:8px 0;\">Topic: Climate</p>"));
        assert!(html.contains("<p style=\"margin:8px 0;\">Report Date: October 18, 2026 Report Time: 02:05 PM</p>"));
        assert!(html.contains("<p style=\"margin:8px 0;\">First line second line</p>"));
        assert!(html.contains("Georgia"));
        assert!(!html.contains("===="));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ARTICLE SUMMARIES"), "Article Summaries");
        assert_eq!(title_case("END-OF REPORT"), "End-Of Report");
    }

    #[test]
    fn test_uppercase_detection() {
        assert!(is_uppercase_line("EXECUTIVE SUMMARY"));
        assert!(is_uppercase_line("1. BREAKING"));
        assert!(!is_uppercase_line("Topic: Climate"));
        assert!(!is_uppercase_line("2026"));
    }
}
