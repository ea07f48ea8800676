use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;
use ns_core::{ArticleExtractor, Error, ExtractedArticle, Result};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Containers tried in order for the article body.
const BODY_SELECTORS: &[&str] = &["article", "[itemprop='articleBody']", "main"];

/// Fetches pages over HTTP and extracts title and body with CSS selectors.
#[derive(Debug, Clone)]
pub struct HtmlArticleExtractor {
    client: Client,
}

impl HtmlArticleExtractor {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ArticleExtractor for HtmlArticleExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedArticle> {
        let parsed = utils::parse_url(url)?;
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        Ok(parse_article(&html))
    }
}

/// Pulls the headline and the paragraph text out of an article page.
pub fn parse_article(html: &str) -> ExtractedArticle {
    let document = Html::parse_document(html);

    let title = utils::extract_attr(&document, "meta[property='og:title']", "content")
        .or_else(|| utils::extract_text(&document, "h1").ok())
        .or_else(|| utils::extract_text(&document, "title").ok())
        .map(|t| utils::normalize_whitespace(&t))
        .unwrap_or_default();

    let text = BODY_SELECTORS
        .iter()
        .filter_map(|selector| Selector::parse(selector).ok())
        .filter_map(|selector| document.select(&selector).next())
        .map(|container| paragraphs(container))
        .find(|paragraphs| !paragraphs.is_empty())
        .unwrap_or_else(|| {
            utils::extract_texts(&document, "p")
                .unwrap_or_default()
                .iter()
                .map(|p| utils::normalize_whitespace(p))
                .filter(|p| !p.is_empty())
                .collect()
        })
        .join("\n\n");

    ExtractedArticle { title, text }
}

fn paragraphs(container: ElementRef<'_>) -> Vec<String> {
    let Ok(selector) = Selector::parse("p") else {
        return Vec::new();
    };
    container
        .select(&selector)
        .map(|el| utils::normalize_whitespace(&el.text().collect::<String>()))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Why a fetch failed. Only used to pick a log message; every kind fails the
/// URL the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    NotFound,
    Forbidden,
    Timeout,
    Other,
}

impl FetchFailure {
    pub fn classify(error: &Error) -> Self {
        match error {
            Error::Status { status: 404, .. } => FetchFailure::NotFound,
            Error::Status { status: 403, .. } => FetchFailure::Forbidden,
            Error::Http(e) if e.is_timeout() => FetchFailure::Timeout,
            Error::Http(e) => match e.status().map(|s| s.as_u16()) {
                Some(404) => FetchFailure::NotFound,
                Some(403) => FetchFailure::Forbidden,
                _ => FetchFailure::Other,
            },
            _ => FetchFailure::Other,
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::NotFound => write!(f, "Article not found (404)"),
            FetchFailure::Forbidden => write!(f, "Article blocked/forbidden (403)"),
            FetchFailure::Timeout => write!(f, "Connection timeout"),
            FetchFailure::Other => write!(f, "Error fetching article"),
        }
    }
}

pub(crate) mod utils {
    use super::*;

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
    }

    pub fn extract_text(document: &Html, selector: &str) -> Result<String> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector: {}", e)))?;

        document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .find(|text| !text.trim().is_empty())
            .ok_or_else(|| Error::Scraping(format!("No element found for selector: {:?}", selector)))
    }

    pub fn extract_texts(document: &Html, selector: &str) -> Result<Vec<String>> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector: {}", e)))?;

        Ok(document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect())
    }

    pub fn extract_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
