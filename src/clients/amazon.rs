use anyhow::Result;
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::AmazonConfig;

/// Scrape failure taxonomy. Messages render byte-compatible with the
/// original API's error strings.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScrapeError {
    #[error("Invalid Amazon URL")]
    InvalidSource,

    #[error("Failed to fetch data. Status code: {0}")]
    FetchFailed(u16),

    /// Transport or decoding failure, carrying the underlying message.
    #[error("{0}")]
    Request(String),
}

/// Scraped product page. Transient only; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Reviews")]
    pub reviews: Vec<ReviewBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewBlock {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Review")]
    pub review: String,
}

#[derive(Clone)]
pub struct AmazonClient {
    client: Client,
    config: AmazonConfig,
}

impl AmazonClient {
    pub fn new(config: AmazonConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)?,
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetches `url` and extracts product title, overall rating and up to
    /// `max_reviews` review blocks. The host check runs before any outbound
    /// request is made.
    pub async fn scrape(&self, url: &str) -> Result<ProductPage, ScrapeError> {
        let parsed = Url::parse(url).map_err(|_| ScrapeError::InvalidSource)?;
        let host_ok = parsed
            .host_str()
            .is_some_and(|host| host.contains(&self.config.host_marker));
        if !host_ok {
            return Err(ScrapeError::InvalidSource);
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| ScrapeError::Request(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ScrapeError::FetchFailed(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Request(e.to_string()))?;

        let page = extract_page(&body, self.config.max_reviews);
        debug!(
            "Scraped {} reviews for product: {}",
            page.reviews.len(),
            page.product
        );
        Ok(page)
    }
}

/// Pulls the bounded field set out of a product page. Every field falls back
/// to its sentinel independently, so a partial page layout still yields a
/// complete structure.
pub fn extract_page(html: &str, max_reviews: usize) -> ProductPage {
    let document = Html::parse_document(html);

    let product = select_text(document.root_element(), "#productTitle")
        .unwrap_or_else(|| "Unknown Product".to_string());
    let rating = select_text(document.root_element(), ".a-icon-alt")
        .unwrap_or_else(|| "No rating".to_string());

    let reviews = match Selector::parse(".review") {
        Ok(selector) => document
            .select(&selector)
            .take(max_reviews)
            .map(extract_review_block)
            .collect(),
        Err(_) => Vec::new(),
    };

    ProductPage {
        product,
        rating,
        reviews,
    }
}

fn extract_review_block(block: ElementRef<'_>) -> ReviewBlock {
    ReviewBlock {
        title: select_text(block, ".review-title").unwrap_or_else(|| "No Title".to_string()),
        author: select_text(block, ".a-profile-name").unwrap_or_else(|| "Anonymous".to_string()),
        date: select_text(block, ".review-date").unwrap_or_else(|| "Unknown Date".to_string()),
        rating: select_text(block, ".review-rating").unwrap_or_else(|| "No Rating".to_string()),
        review: select_text(block, ".review-text-content span")
            .unwrap_or_else(|| "No Review".to_string()),
    }
}

/// First match of `selector` under `scope`, as whitespace-normalized text.
fn select_text(scope: ElementRef<'_>, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = scope.select(&selector).next()?;
    let text = element.text().collect::<Vec<_>>().join(" ");
    let trimmed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PRODUCT_PAGE: &str = r#"
        <html><body>
            <span id="productTitle"> Widget Deluxe 3000 </span>
            <i class="a-icon-alt">4.4 out of 5 stars</i>
            <div class="review">
                <a class="review-title">Great value</a>
                <span class="a-profile-name">Sam</span>
                <span class="review-date">Reviewed on 1 March 2024</span>
                <i class="review-rating">5.0 out of 5 stars</i>
                <div class="review-text-content"><span>Works exactly as described.</span></div>
            </div>
            <div class="review">
                <span class="a-profile-name">Alex</span>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_full_page() {
        let page = extract_page(SAMPLE_PRODUCT_PAGE, 10);
        assert_eq!(page.product, "Widget Deluxe 3000");
        assert_eq!(page.rating, "4.4 out of 5 stars");
        assert_eq!(page.reviews.len(), 2);

        let first = &page.reviews[0];
        assert_eq!(first.title, "Great value");
        assert_eq!(first.author, "Sam");
        assert_eq!(first.date, "Reviewed on 1 March 2024");
        assert_eq!(first.rating, "5.0 out of 5 stars");
        assert_eq!(first.review, "Works exactly as described.");
    }

    #[test]
    fn test_extract_defaults_per_field() {
        let page = extract_page(SAMPLE_PRODUCT_PAGE, 10);

        // Second block only carries an author; everything else defaults.
        let second = &page.reviews[1];
        assert_eq!(second.author, "Alex");
        assert_eq!(second.title, "No Title");
        assert_eq!(second.date, "Unknown Date");
        assert_eq!(second.rating, "No Rating");
        assert_eq!(second.review, "No Review");
    }

    #[test]
    fn test_extract_empty_page_defaults() {
        let page = extract_page("<html><body></body></html>", 10);
        assert_eq!(page.product, "Unknown Product");
        assert_eq!(page.rating, "No rating");
        assert!(page.reviews.is_empty());
    }

    #[test]
    fn test_extract_caps_review_count() {
        let blocks: String = (0..25)
            .map(|i| format!(r#"<div class="review"><a class="review-title">r{i}</a></div>"#))
            .collect();
        let html = format!("<html><body>{blocks}</body></html>");

        let page = extract_page(&html, 10);
        assert_eq!(page.reviews.len(), 10);
        assert_eq!(page.reviews[0].title, "r0");

        let page = extract_page(&html, 3);
        assert_eq!(page.reviews.len(), 3);
    }

    #[test]
    fn test_wire_keys_are_capitalized() {
        let page = extract_page(SAMPLE_PRODUCT_PAGE, 1);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("Product").is_some());
        assert!(json.get("Rating").is_some());
        assert_eq!(json["Reviews"][0]["Author"], "Sam");
    }

    #[tokio::test]
    async fn test_scrape_rejects_foreign_host() {
        let client = AmazonClient::new(AmazonConfig::default()).unwrap();
        let err = client
            .scrape("https://example.com/dp/B000000")
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidSource));
        assert_eq!(err.to_string(), "Invalid Amazon URL");
    }

    #[tokio::test]
    async fn test_scrape_rejects_unparseable_url() {
        let client = AmazonClient::new(AmazonConfig::default()).unwrap();
        let err = client.scrape("not a url").await.unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidSource));
    }
}
