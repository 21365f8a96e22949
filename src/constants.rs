pub const HOME_MESSAGE: &str = "Amazon Review Scraper & AI Review Generator";

/// Name every AI-generated review is stored under.
pub const AI_PRODUCT_NAME: &str = "AI Generated Product";

/// Marker values written to every generated row. The store never holds
/// scraped data, so these identify AI-origin rows by construction.
pub mod markers {
    pub const OVERALL_RATING: &str = "AI Generated";
    pub const REVIEW_TITLE: &str = "Generated Review";
    pub const AUTHOR: &str = "AI Model";
    pub const REVIEW_DATE: &str = "2024-03-01";
    pub const RATING: &str = "5 stars";
}
