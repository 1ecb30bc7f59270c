//! Traits and configuration for site-specific category scrapers

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ProductRecord;

/// Configuration for a category scraper
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Display name for the website
    pub name: String,
    /// Category page to scrape
    pub category_url: String,
    /// Output CSV filename, relative to the working directory
    pub output_file: String,
    /// CSS selectors for extracting data
    pub selectors: SiteSelectors,
}

/// CSS selectors for different parts of a product listing
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    /// Container selectors for individual products, ordered most specific
    /// first. The first one that matches anything wins.
    pub product_containers: Vec<String>,
    /// Title link selector within the product container
    pub name: String,
    /// Description selector within the product container
    pub description: String,
    /// Price selector within the product container
    pub price: String,
    /// Product link selector within the product container
    pub link: String,
    /// Image selector within the product container
    pub image: String,
}

/// Trait for site-specific category scrapers
#[async_trait]
pub trait CategoryScraper: Send + Sync {
    /// Get the configuration for this scraper
    fn config(&self) -> &ScraperConfig;

    /// Fetch the category page
    ///
    /// # Returns
    /// * `Result<String>` - The raw HTML body, or a fetch error
    async fn fetch_category(&self) -> Result<String>;

    /// Extract product records from a fetched page
    ///
    /// # Arguments
    /// * `html` - The raw HTML body of the category page
    ///
    /// # Returns
    /// * `Result<Vec<ProductRecord>>` - One record per product container;
    ///   empty when no container selector matches
    fn extract_products(&self, html: &str) -> Result<Vec<ProductRecord>>;
}
