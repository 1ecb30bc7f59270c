//! Scraper implementation for the regional-products shop category grid

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, REFERER,
    UPGRADE_INSECURE_REQUESTS,
};
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::error::{Result, ScrapeError};
use crate::models::ProductRecord;
use crate::traits::{CategoryScraper, ScraperConfig, SiteSelectors};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Scraper for the tienda.productostipicosregionales.es gastronomy category.
///
/// The shop is a PrestaShop storefront; the selectors target its category
/// grid markup, with progressively looser fallbacks for theme variations.
pub struct TiendaScraper {
    client: Client,
    config: ScraperConfig,
}

impl TiendaScraper {
    /// Create a new scraper with default configuration
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("es-ES,es;q=0.9,en;q=0.8"),
        );
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        let config = ScraperConfig {
            name: "Tienda Productos Tipicos Regionales".to_string(),
            category_url: "https://tienda.productostipicosregionales.es/12-gastronomia"
                .to_string(),
            output_file: "productos_limpios.csv".to_string(),
            selectors: SiteSelectors {
                product_containers: vec![
                    "ul.product_list.grid.row li.ajax_block_product".to_string(),
                    "li.ajax_block_product".to_string(),
                    ".product-container".to_string(),
                ],
                name: "h5[itemprop=name] a.product-name".to_string(),
                description: "p.product-desc[itemprop=description]".to_string(),
                price: "span.price.product-price".to_string(),
                link: "a.product-name".to_string(),
                image: "div.product-image-container img.img-responsive".to_string(),
            },
        };

        Ok(Self { client, config })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| ScrapeError::Selector {
        selector: selector.to_string(),
    })
}

#[async_trait]
impl CategoryScraper for TiendaScraper {
    fn config(&self) -> &ScraperConfig {
        &self.config
    }

    async fn fetch_category(&self) -> Result<String> {
        info!("Connecting to {}", self.config.category_url);

        let response = self.client.get(&self.config.category_url).send().await?;

        // Non-2xx pages still carry parseable markup (error pages, soft
        // blocks); parse them rather than bailing out.
        let status = response.status();
        if !status.is_success() {
            warn!("Server answered {status}, parsing the body anyway");
        }

        let html = response.text().await?;
        info!("Category page loaded ({} bytes)", html.len());

        Ok(html)
    }

    fn extract_products(&self, html: &str) -> Result<Vec<ProductRecord>> {
        let document = Html::parse_document(html);

        let name_selector = parse_selector(&self.config.selectors.name)?;
        let description_selector = parse_selector(&self.config.selectors.description)?;
        let price_selector = parse_selector(&self.config.selectors.price)?;
        let link_selector = parse_selector(&self.config.selectors.link)?;
        let image_selector = parse_selector(&self.config.selectors.image)?;

        // Walk the cascade, most specific first, and keep the first
        // selector that matches at least one container.
        let mut containers = Vec::new();
        for candidate in &self.config.selectors.product_containers {
            let selector = parse_selector(candidate)?;
            containers = document.select(&selector).collect::<Vec<_>>();
            if !containers.is_empty() {
                info!(
                    "Using selector {:?} ({} products found)",
                    candidate,
                    containers.len()
                );
                break;
            }
            info!("Selector {:?} matched nothing, trying the next one", candidate);
        }

        if containers.is_empty() {
            let title_selector = parse_selector("title")?;
            let page_title = document.select(&title_selector).next().map_or_else(
                || "(no title)".to_string(),
                |el| el.text().collect::<String>().trim().to_string(),
            );
            warn!(
                "No product containers found; page title: {:?}, document length: {} bytes",
                page_title,
                html.len()
            );
        }

        let mut products = Vec::new();

        for product in containers {
            // Each lookup stands on its own: a product missing its
            // description or image still yields a full record.
            let name = product.select(&name_selector).next().map_or_else(
                || "N/A".to_string(),
                |el| el.text().collect::<String>().trim().to_string(),
            );

            let description = product.select(&description_selector).next().map_or_else(
                || "N/A".to_string(),
                |el| el.text().collect::<String>().trim().to_string(),
            );

            let price = product.select(&price_selector).next().map_or_else(
                || "0".to_string(),
                |el| el.text().collect::<String>().trim().to_string(),
            );

            let product_url = product
                .select(&link_selector)
                .next()
                .and_then(|el| el.value().attr("href"))
                .map_or_else(|| "N/A".to_string(), ToString::to_string);

            let image_url = product
                .select(&image_selector)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map_or_else(|| "N/A".to_string(), ToString::to_string);

            products.push(ProductRecord {
                name,
                description,
                price,
                product_url,
                image_url,
            });
        }

        Ok(products)
    }
}
