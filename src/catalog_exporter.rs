use std::path::Path;

use tracing::info;

use crate::cleaner::clean_record;
use crate::error::Result;
use crate::export::{catalog_to_csv, write_catalog};
use crate::scrapers::tienda::TiendaScraper;
use crate::traits::CategoryScraper;

/// Drives the whole pipeline: fetch the category page, extract the
/// listings, clean each field, and write the CSV in one go.
pub struct CatalogExporter {
    scraper: TiendaScraper,
}

impl CatalogExporter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scraper: TiendaScraper::new()?,
        })
    }

    pub async fn export_catalog(&self) -> Result<()> {
        let html = self.scraper.fetch_category().await?;

        let mut records = self.scraper.extract_products(&html)?;
        info!("Products found: {}", records.len());

        for record in &mut records {
            clean_record(record);
            info!("Processed: {} - {} EUR", record.name, record.price);
        }

        let output_file = &self.scraper.config().output_file;
        info!("Extraction complete, saving data to {output_file}");

        let csv = catalog_to_csv(&records);
        write_catalog(Path::new(output_file), &csv)?;

        info!(
            "Done: {} products written to {output_file}",
            records.len()
        );

        Ok(())
    }
}
