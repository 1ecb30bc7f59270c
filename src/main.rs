use anyhow::Result;
use tracing::info;

use tienda_scraper::catalog_exporter::CatalogExporter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting tienda catalog export");

    let exporter = CatalogExporter::new()?;
    exporter.export_catalog().await?;

    Ok(())
}
