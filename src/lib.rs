pub mod catalog_exporter;
pub mod cleaner;
pub mod error;
pub mod export;
pub mod models;
pub mod scrapers;
pub mod traits;
