//! Data models for extracted product listings

use serde::{Deserialize, Serialize};

/// One product listing pulled from the category grid.
///
/// Every field is plain text straight out of the page. Missing source
/// nodes are represented by the `"N/A"` sentinel (`"0"` for the price),
/// never by an absent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: String,
    pub product_url: String,
    pub image_url: String,
}
