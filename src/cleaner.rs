//! Field-cleaning rules applied between extraction and CSV assembly

use crate::models::ProductRecord;

/// Normalize a price as published on the page ("12,50 €") into a bare
/// numeric string ("12.50"): drop the euro sign, drop spaces, swap the
/// decimal comma for a point. Best effort only; text that was never a
/// price passes through untouched apart from those substitutions.
pub fn clean_price(raw: &str) -> String {
    raw.replace('€', "")
        .replace(' ', "")
        .replace(',', ".")
        .trim()
        .to_string()
}

/// Flatten line breaks to spaces and make the text delimiter-safe by
/// rewriting `;` to `,`.
pub fn clean_description(raw: &str) -> String {
    raw.replace('\n', " ").replace('\r', " ").replace(';', ",")
}

/// Make a product name delimiter-safe.
pub fn clean_name(raw: &str) -> String {
    raw.replace(';', ",")
}

/// Apply the cleaning rules to a record in place. URLs are passed through
/// unmodified.
pub fn clean_record(record: &mut ProductRecord) {
    record.price = clean_price(&record.price);
    record.description = clean_description(&record.description);
    record.name = clean_name(&record.name);
}
