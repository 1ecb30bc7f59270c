//! CSV assembly and one-shot file output

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::ProductRecord;

/// Fixed header row; always the first line of the output file.
pub const CSV_HEADER: &str = "Nombre;Descripcion;Precio_Euros;URL_Producto;URL_Imagen";

/// Build the full CSV text for a set of cleaned records: header first,
/// then one `;`-joined line per record. Fields are expected to be
/// delimiter-safe already, so no quoting is applied.
pub fn catalog_to_csv(records: &[ProductRecord]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&record.name);
        out.push(';');
        out.push_str(&record.description);
        out.push(';');
        out.push_str(&record.price);
        out.push(';');
        out.push_str(&record.product_url);
        out.push(';');
        out.push_str(&record.image_url);
        out.push('\n');
    }

    out
}

/// Write the accumulated CSV text to disk in a single operation.
pub fn write_catalog(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            description: "N/A".to_string(),
            price: price.to_string(),
            product_url: "https://tienda.example.es/p".to_string(),
            image_url: "N/A".to_string(),
        }
    }

    #[test]
    fn header_only_for_empty_catalog() {
        let csv = catalog_to_csv(&[]);
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn fields_joined_in_fixed_order() {
        let csv = catalog_to_csv(&[record("Queso Curado", "12.50")]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("Queso Curado;N/A;12.50;https://tienda.example.es/p;N/A")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn every_row_ends_with_a_newline() {
        let csv = catalog_to_csv(&[record("A", "1"), record("B", "2")]);
        assert!(csv.ends_with('\n'));
        assert_eq!(csv.lines().count(), 3);
    }
}
