//! # Export Module
//!
//! Stateless serializers rendering the item collection into downloadable
//! text for the export modal.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Export Flow                                      │
//! │                                                                         │
//! │  User clicks Export ──► format modal ──► ExportFormat                  │
//! │                                              │                          │
//! │                          ┌───────────────────┴──────────────────┐      │
//! │                          ▼                                      ▼      │
//! │                     to_text(&items)                       to_csv(&items)│
//! │                          │                                      │      │
//! │                          ▼                                      ▼      │
//! │                     lista.txt                              lista.csv   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both serializers are pure functions of the item slice: deterministic,
//! side-effect-free, and total for any collection the store can produce.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ExportError;
use crate::types::Item;

// =============================================================================
// Export Format
// =============================================================================

/// The formats offered by the export modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Csv,
}

impl ExportFormat {
    /// Suggested download file name for this format.
    pub const fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "lista.txt",
            ExportFormat::Csv => "lista.csv",
        }
    }
}

// =============================================================================
// Plain Text
// =============================================================================

/// Renders the list as plain text, one line per item, 1-indexed:
///
/// ```text
/// 1. Milk (2x) - R$ 10,00
/// 2. Bread (1x) -
/// ```
///
/// The price segment is the BRL-formatted line total, or empty when the
/// item has no price.
pub fn to_text(items: &[Item]) -> String {
    let mut out = String::new();

    for (i, item) in items.iter().enumerate() {
        let line_total = match item.unit_price {
            Some(_) => item.line_total().to_string(),
            None => String::new(),
        };
        out.push_str(&format!(
            "{}. {} ({}x) - {}",
            i + 1,
            item.description,
            item.quantity,
            line_total
        ));
        out.push('\n');
    }

    out
}

// =============================================================================
// CSV
// =============================================================================

/// Renders the list as CSV with header `Description,Category,Value,Quantity,Unit`.
///
/// - `Value` is the unit price as a plain decimal (`5.00`), empty when absent
/// - Category and Unit render as their display labels
/// - Quoting and escaping follow RFC 4180 via the `csv` crate
///
/// The error path exists only because the writer API is fallible; writing
/// to an in-memory buffer cannot fail for a well-formed item list.
pub fn to_csv(items: &[Item]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["Description", "Category", "Value", "Quantity", "Unit"])?;

    for item in items {
        let value = item
            .unit_price
            .map(|price| price.to_decimal_string())
            .unwrap_or_default();
        let quantity = item.quantity.to_string();

        writer.write_record([
            item.description.as_str(),
            item.category.label(),
            value.as_str(),
            quantity.as_str(),
            item.unit.label(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Category, Unit};

    fn item(description: &str, quantity: i64, price_cents: Option<i64>) -> Item {
        Item {
            description: description.to_string(),
            category: Category::General,
            unit_price: price_cents.map(Money::from_cents),
            quantity,
            unit: Unit::Unit,
            marked: false,
            edited: false,
        }
    }

    #[test]
    fn test_to_text_formats_lines() {
        let items = vec![item("Milk", 2, Some(500)), item("Bread", 1, None)];

        let text = to_text(&items);

        assert_eq!(text, "1. Milk (2x) - R$ 10,00\n2. Bread (1x) - \n");
    }

    #[test]
    fn test_to_text_empty_list() {
        assert_eq!(to_text(&[]), "");
    }

    #[test]
    fn test_to_csv_header_and_rows() {
        let items = vec![item("Milk", 2, Some(500)), item("Bread", 1, None)];

        let csv = to_csv(&items).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Description,Category,Value,Quantity,Unit"));
        assert_eq!(lines.next(), Some("Milk,General,5.00,2,Unit"));
        assert_eq!(lines.next(), Some("Bread,General,,1,Unit"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_to_csv_quotes_separators() {
        let items = vec![item("Rice, brown", 1, Some(1250))];

        let csv = to_csv(&items).unwrap();

        assert!(csv.contains("\"Rice, brown\",General,12.50,1,Unit"));
    }

    #[test]
    fn test_to_csv_escapes_quotes() {
        let items = vec![item("Juice \"natural\"", 1, None)];

        let csv = to_csv(&items).unwrap();

        assert!(csv.contains("\"Juice \"\"natural\"\"\",General,,1,Unit"));
    }

    #[test]
    fn test_to_csv_renders_labels() {
        let mut it = item("Chicken", 1, Some(2099));
        it.category = Category::Meat;
        it.unit = Unit::Kg;

        let csv = to_csv(&[it]).unwrap();

        assert!(csv.contains("Chicken,Meat,20.99,1,Kg"));
    }

    #[test]
    fn test_export_format_file_names() {
        assert_eq!(ExportFormat::Text.file_name(), "lista.txt");
        assert_eq!(ExportFormat::Csv.file_name(), "lista.csv");
    }
}
