//! # Invoice Record Model
//!
//! The input representation for the rendering engine. A single mutable
//! [`InvoiceRecord`] is owned by the surrounding form/UI collaborator and
//! passed by reference into the renderers, which treat it as an immutable
//! snapshot. Field names serialize as camelCase so record JSON matches the
//! shape the form layer speaks (`vendorName`, `billTo`, `lineItems`, ...).
//!
//! Derived monetary values (line total, subtotal, tax, total) are never
//! stored here — they are recomputed on every render by [`crate::totals`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::FactureError;

/// One billable row on the invoice.
///
/// `id` is only used for identity while the form edits the record; it is
/// never rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub material_no: String,
    pub description: String,
    pub qty: f64,
    pub unit: String,
    pub price: f64,
}

/// Receiving party of a bank transfer, rendered in every template's
/// bank-details block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub bank_name: String,
    pub account: String,
    pub swift: String,
}

/// The invoiced party.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTo {
    pub company_name: String,
    pub address: String,
}

/// A complete invoice ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub vendor_name: String,
    /// Free-form identifier; not validated for uniqueness or format.
    pub invoice_number: String,
    /// ISO calendar date (`YYYY-MM-DD`). Displayed via [`display_date`].
    pub invoice_date: String,
    pub bill_to: BillTo,
    pub ref_po: String,
    /// Free-text currency code or symbol, suffixed to every amount.
    pub currency: String,
    pub line_items: Vec<LineItem>,
    /// Flat percentage, e.g. 18 means 18%.
    pub tax_rate: f64,
    pub bank_details: BankDetails,
}

impl InvoiceRecord {
    /// The fixed record every editing session starts from.
    pub fn seed() -> Self {
        InvoiceRecord {
            vendor_name: "New_Domestic Customer US 6 (Returns)".to_string(),
            invoice_number: "INV-2526-035".to_string(),
            invoice_date: "2026-01-29".to_string(),
            bill_to: BillTo {
                company_name: "Nestle Limited".to_string(),
                address: "Noida City, sector 15, 700052".to_string(),
            },
            ref_po: "4500000344".to_string(),
            currency: "INR".to_string(),
            line_items: vec![
                LineItem {
                    id: "1".to_string(),
                    material_no: "CH-9003_1".to_string(),
                    description: "Polyethylene Glycols".to_string(),
                    qty: 10.0,
                    unit: "PC".to_string(),
                    price: 50.00,
                },
                LineItem {
                    id: "2".to_string(),
                    material_no: "504".to_string(),
                    description: "Copper Oxide_New".to_string(),
                    qty: 10.0,
                    unit: "PC".to_string(),
                    price: 2208.50,
                },
            ],
            tax_rate: 18.0,
            bank_details: BankDetails {
                bank_name: "Sample Bank".to_string(),
                account: "9988776655".to_string(),
                swift: "SAMPLE01".to_string(),
            },
        }
    }

    /// Parse a record from JSON at the input boundary.
    pub fn from_json(json: &str) -> Result<Self, FactureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply a targeted edit to the line item with the given id.
    pub fn update_line_item(&mut self, id: &str, edit: impl FnOnce(&mut LineItem)) {
        if let Some(item) = self.line_items.iter_mut().find(|i| i.id == id) {
            edit(item);
        }
    }

    /// Append a fresh blank line item and return its id.
    pub fn add_line_item(&mut self) -> String {
        let id = self.next_line_item_id();
        self.line_items.push(LineItem {
            id: id.clone(),
            material_no: String::new(),
            description: String::new(),
            qty: 1.0,
            unit: "PC".to_string(),
            price: 0.0,
        });
        id
    }

    /// Remove a line item by id. The last remaining item is never removed;
    /// the request is dropped silently, matching the form's removal rule.
    pub fn remove_line_item(&mut self, id: &str) {
        if self.line_items.len() > 1 {
            self.line_items.retain(|i| i.id != id);
        }
    }

    fn next_line_item_id(&self) -> String {
        let max = self
            .line_items
            .iter()
            .filter_map(|i| i.id.parse::<u64>().ok())
            .max()
            .unwrap_or(self.line_items.len() as u64);
        (max + 1).to_string()
    }
}

/// Render an ISO date as `D, Mon YYYY` (e.g. "29, Jan 2026"): day of month
/// without a leading zero, three-letter month. All three renderers go
/// through this one function so displayed dates never diverge.
///
/// Input that does not parse as `YYYY-MM-DD` is returned verbatim.
pub fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}, {} {}", d.day(), d.format("%b"), d.year()),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2026-01-29"), "29, Jan 2026");
        assert_eq!(display_date("2025-12-03"), "3, Dec 2025");
    }

    #[test]
    fn test_display_date_passes_garbage_through() {
        assert_eq!(display_date("next tuesday"), "next tuesday");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn test_seed_round_trips_through_json() {
        let seed = InvoiceRecord::seed();
        let json = serde_json::to_string(&seed).unwrap();
        assert!(json.contains("\"vendorName\""));
        assert!(json.contains("\"lineItems\""));
        assert!(json.contains("\"billTo\""));
        let back = InvoiceRecord::from_json(&json).unwrap();
        assert_eq!(back.invoice_number, "INV-2526-035");
        assert_eq!(back.line_items.len(), 2);
    }

    #[test]
    fn test_remove_keeps_last_item() {
        let mut record = InvoiceRecord::seed();
        record.remove_line_item("1");
        assert_eq!(record.line_items.len(), 1);
        // Sole remaining item survives further removal attempts.
        record.remove_line_item("2");
        assert_eq!(record.line_items.len(), 1);
        assert_eq!(record.line_items[0].id, "2");
    }

    #[test]
    fn test_add_line_item_gets_fresh_id() {
        let mut record = InvoiceRecord::seed();
        let id = record.add_line_item();
        assert_eq!(id, "3");
        assert_eq!(record.line_items.len(), 3);
        assert_eq!(record.line_items[2].unit, "PC");
        assert_eq!(record.line_items[2].qty, 1.0);
    }

    #[test]
    fn test_update_line_item_targets_by_id() {
        let mut record = InvoiceRecord::seed();
        record.update_line_item("2", |item| item.price = 99.0);
        assert_eq!(record.line_items[1].price, 99.0);
        assert_eq!(record.line_items[0].price, 50.0);
    }
}
