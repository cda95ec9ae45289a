//! Derived invoice arithmetic.
//!
//! Pure functions of an [`InvoiceRecord`]. Every renderer computes totals
//! through this module and formats them through [`format_amount`], which is
//! what keeps the HTML, PDF, and preview outputs numerically identical.
//!
//! Intermediate sums are never rounded; rounding happens once, at display
//! time, to exactly two decimals.

use crate::model::{InvoiceRecord, LineItem};

/// Subtotal, tax, and grand total for one record snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Totals {
    /// Compute all derived values. Never fails: non-finite quantities,
    /// prices, or tax rates contribute zero rather than poisoning the
    /// whole document.
    pub fn compute(record: &InvoiceRecord) -> Self {
        let subtotal: f64 = record.line_items.iter().map(line_total).sum();
        let tax = subtotal * finite(record.tax_rate) / 100.0;
        Totals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// `qty * price` for one row.
pub fn line_total(item: &LineItem) -> f64 {
    finite(item.qty) * finite(item.price)
}

/// Display formatting for monetary values: two decimals, no grouping,
/// no currency awareness.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Display formatting for quantities and the tax-rate percentage: whole
/// numbers lose the trailing `.0`, everything else keeps its natural form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn finite(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
