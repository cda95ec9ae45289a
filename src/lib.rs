//! # Facture
//!
//! An invoice document-generation engine.
//!
//! One [`InvoiceRecord`], one [`TemplateId`], three renderers that never
//! disagree: the standalone HTML document, the paginated PDF, and the inline
//! preview fragment all read the same record through the same arithmetic and
//! the same display formatting, so an amount shown on screen is the amount
//! that lands in the downloaded file.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]     — Invoice record: parties, line items, bank details
//!       ↓
//!   [totals]    — Derived arithmetic, display formatting
//!       ↓
//!   [template]  — The fixed ten-entry catalog
//!       ↓
//!   [html] / [pdf] / [preview]   — The three renderers
//!       ↓
//!   [export]    — Artifact + download filename
//! ```

pub mod error;
pub mod export;
pub mod html;
pub mod model;
pub mod pdf;
pub mod preview;
pub mod template;
pub mod totals;

pub use error::FactureError;
pub use export::{export_markup, export_paginated, Export};
pub use html::render_html;
pub use model::InvoiceRecord;
pub use pdf::render_pdf;
pub use preview::render_preview;
pub use template::{catalog, TemplateId};
pub use totals::Totals;

/// Render an invoice described as JSON to PDF bytes.
///
/// This is the primary one-call entry point. Takes record JSON and a
/// template id string and returns the raw bytes of a valid PDF file.
pub fn render_json(json: &str, template: &str) -> Result<Vec<u8>, FactureError> {
    let record = InvoiceRecord::from_json(json)?;
    let template: TemplateId = template.parse()?;
    Ok(render_pdf(&record, template))
}
