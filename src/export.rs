//! # Export Controller
//!
//! Pairs each renderer with its download filename. The naming contract is
//! `Invoice_<invoiceNumber>_<templateId>.<ext>` with the invoice number
//! taken verbatim from the record.

use crate::html::render_html;
use crate::model::InvoiceRecord;
use crate::pdf::render_pdf;
use crate::template::TemplateId;

/// One finished artifact, ready to be written or offered as a download.
#[derive(Debug, Clone)]
pub struct Export {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Export the standalone HTML document.
pub fn export_markup(record: &InvoiceRecord, template: TemplateId) -> Export {
    let html = render_html(record, template);
    let export = Export {
        filename: filename(record, template, "html"),
        bytes: html.into_bytes(),
    };
    log::info!("exported {} ({} bytes)", export.filename, export.bytes.len());
    export
}

/// Export the paginated PDF document.
pub fn export_paginated(record: &InvoiceRecord, template: TemplateId) -> Export {
    let export = Export {
        filename: filename(record, template, "pdf"),
        bytes: render_pdf(record, template),
    };
    log::info!("exported {} ({} bytes)", export.filename, export.bytes.len());
    export
}

fn filename(record: &InvoiceRecord, template: TemplateId, ext: &str) -> String {
    format!("Invoice_{}_{}.{}", record.invoice_number, template, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_filename_contract() {
        let export = export_markup(&InvoiceRecord::seed(), TemplateId::Elegant);
        assert_eq!(export.filename, "Invoice_INV-2526-035_elegant.html");
        assert!(!export.bytes.is_empty());
    }

    #[test]
    fn test_paginated_filename_contract() {
        let export = export_paginated(&InvoiceRecord::seed(), TemplateId::Bold);
        assert_eq!(export.filename, "Invoice_INV-2526-035_bold.pdf");
        assert!(export.bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn test_invoice_number_used_verbatim() {
        let mut record = InvoiceRecord::seed();
        record.invoice_number = "2026/001 draft".to_string();
        let export = export_markup(&record, TemplateId::Classic);
        assert_eq!(export.filename, "Invoice_2026/001 draft_classic.html");
    }
}
