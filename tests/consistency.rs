//! Cross-renderer consistency tests.
//!
//! The whole point of routing every renderer through the same arithmetic
//! and formatting helpers is that the preview, the HTML document, and the
//! PDF can never show different numbers. These tests pin that down, along
//! with the export naming contract and the fail-fast template lookup.

use facture::model::InvoiceRecord;
use facture::template::{catalog, TemplateId};
use facture::{export_markup, export_paginated, render_html, render_json, render_pdf, render_preview};

use miniz_oxide::inflate::decompress_to_vec_zlib;

// ─── Helpers ────────────────────────────────────────────────────

fn pdf_text(bytes: &[u8]) -> String {
    let mut text = String::new();
    let mut rest = bytes;
    // Match the dictionary terminator too, so `endstream` cannot match.
    while let Some(start) = rest.windows(10).position(|w| w == b">>\nstream\n") {
        let body = &rest[start + 10..];
        let end = body
            .windows(10)
            .position(|w| w == b"\nendstream")
            .expect("unterminated stream");
        let inflated = decompress_to_vec_zlib(&body[..end]).expect("stream must inflate");
        text.push_str(&String::from_utf8_lossy(&inflated));
        rest = &body[end..];
    }
    text
}

// ─── Tests ──────────────────────────────────────────────────────

#[test]
fn test_all_three_renderers_show_the_same_amounts() {
    let record = InvoiceRecord::seed();
    let amounts = ["22585.00 INR", "4065.30 INR", "26650.30 INR"];

    for id in TemplateId::ALL {
        let html = render_html(&record, id);
        let preview = render_preview(&record, id);
        let pdf = pdf_text(&render_pdf(&record, id));
        for amount in amounts {
            assert!(html.contains(amount), "{id} html: {amount}");
            assert!(preview.contains(amount), "{id} preview: {amount}");
            assert!(pdf.contains(amount), "{id} pdf: {amount}");
        }
    }
}

#[test]
fn test_all_three_renderers_show_the_same_date() {
    let mut record = InvoiceRecord::seed();
    record.invoice_date = "2025-11-03".to_string();

    let html = render_html(&record, TemplateId::Elegant);
    let preview = render_preview(&record, TemplateId::Elegant);
    let pdf = pdf_text(&render_pdf(&record, TemplateId::Elegant));
    for out in [html.as_str(), preview.as_str(), pdf.as_str()] {
        assert!(out.contains("3, Nov 2025"));
        assert!(!out.contains("2025-11-03"));
    }
}

#[test]
fn test_edit_flows_through_every_renderer() {
    let mut record = InvoiceRecord::seed();
    record.update_line_item("1", |item| item.price = 100.0);
    // subtotal 1000 + 22085 = 23085, tax 4155.30, total 27240.30
    for id in TemplateId::ALL {
        assert!(render_html(&record, id).contains("27240.30 INR"), "{id}");
    }
    assert!(render_preview(&record, TemplateId::Simple).contains("27240.30 INR"));
    assert!(pdf_text(&render_pdf(&record, TemplateId::Simple)).contains("27240.30 INR"));
}

#[test]
fn test_export_naming_contract() {
    let record = InvoiceRecord::seed();
    for id in TemplateId::ALL {
        let markup = export_markup(&record, id);
        let paginated = export_paginated(&record, id);
        assert_eq!(markup.filename, format!("Invoice_INV-2526-035_{id}.html"));
        assert_eq!(paginated.filename, format!("Invoice_INV-2526-035_{id}.pdf"));
    }
}

#[test]
fn test_catalog_drives_every_renderer() {
    let record = InvoiceRecord::seed();
    assert_eq!(catalog().len(), 10);
    for descriptor in catalog() {
        // lookup-then-render never panics for a catalog id
        let id: TemplateId = descriptor.id.as_str().parse().unwrap();
        assert!(!render_html(&record, id).is_empty());
    }
}

#[test]
fn test_unknown_template_fails_fast() {
    let err = "vaporwave".parse::<TemplateId>().unwrap_err();
    assert!(err.to_string().contains("vaporwave"));

    let json = serde_json::to_string(&InvoiceRecord::seed()).unwrap();
    assert!(render_json(&json, "vaporwave").is_err());
}

#[test]
fn test_render_json_end_to_end() {
    let json = serde_json::to_string(&InvoiceRecord::seed()).unwrap();
    let bytes = render_json(&json, "modern").unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
}

#[test]
fn test_malformed_json_reports_a_hint() {
    let err = render_json("{\"vendorName\": ", "classic").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("failed to parse invoice record"));
}
