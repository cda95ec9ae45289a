//! Integration tests for the markup renderer.
//!
//! These exercise every catalog template end to end and verify:
//! - Each output is a complete standalone HTML document
//! - Every record field appears in every template
//! - Rendering is deterministic
//! - User-supplied content is escaped

use facture::model::InvoiceRecord;
use facture::render_html;
use facture::template::TemplateId;

// ─── Helpers ────────────────────────────────────────────────────

/// Every string of the seed record that must survive into the markup,
/// including the amounts with their currency suffix.
fn required_fields() -> Vec<&'static str> {
    vec![
        "New_Domestic Customer US 6 (Returns)",
        "INV-2526-035",
        "29, Jan 2026",
        "Nestle Limited",
        "Noida City, sector 15, 700052",
        "4500000344",
        "CH-9003_1",
        "Polyethylene Glycols",
        "504",
        "Copper Oxide_New",
        "50.00",
        "2208.50",
        "500.00",
        "22085.00",
        "22585.00 INR",
        "4065.30 INR",
        "26650.30 INR",
        "Sample Bank",
        "9988776655",
        "SAMPLE01",
    ]
}

// ─── Tests ──────────────────────────────────────────────────────

#[test]
fn test_every_template_carries_every_field() {
    let record = InvoiceRecord::seed();
    for id in TemplateId::ALL {
        let html = render_html(&record, id);
        for needle in required_fields() {
            assert!(html.contains(needle), "{id}: missing {needle:?}");
        }
    }
}

#[test]
fn test_output_is_a_standalone_document() {
    let record = InvoiceRecord::seed();
    for id in TemplateId::ALL {
        let html = render_html(&record, id);
        assert!(html.starts_with("<!DOCTYPE html>"), "{id}");
        assert!(html.contains("<style>"), "{id}: stylesheet must be inline");
        assert!(!html.contains("http://"), "{id}: no external fetches");
        assert!(!html.contains("https://"), "{id}: no external fetches");
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let record = InvoiceRecord::seed();
    for id in TemplateId::ALL {
        assert_eq!(render_html(&record, id), render_html(&record, id), "{id}");
    }
}

#[test]
fn test_templates_actually_differ() {
    let record = InvoiceRecord::seed();
    let outputs: Vec<String> = TemplateId::ALL
        .iter()
        .map(|id| render_html(&record, *id))
        .collect();
    for i in 0..outputs.len() {
        for j in (i + 1)..outputs.len() {
            assert_ne!(
                outputs[i], outputs[j],
                "{} and {} rendered identically",
                TemplateId::ALL[i],
                TemplateId::ALL[j]
            );
        }
    }
}

#[test]
fn test_markup_in_record_fields_is_escaped() {
    let mut record = InvoiceRecord::seed();
    record.vendor_name = "<script>alert('x')</script>".to_string();
    record.bill_to.company_name = "Smith & Sons \"Ltd\"".to_string();
    for id in TemplateId::ALL {
        let html = render_html(&record, id);
        assert!(!html.contains("<script>alert"), "{id}");
        assert!(html.contains("&lt;script&gt;"), "{id}");
        assert!(html.contains("Smith &amp; Sons &quot;Ltd&quot;"), "{id}");
    }
}

#[test]
fn test_added_item_shows_up() {
    let mut record = InvoiceRecord::seed();
    let id = record.add_line_item();
    record.update_line_item(&id, |item| {
        item.material_no = "XX-1".to_string();
        item.description = "Granulated Sulphur".to_string();
        item.qty = 3.0;
        item.price = 12.5;
    });
    let html = render_html(&record, TemplateId::Compact);
    assert!(html.contains("Granulated Sulphur"));
    assert!(html.contains("37.50"));
    // subtotal 22585 + 37.5
    assert!(html.contains("22622.50 INR"));
}
