//! Integration tests for the paginated renderer.
//!
//! These exercise the full path from record to PDF bytes and verify:
//! - Output is structurally valid PDF 1.7
//! - The drawn text carries the record fields and computed totals
//! - Long item lists paginate and repeat the table header
//! - The totals block never straddles a page boundary

use facture::model::InvoiceRecord;
use facture::render_pdf;
use facture::template::TemplateId;

use miniz_oxide::inflate::decompress_to_vec_zlib;

// ─── Helpers ────────────────────────────────────────────────────

fn assert_valid_pdf(bytes: &[u8], context: &str) {
    assert!(bytes.starts_with(b"%PDF-1.7"), "{context}: header");
    assert!(bytes.windows(5).any(|w| w == b"%%EOF"), "{context}: eof");
    assert!(bytes.windows(4).any(|w| w == b"xref"), "{context}: xref");
    assert!(
        bytes.windows(7).any(|w| w == b"trailer"),
        "{context}: trailer"
    );
}

/// Inflate every FlateDecode content stream and return them in page order.
/// The needle includes the dictionary terminator so `endstream` markers
/// cannot match.
fn page_streams(bytes: &[u8]) -> Vec<String> {
    let mut streams = Vec::new();
    let mut rest = bytes;
    while let Some(start) = find(rest, b">>\nstream\n") {
        let body = &rest[start + 10..];
        let end = find(body, b"\nendstream").expect("unterminated stream");
        let inflated = decompress_to_vec_zlib(&body[..end]).expect("stream must inflate");
        streams.push(String::from_utf8_lossy(&inflated).into_owned());
        rest = &body[end..];
    }
    streams
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
}

fn page_count(bytes: &[u8]) -> usize {
    let text = String::from_utf8_lossy(bytes);
    text.matches("/Type /Page /Parent").count()
}

// ─── Tests ──────────────────────────────────────────────────────

#[test]
fn test_every_template_produces_valid_pdf() {
    let record = InvoiceRecord::seed();
    for id in TemplateId::ALL {
        let bytes = render_pdf(&record, id);
        assert_valid_pdf(&bytes, id.as_str());
        assert_eq!(page_count(&bytes), 1, "{id}: seed record fits one page");
    }
}

#[test]
fn test_drawn_text_carries_record_and_totals() {
    let record = InvoiceRecord::seed();
    for id in TemplateId::ALL {
        let text = page_streams(&render_pdf(&record, id)).concat();
        // Some templates label these fields ("Date: ..."), so match the
        // value itself rather than a whole Tj operand.
        for needle in [
            "INV-2526-035",
            "29, Jan 2026",
            "Nestle Limited",
            "Copper Oxide_New",
            "2208.50",
            "22585.00 INR",
            "4065.30 INR",
            "26650.30 INR",
            "SWIFT: SAMPLE01",
        ] {
            assert!(text.contains(needle), "{id}: missing {needle}");
        }
    }
}

#[test]
fn test_parens_in_vendor_name_are_escaped() {
    let bytes = render_pdf(&InvoiceRecord::seed(), TemplateId::Classic);
    let text = page_streams(&bytes).concat();
    assert!(text.contains("New_Domestic Customer US 6 \\(Returns\\)"));
}

#[test]
fn test_long_invoice_paginates_and_repeats_header() {
    let mut record = InvoiceRecord::seed();
    for _ in 0..60 {
        let id = record.add_line_item();
        record.update_line_item(&id, |item| {
            item.material_no = format!("M-{id}");
            item.description = "Filler Compound".to_string();
            item.qty = 2.0;
            item.price = 10.0;
        });
    }

    let bytes = render_pdf(&record, TemplateId::Compact);
    assert_valid_pdf(&bytes, "compact long");
    assert!(page_count(&bytes) >= 2);

    let streams = page_streams(&bytes);
    let pages_with_header = streams
        .iter()
        .filter(|s| s.contains("(Material No.) Tj"))
        .count();
    assert!(pages_with_header >= 2, "header must repeat after a break");
}

#[test]
fn test_totals_block_lands_after_last_row() {
    let bytes = render_pdf(&InvoiceRecord::seed(), TemplateId::Classic);
    let text = page_streams(&bytes).concat();
    let last_row = text.find("(22085.00) Tj").expect("last row total");
    let grand = text.find("(26650.30 INR) Tj").expect("grand total");
    assert!(grand > last_row);
}

#[test]
fn test_totals_never_straddle_a_page() {
    // Enough rows that the table ends just above the bottom margin.
    for extra in 25..40 {
        let mut record = InvoiceRecord::seed();
        for _ in 0..extra {
            record.add_line_item();
        }
        let bytes = render_pdf(&record, TemplateId::Classic);
        let streams = page_streams(&bytes);
        let totals_pages = streams
            .iter()
            .filter(|s| s.contains("(TOTAL:) Tj"))
            .count();
        assert_eq!(totals_pages, 1, "extra={extra}");
    }
}

#[test]
fn test_long_description_wraps_within_its_column() {
    let long = "Polyethylene Glycols Industrial Grade High Viscosity Extended Specification Compound For Laboratory And Process Use";
    let mut record = InvoiceRecord::seed();
    record.update_line_item("1", |item| item.description = long.to_string());

    let bytes = render_pdf(&record, TemplateId::Classic);
    assert_valid_pdf(&bytes, "wrapped description");
    let text = page_streams(&bytes).concat();

    // The description must be split across several Tj runs, never drawn
    // as one run that would overrun the Qty column.
    assert!(!text.contains(&format!("({long}) Tj")));
    assert!(text.contains("Polyethylene"));
    assert!(text.contains("Laboratory"));
    // The neighbouring numeric cells still render.
    assert!(text.contains("(500.00) Tj"));
}

#[test]
fn test_non_ascii_currency_transcoded_to_winansi() {
    let mut record = InvoiceRecord::seed();
    record.currency = "\u{20AC}".to_string(); // €

    let bytes = render_pdf(&record, TemplateId::Modern);
    assert_valid_pdf(&bytes, "euro currency");
    let text = page_streams(&bytes).concat();

    // CP1252 byte 0x80 as an octal escape, not raw UTF-8.
    assert!(text.contains("26650.30 \\200"));
    assert!(!text.contains('\u{20AC}'));
    assert!(!text.contains('\u{FFFD}'));
}

#[test]
fn test_empty_item_list_still_renders() {
    let mut record = InvoiceRecord::seed();
    record.line_items.clear();
    let bytes = render_pdf(&record, TemplateId::Modern);
    assert_valid_pdf(&bytes, "empty items");
    let text = page_streams(&bytes).concat();
    assert!(text.contains("(0.00 INR) Tj"));
}
