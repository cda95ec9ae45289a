//! # Preview Renderer
//!
//! Produces the lightweight HTML fragment the editing surface embeds while
//! the record is being typed. Unlike [`crate::html`] it emits no document
//! shell and no per-template stylesheet: the host page styles the fragment
//! through the `invoice-preview` and `preview-<id>` class hooks, which is
//! what lets a template switch restyle the preview without re-rendering.
//!
//! The fragment is built from the same [`View`] as the full markup renderer,
//! so every displayed string (date, amounts, tax label) is byte-identical
//! across both.

use crate::html::View;
use crate::model::InvoiceRecord;
use crate::template::TemplateId;

/// Render the live-preview fragment for one record and template.
pub fn render_preview(record: &InvoiceRecord, template: TemplateId) -> String {
    log::debug!(
        "rendering preview: invoice={} template={}",
        record.invoice_number,
        template
    );

    let v = View::new(record);
    format!(
        r#"<div class="invoice-preview preview-{id}">
  <div class="preview-header">
    <div class="preview-vendor">
      <h2>{vendor}</h2>
      <p class="preview-date">{date}</p>
    </div>
    <div class="preview-meta">
      <h3>INVOICE</h3>
      <p class="preview-number">{number}</p>
      <p>Ref PO: {ref_po}</p>
      <p>Currency: {currency}</p>
    </div>
  </div>
  <div class="preview-billto">
    <h4>Bill To</h4>
    <p class="preview-company">{company}</p>
    <p class="preview-address">{address}</p>
  </div>
  <table class="preview-items">
    <thead>
      <tr><th>Material No.</th><th>Description</th><th class="num">Qty</th><th>Unit</th><th class="num">Price</th><th class="num">Total</th></tr>
    </thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="preview-totals">
    <div class="preview-line"><span>Subtotal</span><span>{subtotal}</span></div>
    <div class="preview-line"><span>{tax_label}</span><span>{tax}</span></div>
    <div class="preview-line preview-grand"><span>Total</span><span>{total}</span></div>
  </div>
  <div class="preview-bank">
    <p>Bank: {bank_name}</p>
    <p>A/C: {account} &middot; SWIFT: {swift}</p>
  </div>
</div>"#,
        id = template,
        vendor = v.vendor,
        date = v.date,
        number = v.number,
        ref_po = v.ref_po,
        currency = v.currency,
        company = v.company,
        address = v.address,
        rows = v.rows_six("num"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_has_no_document_shell() {
        let out = render_preview(&InvoiceRecord::seed(), TemplateId::Classic);
        assert!(out.starts_with("<div class=\"invoice-preview preview-classic\">"));
        assert!(!out.contains("<!DOCTYPE"));
        assert!(!out.contains("<style"));
    }

    #[test]
    fn test_template_switch_only_changes_class_hook() {
        let record = InvoiceRecord::seed();
        let classic = render_preview(&record, TemplateId::Classic);
        let premium = render_preview(&record, TemplateId::Premium);
        assert!(premium.contains("preview-premium"));
        assert_eq!(
            classic.replace("preview-classic", "preview-premium"),
            premium
        );
    }

    #[test]
    fn test_all_record_fields_present() {
        let out = render_preview(&InvoiceRecord::seed(), TemplateId::Minimal);
        for needle in [
            "New_Domestic Customer US 6 (Returns)",
            "INV-2526-035",
            "29, Jan 2026",
            "Nestle Limited",
            "4500000344",
            "Copper Oxide_New",
            "22585.00 INR",
            "26650.30 INR",
            "SAMPLE01",
        ] {
            assert!(out.contains(needle), "missing {needle}");
        }
    }
}
