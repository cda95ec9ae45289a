//! # Markup Renderer
//!
//! Produces one complete, self-contained HTML document per template id:
//! inline CSS, no external resources, UTF-8, and byte-deterministic for a
//! given (record, template) pair.
//!
//! Each of the ten skins owns its own stylesheet and arrangement, but the
//! data-bearing fragments — item rows, the three totals lines, the bank
//! block — are built by shared helpers. A skin can move or restyle a field;
//! it cannot drop one. That is what makes field-completeness parity a
//! structural property instead of a convention.

use crate::model::{display_date, InvoiceRecord};
use crate::template::TemplateId;
use crate::totals::{format_amount, format_number, line_total, Totals};

/// Render the full standalone document for one template.
pub fn render_html(record: &InvoiceRecord, template: TemplateId) -> String {
    log::debug!(
        "rendering html: template={} items={}",
        template,
        record.line_items.len()
    );
    let view = View::new(record);
    match template {
        TemplateId::Classic => classic(&view),
        TemplateId::Modern => modern(&view),
        TemplateId::Minimal => minimal(&view),
        TemplateId::Professional => professional(&view),
        TemplateId::Elegant => elegant(&view),
        TemplateId::Corporate => corporate(&view),
        TemplateId::Simple => simple(&view),
        TemplateId::Bold => bold(&view),
        TemplateId::Compact => compact(&view),
        TemplateId::Premium => premium(&view),
    }
}

/// Escape free-text fields for safe interpolation into markup.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Pre-escaped, pre-formatted field strings shared by all ten skins.
/// Computing these once up front means every skin interpolates the exact
/// same text for the same field.
pub(crate) struct View {
    pub vendor: String,
    pub number: String,
    pub date: String,
    pub company: String,
    pub address: String,
    pub ref_po: String,
    pub currency: String,
    pub tax_rate: String,
    pub tax_label: String,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub bank_name: String,
    pub account: String,
    pub swift: String,
    rows: Vec<RowView>,
}

struct RowView {
    material_no: String,
    description: String,
    qty: String,
    unit: String,
    price: String,
    total: String,
}

impl View {
    pub fn new(record: &InvoiceRecord) -> Self {
        let totals = Totals::compute(record);
        let currency = escape_html(&record.currency);
        View {
            vendor: escape_html(&record.vendor_name),
            number: escape_html(&record.invoice_number),
            date: escape_html(&display_date(&record.invoice_date)),
            company: escape_html(&record.bill_to.company_name),
            address: escape_html(&record.bill_to.address),
            ref_po: escape_html(&record.ref_po),
            tax_rate: format_number(record.tax_rate),
            tax_label: format!("Tax ({}%)", format_number(record.tax_rate)),
            subtotal: format!("{} {}", format_amount(totals.subtotal), currency),
            tax: format!("{} {}", format_amount(totals.tax), currency),
            total: format!("{} {}", format_amount(totals.total), currency),
            bank_name: escape_html(&record.bank_details.bank_name),
            account: escape_html(&record.bank_details.account),
            swift: escape_html(&record.bank_details.swift),
            currency,
            rows: record
                .line_items
                .iter()
                .map(|item| RowView {
                    material_no: escape_html(&item.material_no),
                    description: escape_html(&item.description),
                    qty: format_number(item.qty),
                    unit: escape_html(&item.unit),
                    price: format_amount(item.price),
                    total: format_amount(line_total(item)),
                })
                .collect(),
        }
    }

    /// `<tr>` rows with six cells (qty and unit separate).
    pub(crate) fn rows_six(&self, num_class: &str) -> String {
        self.rows
            .iter()
            .map(|r| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                     <td class=\"{nc}\">{}</td><td class=\"{nc}\">{}</td></tr>",
                    r.material_no,
                    r.description,
                    r.qty,
                    r.unit,
                    r.price,
                    r.total,
                    nc = num_class
                )
            })
            .collect()
    }

    /// `<tr>` rows with five cells: unit folded into the quantity cell.
    fn rows_five(&self, num_class: &str) -> String {
        self.rows
            .iter()
            .map(|r| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{} {}</td>\
                     <td class=\"{nc}\">{}</td><td class=\"{nc}\">{}</td></tr>",
                    r.material_no,
                    r.description,
                    r.qty,
                    r.unit,
                    r.price,
                    r.total,
                    nc = num_class
                )
            })
            .collect()
    }
}

/// Shared document shell: every skin gets the same head, its own stylesheet.
fn shell(number: &str, css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Invoice {number}</title>\n<style>\n{css}\n</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>"
    )
}

// ─── The ten skins ──────────────────────────────────────────────────

const CLASSIC_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #f5f5f5; padding: 20px; }
.invoice-container { max-width: 800px; margin: 0 auto; background: white; padding: 40px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
.header { display: flex; justify-content: space-between; margin-bottom: 30px; border-bottom: 2px solid #333; padding-bottom: 20px; }
.company-info h1 { font-size: 14px; color: #666; }
.invoice-title h2 { font-size: 28px; color: #333; text-align: right; }
.invoice-meta { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 30px; }
.meta-box { padding: 15px; background: #f9f9f9; border-radius: 4px; }
.meta-box h3 { font-size: 12px; color: #666; text-transform: uppercase; margin-bottom: 8px; }
.meta-box p { font-size: 14px; color: #333; line-height: 1.5; }
.meta-row { display: flex; justify-content: space-between; margin-top: 10px; padding-top: 10px; border-top: 1px solid #ddd; }
.items-table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
.items-table th { background: #333; color: white; padding: 12px; text-align: left; font-size: 12px; text-transform: uppercase; }
.items-table td { padding: 12px; border-bottom: 1px solid #ddd; font-size: 14px; }
.items-table tr:nth-child(even) { background: #f9f9f9; }
.text-right { text-align: right; }
.totals-section { display: flex; justify-content: flex-end; margin-bottom: 30px; }
.totals-box { width: 300px; }
.total-row { display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #ddd; }
.total-row.final { border-top: 2px solid #333; border-bottom: 2px solid #333; font-weight: bold; font-size: 16px; }
.bank-details { margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd; }
.bank-details h3 { font-size: 14px; color: #666; margin-bottom: 10px; }
.bank-details p { font-size: 13px; color: #333; line-height: 1.8; }";

fn classic(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="header">
    <div class="company-info"><h1>{vendor}</h1></div>
    <div class="invoice-title"><h2>INVOICE</h2></div>
  </div>
  <div class="invoice-meta">
    <div class="meta-box">
      <h3>Bill To:</h3>
      <p><strong>{company}</strong></p>
      <p>{address}</p>
    </div>
    <div class="meta-box">
      <div class="meta-row"><span>Invoice #</span><span><strong>{number}</strong></span></div>
      <div class="meta-row"><span>Invoice Date</span><span>{date}</span></div>
      <div class="meta-row"><span>Ref. PO</span><span>{ref_po}</span></div>
      <div class="meta-row"><span>Currency</span><span>{currency}</span></div>
    </div>
  </div>
  <table class="items-table">
    <thead><tr><th>Material No.</th><th>Description</th><th>Qty</th><th>Unit</th><th class="text-right">Price</th><th class="text-right">Total</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals-section">
    <div class="totals-box">
      <div class="total-row"><span>Subtotal</span><span>{subtotal}</span></div>
      <div class="total-row"><span>{tax_label}</span><span>{tax}</span></div>
      <div class="total-row final"><span>TOTAL</span><span>{total}</span></div>
    </div>
  </div>
  <div class="bank-details">
    <h3>Bank Details:</h3>
    <p><strong>Bank Name:</strong> {bank_name}<br><strong>Account:</strong> {account}<br><strong>SWIFT:</strong> {swift}</p>
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_six("text-right"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, CLASSIC_CSS, &body)
}

const MODERN_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Helvetica Neue', Arial, sans-serif; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 40px 20px; min-height: 100vh; }
.invoice-container { max-width: 800px; margin: 0 auto; background: white; border-radius: 16px; padding: 50px; box-shadow: 0 20px 60px rgba(0,0,0,0.3); }
.header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 40px; padding-bottom: 30px; border-bottom: 3px solid #667eea; }
.vendor-name { font-size: 18px; color: #667eea; font-weight: 600; }
.invoice-title { font-size: 42px; color: #333; font-weight: 300; letter-spacing: 2px; }
.invoice-meta { display: grid; grid-template-columns: 1fr 1fr; gap: 30px; margin-bottom: 40px; }
.bill-to-box { background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%); padding: 25px; border-radius: 12px; }
.bill-to-box h3 { color: #667eea; font-size: 12px; text-transform: uppercase; margin-bottom: 10px; letter-spacing: 1px; }
.bill-to-box .company { font-size: 18px; font-weight: 600; color: #333; margin-bottom: 8px; }
.bill-to-box .address { color: #666; }
.info-box { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; }
.info-item { background: #f8f9fa; padding: 15px; border-radius: 8px; border-left: 4px solid #667eea; }
.info-item label { display: block; font-size: 11px; color: #888; text-transform: uppercase; margin-bottom: 5px; }
.info-item span { font-size: 14px; color: #333; font-weight: 500; }
.items-table { width: 100%; border-collapse: separate; border-spacing: 0; margin-bottom: 30px; }
.items-table th { background: #667eea; color: white; padding: 15px; text-align: left; font-size: 12px; text-transform: uppercase; letter-spacing: 1px; }
.items-table th:first-child { border-radius: 8px 0 0 0; }
.items-table th:last-child { border-radius: 0 8px 0 0; }
.items-table td { padding: 15px; border-bottom: 1px solid #e0e0e0; font-size: 14px; }
.text-right { text-align: right; }
.totals { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 25px; border-radius: 12px; margin-left: auto; width: 350px; }
.total-row { display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid rgba(255,255,255,0.2); }
.total-row.final { border-top: 2px solid white; border-bottom: none; font-size: 20px; font-weight: bold; margin-top: 10px; padding-top: 15px; }
.bank-details { margin-top: 40px; padding: 25px; background: #f8f9fa; border-radius: 12px; }
.bank-details h3 { color: #667eea; font-size: 14px; margin-bottom: 15px; }
.bank-details p { line-height: 2; color: #555; }";

fn modern(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="header">
    <div class="vendor-name">{vendor}</div>
    <div class="invoice-title">INVOICE</div>
  </div>
  <div class="invoice-meta">
    <div class="bill-to-box">
      <h3>Bill To</h3>
      <p class="company">{company}</p>
      <p class="address">{address}</p>
    </div>
    <div class="info-box">
      <div class="info-item"><label>Invoice #</label><span>{number}</span></div>
      <div class="info-item"><label>Date</label><span>{date}</span></div>
      <div class="info-item"><label>Ref. PO</label><span>{ref_po}</span></div>
      <div class="info-item"><label>Currency</label><span>{currency}</span></div>
    </div>
  </div>
  <table class="items-table">
    <thead><tr><th>Material No.</th><th>Description</th><th>Qty</th><th>Unit</th><th class="text-right">Price</th><th class="text-right">Total</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals">
    <div class="total-row"><span>Subtotal</span><span>{subtotal}</span></div>
    <div class="total-row"><span>{tax_label}</span><span>{tax}</span></div>
    <div class="total-row final"><span>TOTAL</span><span>{total}</span></div>
  </div>
  <div class="bank-details">
    <h3>Bank Details</h3>
    <p><strong>Bank:</strong> {bank_name} | <strong>Account:</strong> {account} | <strong>SWIFT:</strong> {swift}</p>
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_six("text-right"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, MODERN_CSS, &body)
}

const MINIMAL_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #fff; padding: 60px; }
.invoice-container { max-width: 700px; margin: 0 auto; }
.header { margin-bottom: 60px; }
.vendor { font-size: 12px; color: #999; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 10px; }
.invoice-num { font-size: 48px; font-weight: 200; color: #000; }
.meta { display: flex; justify-content: space-between; margin-bottom: 50px; }
.bill-to { max-width: 250px; }
.bill-to h4 { font-size: 10px; color: #999; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 10px; }
.bill-to p { font-size: 14px; line-height: 1.6; color: #333; }
.details { text-align: right; }
.details p { font-size: 13px; color: #666; margin-bottom: 5px; }
.details p strong { color: #000; margin-right: 15px; }
.items { width: 100%; border-collapse: collapse; margin-bottom: 40px; }
.items th { text-align: left; padding: 15px 0; border-bottom: 2px solid #000; font-size: 11px; text-transform: uppercase; letter-spacing: 1px; color: #999; font-weight: 400; }
.items td { padding: 20px 0; border-bottom: 1px solid #eee; font-size: 14px; }
.items .num { text-align: right; }
.totals { text-align: right; margin-bottom: 50px; }
.totals p { font-size: 14px; color: #666; margin-bottom: 10px; }
.totals p.total { font-size: 24px; color: #000; font-weight: 300; margin-top: 20px; padding-top: 20px; border-top: 2px solid #000; }
.bank { font-size: 12px; color: #999; line-height: 1.8; }
.bank strong { color: #333; }";

fn minimal(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="header">
    <div class="vendor">{vendor}</div>
    <div class="invoice-num">Invoice</div>
  </div>
  <div class="meta">
    <div class="bill-to">
      <h4>Bill To</h4>
      <p><strong>{company}</strong><br>{address}</p>
    </div>
    <div class="details">
      <p><strong>#</strong> {number}</p>
      <p><strong>Date</strong> {date}</p>
      <p><strong>PO</strong> {ref_po}</p>
      <p><strong>Currency</strong> {currency}</p>
    </div>
  </div>
  <table class="items">
    <thead><tr><th>Item</th><th>Description</th><th>Qty</th><th class="num">Price</th><th class="num">Total</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals">
    <p>Subtotal {subtotal}</p>
    <p>{tax_label} {tax}</p>
    <p class="total">Total {total}</p>
  </div>
  <div class="bank">
    <strong>Bank:</strong> {bank_name} | <strong>Account:</strong> {account} | <strong>SWIFT:</strong> {swift}
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_five("num"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, MINIMAL_CSS, &body)
}

const PROFESSIONAL_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Georgia', serif; background: #f0f2f5; padding: 30px; }
.invoice-container { max-width: 850px; margin: 0 auto; background: white; padding: 50px; box-shadow: 0 4px 20px rgba(0,0,0,0.1); }
.top-bar { background: #1a365d; color: white; padding: 20px 50px; margin: -50px -50px 40px -50px; display: flex; justify-content: space-between; align-items: center; }
.top-bar .vendor { font-size: 16px; font-weight: 600; }
.top-bar .doc-type { font-size: 24px; text-transform: uppercase; letter-spacing: 3px; }
.content-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 40px; margin-bottom: 40px; }
.section { padding: 25px; background: #f8fafc; border-left: 4px solid #1a365d; }
.section h3 { font-size: 12px; color: #1a365d; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 15px; }
.section p { font-size: 15px; line-height: 1.6; color: #333; }
.info-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 15px; margin-bottom: 40px; }
.info-card { background: #1a365d; color: white; padding: 20px; text-align: center; }
.info-card label { display: block; font-size: 10px; text-transform: uppercase; opacity: 0.7; margin-bottom: 8px; }
.info-card span { font-size: 14px; font-weight: 600; }
.items-table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
.items-table th { background: #2d4a6f; color: white; padding: 15px; text-align: left; font-size: 12px; text-transform: uppercase; letter-spacing: 1px; }
.items-table td { padding: 15px; border-bottom: 1px solid #e2e8f0; font-size: 14px; }
.items-table tr:nth-child(even) { background: #f8fafc; }
.text-right { text-align: right; }
.totals-section { display: flex; justify-content: flex-end; }
.totals-box { width: 320px; background: #1a365d; color: white; padding: 25px; }
.total-row { display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid rgba(255,255,255,0.2); font-size: 14px; }
.total-row.final { border-top: 2px solid white; border-bottom: none; font-size: 20px; font-weight: bold; margin-top: 10px; }
.bank-section { margin-top: 40px; padding: 25px; background: #f8fafc; border: 1px solid #e2e8f0; }
.bank-section h3 { color: #1a365d; font-size: 14px; margin-bottom: 15px; }
.bank-section p { font-size: 13px; color: #555; line-height: 2; }";

fn professional(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="top-bar">
    <div class="vendor">{vendor}</div>
    <div class="doc-type">Tax Invoice</div>
  </div>
  <div class="content-grid">
    <div class="section">
      <h3>Bill To</h3>
      <p><strong>{company}</strong><br>{address}</p>
    </div>
    <div class="section">
      <h3>Ship To</h3>
      <p><strong>{company}</strong><br>{address}</p>
    </div>
  </div>
  <div class="info-grid">
    <div class="info-card"><label>Invoice #</label><span>{number}</span></div>
    <div class="info-card"><label>Date</label><span>{date}</span></div>
    <div class="info-card"><label>Ref. PO</label><span>{ref_po}</span></div>
    <div class="info-card"><label>Currency</label><span>{currency}</span></div>
  </div>
  <table class="items-table">
    <thead><tr><th>Material No.</th><th>Description</th><th>Qty</th><th>Unit</th><th class="text-right">Price</th><th class="text-right">Total</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals-section">
    <div class="totals-box">
      <div class="total-row"><span>Subtotal</span><span>{subtotal}</span></div>
      <div class="total-row"><span>{tax_label}</span><span>{tax}</span></div>
      <div class="total-row final"><span>TOTAL</span><span>{total}</span></div>
    </div>
  </div>
  <div class="bank-section">
    <h3>Payment Information</h3>
    <p><strong>Bank Name:</strong> {bank_name} | <strong>Account Number:</strong> {account} | <strong>SWIFT Code:</strong> {swift}</p>
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_six("text-right"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, PROFESSIONAL_CSS, &body)
}

const ELEGANT_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Playfair Display', 'Times New Roman', serif; background: linear-gradient(45deg, #f3e7e9 0%, #e3eeff 99%, #e3eeff 100%); padding: 40px; min-height: 100vh; }
.invoice-container { max-width: 800px; margin: 0 auto; background: white; padding: 60px; box-shadow: 0 10px 40px rgba(0,0,0,0.1); border-top: 6px solid #d4af37; }
.header { text-align: center; margin-bottom: 50px; padding-bottom: 30px; border-bottom: 1px solid #e0d5c5; }
.vendor-name { font-size: 14px; color: #8b7355; text-transform: uppercase; letter-spacing: 4px; margin-bottom: 15px; }
.invoice-title { font-size: 52px; color: #2c2416; font-weight: 400; font-style: italic; }
.meta-section { display: flex; justify-content: space-between; margin-bottom: 50px; }
.bill-to h4 { font-size: 11px; color: #8b7355; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 15px; font-family: sans-serif; }
.bill-to p { font-size: 16px; color: #2c2416; line-height: 1.8; }
.invoice-details { text-align: right; }
.detail-item { margin-bottom: 12px; }
.detail-item label { font-size: 10px; color: #8b7355; text-transform: uppercase; letter-spacing: 1px; font-family: sans-serif; display: block; margin-bottom: 3px; }
.detail-item span { font-size: 14px; color: #2c2416; }
.items-table { width: 100%; border-collapse: collapse; margin-bottom: 40px; }
.items-table th { padding: 20px 15px; text-align: left; font-size: 11px; color: #8b7355; text-transform: uppercase; letter-spacing: 2px; font-family: sans-serif; font-weight: 400; border-bottom: 2px solid #d4af37; }
.items-table td { padding: 20px 15px; border-bottom: 1px solid #f0e6d8; font-size: 15px; color: #2c2416; }
.text-right { text-align: right; }
.totals { text-align: right; margin-bottom: 40px; }
.totals-inner { display: inline-block; text-align: left; min-width: 280px; }
.total-row { display: flex; justify-content: space-between; padding: 12px 0; font-size: 15px; color: #5a4a3a; border-bottom: 1px solid #f0e6d8; }
.total-row.final { border-top: 3px double #d4af37; border-bottom: 3px double #d4af37; font-size: 22px; color: #2c2416; font-weight: 600; margin-top: 10px; padding: 15px 0; }
.bank-details { text-align: center; padding-top: 30px; border-top: 1px solid #e0d5c5; }
.bank-details h4 { font-size: 11px; color: #8b7355; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 15px; font-family: sans-serif; }
.bank-details p { font-size: 13px; color: #5a4a3a; line-height: 2; }";

fn elegant(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="header">
    <div class="vendor-name">{vendor}</div>
    <div class="invoice-title">Invoice</div>
  </div>
  <div class="meta-section">
    <div class="bill-to">
      <h4>Bill To</h4>
      <p><strong>{company}</strong><br>{address}</p>
    </div>
    <div class="invoice-details">
      <div class="detail-item"><label>Invoice Number</label><span>{number}</span></div>
      <div class="detail-item"><label>Date</label><span>{date}</span></div>
      <div class="detail-item"><label>Reference PO</label><span>{ref_po}</span></div>
      <div class="detail-item"><label>Currency</label><span>{currency}</span></div>
    </div>
  </div>
  <table class="items-table">
    <thead><tr><th>Material</th><th>Description</th><th>Quantity</th><th class="text-right">Price</th><th class="text-right">Amount</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals">
    <div class="totals-inner">
      <div class="total-row"><span>Subtotal</span><span>{subtotal}</span></div>
      <div class="total-row"><span>{tax_label}</span><span>{tax}</span></div>
      <div class="total-row final"><span>Total</span><span>{total}</span></div>
    </div>
  </div>
  <div class="bank-details">
    <h4>Payment Details</h4>
    <p><strong>Bank:</strong> {bank_name} | <strong>Account:</strong> {account} | <strong>SWIFT:</strong> {swift}</p>
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_five("text-right"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, ELEGANT_CSS, &body)
}

const CORPORATE_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #e8ecf1; padding: 30px; }
.invoice-container { max-width: 900px; margin: 0 auto; background: white; }
.header { background: #0d1b2a; color: white; padding: 40px; display: flex; justify-content: space-between; align-items: center; }
.header-left .vendor { font-size: 20px; font-weight: 600; margin-bottom: 5px; }
.header-left .tagline { font-size: 12px; opacity: 0.7; }
.header-right .doc-type { font-size: 36px; font-weight: 300; letter-spacing: 5px; }
.sub-header { background: #1b263b; color: white; padding: 20px 40px; display: flex; justify-content: space-between; }
.sub-header-item label { font-size: 10px; text-transform: uppercase; opacity: 0.6; display: block; margin-bottom: 3px; }
.sub-header-item span { font-size: 14px; font-weight: 500; }
.content { padding: 40px; }
.address-section { display: grid; grid-template-columns: 1fr 1fr; gap: 40px; margin-bottom: 40px; }
.address-box h4 { font-size: 12px; color: #415a77; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 15px; padding-bottom: 10px; border-bottom: 2px solid #415a77; }
.address-box p { font-size: 14px; line-height: 1.8; color: #333; }
.items-table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
.items-table th { background: #415a77; color: white; padding: 15px; text-align: left; font-size: 11px; text-transform: uppercase; letter-spacing: 1px; }
.items-table td { padding: 15px; border-bottom: 1px solid #e0e6ed; font-size: 14px; }
.items-table tr:nth-child(even) { background: #f5f7fa; }
.text-right { text-align: right; }
.totals-wrapper { display: flex; justify-content: flex-end; background: #f5f7fa; padding: 30px; }
.totals { width: 350px; }
.total-row { display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #d0d8e0; font-size: 14px; color: #555; }
.total-row.final { border-top: 3px solid #0d1b2a; border-bottom: none; font-size: 22px; color: #0d1b2a; font-weight: 700; margin-top: 10px; padding-top: 15px; }
.bank-footer { background: #0d1b2a; color: white; padding: 25px 40px; }
.bank-footer h4 { font-size: 11px; text-transform: uppercase; opacity: 0.6; margin-bottom: 10px; }
.bank-footer p { font-size: 13px; opacity: 0.9; }";

fn corporate(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="header">
    <div class="header-left">
      <div class="vendor">{vendor}</div>
      <div class="tagline">Trusted Business Partner</div>
    </div>
    <div class="header-right">
      <div class="doc-type">INVOICE</div>
    </div>
  </div>
  <div class="sub-header">
    <div class="sub-header-item"><label>Invoice #</label><span>{number}</span></div>
    <div class="sub-header-item"><label>Date</label><span>{date}</span></div>
    <div class="sub-header-item"><label>Ref. PO</label><span>{ref_po}</span></div>
    <div class="sub-header-item"><label>Currency</label><span>{currency}</span></div>
  </div>
  <div class="content">
    <div class="address-section">
      <div class="address-box">
        <h4>Bill To</h4>
        <p><strong>{company}</strong><br>{address}</p>
      </div>
      <div class="address-box">
        <h4>Payment Terms</h4>
        <p>Net 30 Days<br>Please include invoice number on payment</p>
      </div>
    </div>
    <table class="items-table">
      <thead><tr><th>Material No.</th><th>Description</th><th>Qty</th><th>Unit</th><th class="text-right">Price</th><th class="text-right">Total</th></tr></thead>
      <tbody>{rows}</tbody>
    </table>
    <div class="totals-wrapper">
      <div class="totals">
        <div class="total-row"><span>Subtotal</span><span>{subtotal}</span></div>
        <div class="total-row"><span>{tax_label}</span><span>{tax}</span></div>
        <div class="total-row final"><span>Amount Due</span><span>{total}</span></div>
      </div>
    </div>
  </div>
  <div class="bank-footer">
    <h4>Bank Transfer Details</h4>
    <p><strong>Bank:</strong> {bank_name} | <strong>Account:</strong> {account} | <strong>SWIFT:</strong> {swift}</p>
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_six("text-right"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, CORPORATE_CSS, &body)
}

const SIMPLE_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: Arial, sans-serif; background: white; padding: 50px; }
.invoice { max-width: 700px; margin: 0 auto; }
h1 { font-size: 36px; margin-bottom: 10px; }
.vendor { color: #666; margin-bottom: 30px; }
.info { margin-bottom: 30px; }
.info-row { display: flex; margin-bottom: 8px; }
.info-row label { width: 120px; color: #666; }
.bill-to { margin-bottom: 30px; padding: 20px; background: #f5f5f5; }
.bill-to h3 { font-size: 14px; color: #666; margin-bottom: 10px; }
table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
th { background: #333; color: white; }
.num { text-align: right; }
.totals { width: 300px; margin-left: auto; }
.totals div { display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #ddd; }
.totals .grand { font-weight: bold; font-size: 18px; border-top: 2px solid #333; border-bottom: 2px solid #333; margin-top: 5px; }
.bank { margin-top: 40px; font-size: 12px; color: #666; }";

fn simple(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice">
  <h1>Invoice</h1>
  <p class="vendor">{vendor}</p>
  <div class="info">
    <div class="info-row"><label>Invoice #:</label><span>{number}</span></div>
    <div class="info-row"><label>Date:</label><span>{date}</span></div>
    <div class="info-row"><label>Ref. PO:</label><span>{ref_po}</span></div>
    <div class="info-row"><label>Currency:</label><span>{currency}</span></div>
  </div>
  <div class="bill-to">
    <h3>Bill To:</h3>
    <p><strong>{company}</strong><br>{address}</p>
  </div>
  <table>
    <thead><tr><th>Item</th><th>Description</th><th>Qty</th><th class="num">Price</th><th class="num">Total</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals">
    <div><span>Subtotal:</span><span>{subtotal}</span></div>
    <div><span>{tax_label}:</span><span>{tax}</span></div>
    <div class="grand"><span>Total:</span><span>{total}</span></div>
  </div>
  <div class="bank">
    <strong>Bank:</strong> {bank_name} | <strong>Account:</strong> {account} | <strong>SWIFT:</strong> {swift}
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_five("num"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, SIMPLE_CSS, &body)
}

const BOLD_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Impact', 'Arial Black', sans-serif; background: #ff6b6b; padding: 30px; }
.invoice-container { max-width: 800px; margin: 0 auto; background: white; padding: 50px; }
.header { text-align: center; margin-bottom: 40px; }
.vendor { font-size: 16px; color: #ff6b6b; letter-spacing: 3px; margin-bottom: 10px; }
.title { font-size: 72px; color: #333; letter-spacing: 8px; }
.meta-bar { background: #333; color: white; padding: 20px; display: flex; justify-content: space-around; margin-bottom: 40px; }
.meta-item { text-align: center; }
.meta-item label { display: block; font-size: 10px; text-transform: uppercase; opacity: 0.6; margin-bottom: 5px; }
.meta-item span { font-size: 18px; font-weight: bold; }
.bill-to { text-align: center; margin-bottom: 40px; padding: 30px; background: #f8f8f8; }
.bill-to h3 { font-size: 14px; color: #ff6b6b; margin-bottom: 15px; }
.bill-to p { font-size: 20px; }
.items-table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
.items-table th { background: #ff6b6b; color: white; padding: 18px; text-align: left; font-size: 14px; text-transform: uppercase; letter-spacing: 2px; }
.items-table td { padding: 18px; border-bottom: 3px solid #eee; font-size: 16px; }
.num { text-align: right; }
.totals { background: #333; color: white; padding: 30px; }
.totals-row { display: flex; justify-content: space-between; padding: 15px 0; font-size: 18px; border-bottom: 1px solid #555; }
.totals-row.final { font-size: 32px; border-top: 4px solid #ff6b6b; border-bottom: none; margin-top: 10px; padding-top: 20px; }
.bank { text-align: center; margin-top: 30px; padding-top: 30px; border-top: 4px solid #ff6b6b; }
.bank p { font-size: 14px; color: #666; }";

fn bold(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="header">
    <div class="vendor">{vendor}</div>
    <div class="title">INVOICE</div>
  </div>
  <div class="meta-bar">
    <div class="meta-item"><label>Invoice #</label><span>{number}</span></div>
    <div class="meta-item"><label>Date</label><span>{date}</span></div>
    <div class="meta-item"><label>Ref. PO</label><span>{ref_po}</span></div>
    <div class="meta-item"><label>Currency</label><span>{currency}</span></div>
  </div>
  <div class="bill-to">
    <h3>BILL TO</h3>
    <p><strong>{company}</strong><br>{address}</p>
  </div>
  <table class="items-table">
    <thead><tr><th>Material</th><th>Description</th><th>Qty</th><th class="num">Price</th><th class="num">Total</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals">
    <div class="totals-row"><span>SUBTOTAL</span><span>{subtotal}</span></div>
    <div class="totals-row"><span>{tax_label_upper}</span><span>{tax}</span></div>
    <div class="totals-row final"><span>TOTAL</span><span>{total}</span></div>
  </div>
  <div class="bank">
    <p><strong>BANK:</strong> {bank_name} | <strong>ACCOUNT:</strong> {account} | <strong>SWIFT:</strong> {swift}</p>
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_five("num"),
        subtotal = v.subtotal,
        tax_label_upper = v.tax_label.to_uppercase(),
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, BOLD_CSS, &body)
}

const COMPACT_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', sans-serif; background: white; padding: 20px; font-size: 12px; }
.invoice { max-width: 800px; margin: 0 auto; }
.header { display: flex; justify-content: space-between; border-bottom: 2px solid #333; padding-bottom: 15px; margin-bottom: 20px; }
.header-left .vendor { font-size: 11px; color: #666; }
.header-left .title { font-size: 28px; font-weight: bold; }
.header-right { text-align: right; font-size: 11px; }
.header-right div { margin-bottom: 3px; }
.bill-to { margin-bottom: 20px; }
.bill-to h4 { font-size: 9px; text-transform: uppercase; color: #666; margin-bottom: 5px; }
.bill-to p { font-size: 12px; line-height: 1.4; }
table { width: 100%; border-collapse: collapse; font-size: 11px; margin-bottom: 20px; }
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
th { background: #f5f5f5; font-weight: 600; }
.num { text-align: right; }
.totals { width: 250px; margin-left: auto; font-size: 11px; }
.totals div { display: flex; justify-content: space-between; padding: 5px 0; }
.totals .final { font-weight: bold; font-size: 14px; border-top: 2px solid #333; margin-top: 5px; padding-top: 8px; }
.bank { margin-top: 30px; padding-top: 15px; border-top: 1px solid #ddd; font-size: 10px; color: #666; }";

fn compact(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice">
  <div class="header">
    <div class="header-left">
      <div class="vendor">{vendor}</div>
      <div class="title">INVOICE</div>
    </div>
    <div class="header-right">
      <div><strong>#</strong> {number}</div>
      <div><strong>Date:</strong> {date}</div>
      <div><strong>PO:</strong> {ref_po}</div>
      <div><strong>Currency:</strong> {currency}</div>
    </div>
  </div>
  <div class="bill-to">
    <h4>Bill To</h4>
    <p><strong>{company}</strong><br>{address}</p>
  </div>
  <table>
    <thead><tr><th>Material</th><th>Description</th><th>Qty</th><th>Unit</th><th class="num">Price</th><th class="num">Total</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
  <div class="totals">
    <div><span>Subtotal:</span><span>{subtotal}</span></div>
    <div><span>{tax_label}:</span><span>{tax}</span></div>
    <div class="final"><span>TOTAL</span><span>{total}</span></div>
  </div>
  <div class="bank">
    Bank: {bank_name} | Account: {account} | SWIFT: {swift}
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        rows = v.rows_six("num"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, COMPACT_CSS, &body)
}

const PREMIUM_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Montserrat', 'Segoe UI', sans-serif; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%); padding: 40px; min-height: 100vh; }
.invoice-container { max-width: 850px; margin: 0 auto; background: white; border-radius: 20px; overflow: hidden; box-shadow: 0 25px 80px rgba(0,0,0,0.4); }
.top-section { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 50px; }
.header-content { display: flex; justify-content: space-between; align-items: flex-start; }
.vendor-info .vendor { font-size: 14px; opacity: 0.8; letter-spacing: 2px; margin-bottom: 10px; }
.vendor-info .title { font-size: 48px; font-weight: 300; letter-spacing: 4px; }
.invoice-badge { background: rgba(255,255,255,0.2); padding: 20px 30px; border-radius: 15px; text-align: center; }
.invoice-badge .number { font-size: 24px; font-weight: 600; }
.invoice-badge .label { font-size: 10px; opacity: 0.7; text-transform: uppercase; letter-spacing: 2px; }
.content { padding: 60px 50px 40px; }
.meta-cards { display: grid; grid-template-columns: repeat(4, 1fr); gap: 20px; margin-bottom: 40px; }
.meta-card { background: #f8f9fa; padding: 20px; border-radius: 12px; text-align: center; border: 1px solid #e9ecef; }
.meta-card label { display: block; font-size: 10px; color: #6c757d; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 8px; }
.meta-card span { font-size: 14px; color: #333; font-weight: 600; }
.bill-to-section { background: linear-gradient(135deg, #f8f9fa 0%, #e9ecef 100%); padding: 30px; border-radius: 15px; margin-bottom: 40px; }
.bill-to-section h4 { font-size: 11px; color: #6c757d; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 15px; }
.bill-to-section p { font-size: 18px; color: #333; line-height: 1.6; }
.items-table { width: 100%; border-collapse: separate; border-spacing: 0; margin-bottom: 30px; }
.items-table th { background: #495057; color: white; padding: 18px; text-align: left; font-size: 11px; text-transform: uppercase; letter-spacing: 1px; }
.items-table th:first-child { border-radius: 12px 0 0 0; }
.items-table th:last-child { border-radius: 0 12px 0 0; }
.items-table td { padding: 18px; border-bottom: 1px solid #e9ecef; font-size: 14px; }
.num { text-align: right; }
.totals-section { display: flex; justify-content: flex-end; }
.totals-card { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; border-radius: 15px; width: 350px; }
.total-line { display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid rgba(255,255,255,0.2); font-size: 14px; }
.total-line.final { border-top: 2px solid white; border-bottom: none; font-size: 24px; font-weight: 600; margin-top: 10px; padding-top: 15px; }
.bank-section { margin-top: 40px; padding: 25px; background: #f8f9fa; border-radius: 12px; text-align: center; }
.bank-section h4 { font-size: 11px; color: #6c757d; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 15px; }
.bank-section p { font-size: 13px; color: #495057; }";

fn premium(v: &View) -> String {
    let body = format!(
        r#"<div class="invoice-container">
  <div class="top-section">
    <div class="header-content">
      <div class="vendor-info">
        <div class="vendor">{vendor}</div>
        <div class="title">Invoice</div>
      </div>
      <div class="invoice-badge">
        <div class="number">{number}</div>
        <div class="label">Invoice Number</div>
      </div>
    </div>
  </div>
  <div class="content">
    <div class="meta-cards">
      <div class="meta-card"><label>Invoice Date</label><span>{date}</span></div>
      <div class="meta-card"><label>Reference PO</label><span>{ref_po}</span></div>
      <div class="meta-card"><label>Currency</label><span>{currency}</span></div>
      <div class="meta-card"><label>Tax Rate</label><span>{tax_rate}%</span></div>
    </div>
    <div class="bill-to-section">
      <h4>Bill To</h4>
      <p><strong>{company}</strong><br>{address}</p>
    </div>
    <table class="items-table">
      <thead><tr><th>Material No.</th><th>Description</th><th>Qty</th><th>Unit</th><th class="num">Price</th><th class="num">Total</th></tr></thead>
      <tbody>{rows}</tbody>
    </table>
    <div class="totals-section">
      <div class="totals-card">
        <div class="total-line"><span>Subtotal</span><span>{subtotal}</span></div>
        <div class="total-line"><span>{tax_label}</span><span>{tax}</span></div>
        <div class="total-line final"><span>Total</span><span>{total}</span></div>
      </div>
    </div>
    <div class="bank-section">
      <h4>Payment Information</h4>
      <p><strong>Bank:</strong> {bank_name} | <strong>Account:</strong> {account} | <strong>SWIFT:</strong> {swift}</p>
    </div>
  </div>
</div>"#,
        vendor = v.vendor,
        company = v.company,
        address = v.address,
        number = v.number,
        date = v.date,
        ref_po = v.ref_po,
        currency = v.currency,
        tax_rate = v.tax_rate,
        rows = v.rows_six("num"),
        subtotal = v.subtotal,
        tax_label = v.tax_label,
        tax = v.tax,
        total = v.total,
        bank_name = v.bank_name,
        account = v.account,
        swift = v.swift,
    );
    shell(&v.number, PREMIUM_CSS, &body)
}
