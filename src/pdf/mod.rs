//! # Paginated Renderer
//!
//! Renders an invoice straight to PDF bytes, without going through the
//! markup renderer. Pages are A4 portrait with a 15mm margin.
//!
//! Layout is template-keyed only in the header region: `classic`, `modern`,
//! `minimal`, `bold`, and `premium` get bespoke header treatments, the other
//! five share the classic-style header with their own table colors. Below
//! the header every template runs the same pipeline: item table, totals
//! block, bank details.

mod metrics;
mod page;
mod table;
mod writer;

pub use writer::{DocInfo, PAGE_HEIGHT, PAGE_WIDTH};

use crate::model::{display_date, InvoiceRecord};
use crate::template::TemplateId;
use crate::totals::{format_amount, format_number, Totals};

use page::{mm, Align, PageComposer, Rgb};
use table::TableStyle;
use writer::PdfWriter;

const PURPLE: Rgb = Rgb(102, 126, 234);
const CORAL: Rgb = Rgb(255, 107, 107);
const DARK: Rgb = Rgb(50, 50, 50);

/// Render the record through one template to finished PDF bytes.
pub fn render_pdf(record: &InvoiceRecord, template: TemplateId) -> Vec<u8> {
    log::debug!(
        "rendering pdf: invoice={} template={}",
        record.invoice_number,
        template
    );

    let mut composer = PageComposer::new();

    let (table_start, style) = match template {
        TemplateId::Modern => {
            header_modern(&mut composer, record);
            (mm(85.0), TableStyle { header_fill: PURPLE, grid: true, zebra: None, ..Default::default() })
        }
        TemplateId::Minimal => {
            header_minimal(&mut composer, record);
            (mm(85.0), TableStyle { header_fill: Rgb(245, 245, 245), header_text: DARK, zebra: None, ..Default::default() })
        }
        TemplateId::Bold => {
            header_bold(&mut composer, record);
            (mm(105.0), TableStyle { header_fill: CORAL, ..Default::default() })
        }
        TemplateId::Premium => {
            header_premium(&mut composer, record);
            (mm(85.0), TableStyle { header_fill: PURPLE, ..Default::default() })
        }
        _ => {
            // classic itself plus the five layouts that share its header
            header_classic(&mut composer, record);
            (mm(85.0), TableStyle::default())
        }
    };

    let next_y = table::draw(&mut composer, record, table_start, &style);
    composer.set_y(next_y);
    totals_block(&mut composer, record);

    let info = DocInfo {
        title: format!("Invoice {}", record.invoice_number),
        author: record.vendor_name.clone(),
        subject: format!("Invoice ({} template)", template),
    };
    PdfWriter::write(&composer.finish(), &info)
}

/// Traditional header: vendor top-left, INVOICE and document meta top-right,
/// a full-width rule, then the bill-to block.
fn header_classic(c: &mut PageComposer, record: &InvoiceRecord) {
    let right = c.width() - c.margin;

    c.text(&record.vendor_name, c.margin, mm(25.0), 18.0, true, DARK, Align::Left);
    c.text("INVOICE", right, mm(25.0), 22.0, true, Rgb::GREY, Align::Right);
    c.line(c.margin, mm(32.0), right, mm(32.0), 1.0, DARK);

    meta_right(c, record, mm(40.0), Rgb::BLACK);
    bill_to(c, record, mm(40.0), DARK);
}

/// Colored banner across the top with white text.
fn header_modern(c: &mut PageComposer, record: &InvoiceRecord) {
    c.fill_rect(0.0, 0.0, c.width(), mm(50.0), PURPLE);

    let right = c.width() - c.margin;
    c.text(&record.vendor_name, c.margin, mm(22.0), 18.0, true, Rgb::WHITE, Align::Left);
    c.text("INVOICE", right, mm(22.0), 22.0, true, Rgb::WHITE, Align::Right);
    c.text(&record.invoice_number, right, mm(30.0), 10.0, false, Rgb::WHITE, Align::Right);
    c.text(&display_date(&record.invoice_date), right, mm(36.0), 10.0, false, Rgb::WHITE, Align::Right);
    c.text(
        &format!("Ref PO: {}", record.ref_po),
        right,
        mm(42.0),
        10.0,
        false,
        Rgb::WHITE,
        Align::Right,
    );

    bill_to(c, record, mm(58.0), DARK);
}

/// Airy type, one hairline, no fills.
fn header_minimal(c: &mut PageComposer, record: &InvoiceRecord) {
    c.text(&record.vendor_name, c.margin, mm(25.0), 16.0, false, DARK, Align::Left);
    c.line(c.margin, mm(30.0), c.width() - c.margin, mm(30.0), 0.5, Rgb(200, 200, 200));

    meta_right(c, record, mm(38.0), Rgb::GREY);
    bill_to(c, record, mm(38.0), Rgb::GREY);
}

/// Two bands: a coral masthead and a dark meta strip above the table.
fn header_bold(c: &mut PageComposer, record: &InvoiceRecord) {
    c.fill_rect(0.0, 0.0, c.width(), mm(45.0), CORAL);
    c.text(&record.vendor_name, c.margin, mm(22.0), 20.0, true, Rgb::WHITE, Align::Left);
    c.text("INVOICE", c.width() - c.margin, mm(22.0), 22.0, true, Rgb::WHITE, Align::Right);
    c.text(
        &format!("# {}", record.invoice_number),
        c.width() - c.margin,
        mm(32.0),
        11.0,
        true,
        Rgb::WHITE,
        Align::Right,
    );

    bill_to(c, record, mm(55.0), DARK);

    c.fill_rect(0.0, mm(75.0), c.width(), mm(20.0), DARK);
    let strip_base = mm(87.0);
    c.text(
        &format!("Date: {}", display_date(&record.invoice_date)),
        c.margin,
        strip_base,
        10.0,
        false,
        Rgb::WHITE,
        Align::Left,
    );
    c.text(
        &format!("Ref PO: {}", record.ref_po),
        c.width() / 2.0,
        strip_base,
        10.0,
        false,
        Rgb::WHITE,
        Align::Center,
    );
    c.text(
        &format!("Currency: {}", record.currency),
        c.width() - c.margin,
        strip_base,
        10.0,
        false,
        Rgb::WHITE,
        Align::Right,
    );
}

/// Full-bleed banner with a rounded number badge on the right.
fn header_premium(c: &mut PageComposer, record: &InvoiceRecord) {
    c.fill_rect(0.0, 0.0, c.width(), mm(50.0), PURPLE);
    c.text(&record.vendor_name, c.margin, mm(25.0), 18.0, true, Rgb::WHITE, Align::Left);
    c.text(
        &display_date(&record.invoice_date),
        c.margin,
        mm(33.0),
        10.0,
        false,
        Rgb::WHITE,
        Align::Left,
    );

    let badge_x = c.width() - c.margin - mm(50.0);
    c.fill_rounded_rect(badge_x, mm(15.0), mm(50.0), mm(25.0), mm(5.0), Rgb::WHITE);
    let badge_center = badge_x + mm(25.0);
    c.text("INVOICE", badge_center, mm(24.0), 9.0, true, PURPLE, Align::Center);
    c.text(&record.invoice_number, badge_center, mm(32.0), 11.0, true, DARK, Align::Center);

    bill_to(c, record, mm(58.0), DARK);
    c.text(
        &format!("Ref PO: {}   Tax Rate: {}%", record.ref_po, format_number(record.tax_rate)),
        c.width() - c.margin,
        mm(64.0),
        10.0,
        false,
        Rgb::GREY,
        Align::Right,
    );
}

/// Right-hand meta column used by the headers without a banner.
fn meta_right(c: &mut PageComposer, record: &InvoiceRecord, y: f64, color: Rgb) {
    let right = c.width() - c.margin;
    let lines = [
        format!("Invoice No: {}", record.invoice_number),
        format!("Date: {}", display_date(&record.invoice_date)),
        format!("Ref PO: {}", record.ref_po),
        format!("Currency: {}", record.currency),
    ];
    for (i, line) in lines.iter().enumerate() {
        c.text(line, right, y + mm(6.0) * i as f64, 10.0, false, color, Align::Right);
    }
}

fn bill_to(c: &mut PageComposer, record: &InvoiceRecord, y: f64, accent: Rgb) {
    c.text("Bill To", c.margin, y, 10.0, true, accent, Align::Left);
    c.text(
        &record.bill_to.company_name,
        c.margin,
        y + mm(6.0),
        11.0,
        true,
        Rgb::BLACK,
        Align::Left,
    );
    c.text(&record.bill_to.address, c.margin, y + mm(12.0), 9.0, false, Rgb::GREY, Align::Left);
}

/// Subtotal, tax, rule, grand total, then the bank details footer. Moves to
/// a fresh page first if the whole block would not fit.
fn totals_block(c: &mut PageComposer, record: &InvoiceRecord) {
    c.advance(mm(10.0));
    c.ensure_room(mm(45.0));
    let y = c.y();

    let totals = Totals::compute(record);
    let label_x = c.width() - c.margin - mm(70.0);
    let value_x = c.width() - c.margin;
    let amount = |v: f64| format!("{} {}", format_amount(v), record.currency);

    c.text("Subtotal:", label_x, y, 10.0, false, Rgb::BLACK, Align::Left);
    c.text(&amount(totals.subtotal), value_x, y, 10.0, false, Rgb::BLACK, Align::Right);

    let tax_label = format!("Tax ({}%):", format_number(record.tax_rate));
    c.text(&tax_label, label_x, y + mm(7.0), 10.0, false, Rgb::BLACK, Align::Left);
    c.text(&amount(totals.tax), value_x, y + mm(7.0), 10.0, false, Rgb::BLACK, Align::Right);

    c.line(label_x, y + mm(12.0), value_x, y + mm(12.0), 1.0, DARK);

    c.text("TOTAL:", label_x, y + mm(20.0), 14.0, true, Rgb::BLACK, Align::Left);
    c.text(&amount(totals.total), value_x, y + mm(20.0), 14.0, true, Rgb::BLACK, Align::Right);

    let bank = &record.bank_details;
    c.text(
        &format!("Bank: {}   A/C: {}", bank.bank_name, bank.account),
        c.margin,
        y + mm(35.0),
        9.0,
        false,
        Rgb::GREY,
        Align::Left,
    );
    c.text(
        &format!("SWIFT: {}", bank.swift),
        c.margin,
        y + mm(42.0),
        9.0,
        false,
        Rgb::GREY,
        Align::Left,
    );
}
