//! The line-item table shared by all paginated layouts.
//!
//! Every template renders the same six columns; templates differ only in the
//! header band color and the row treatment (zebra stripes vs. grid lines).
//! Cell text wraps within its column width and the row grows to fit the
//! tallest cell. The table owns pagination: when a row would cross the
//! bottom margin the composer breaks the page and the header band is
//! repeated on the new one.

use crate::model::InvoiceRecord;
use crate::totals::{format_amount, format_number, line_total};

use super::metrics;
use super::page::{Align, PageComposer, Rgb};

const HEADERS: [&str; 6] = ["Material No.", "Description", "Qty", "Unit", "Price", "Total"];
const COL_FRACS: [f64; 6] = [0.16, 0.34, 0.09, 0.09, 0.16, 0.16];
/// Right-align the numeric columns.
const COL_RIGHT: [bool; 6] = [false, false, true, false, true, true];

const HEADER_HEIGHT: f64 = 24.0;
/// Height of a single-line row; each extra wrapped line adds LINE_HEIGHT.
const ROW_HEIGHT: f64 = 21.0;
const LINE_HEIGHT: f64 = 11.0;
const CELL_PAD: f64 = 6.0;
const BODY_SIZE: f64 = 9.0;

/// Per-template table treatment.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub header_fill: Rgb,
    pub header_text: Rgb,
    /// Fill for every second body row; `None` disables striping.
    pub zebra: Option<Rgb>,
    /// Draw a rule under every body row instead of striping.
    pub grid: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            header_fill: Rgb(50, 50, 50),
            header_text: Rgb::WHITE,
            zebra: Some(Rgb(245, 245, 245)),
            grid: false,
        }
    }
}

/// Draw the full item table starting at `start_y` (top-origin points).
/// Returns the y just below the last row, on whichever page it landed.
pub fn draw(composer: &mut PageComposer, record: &InvoiceRecord, start_y: f64, style: &TableStyle) -> f64 {
    let width = composer.width() - 2.0 * composer.margin;
    let edges = column_edges(composer.margin, width);

    composer.set_y(start_y);
    draw_header(composer, &edges, style);

    for (i, item) in record.line_items.iter().enumerate() {
        let cells = [
            item.material_no.clone(),
            item.description.clone(),
            format_number(item.qty),
            item.unit.clone(),
            format_amount(item.price),
            format_amount(line_total(item)),
        ];
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let cell_width = edges[col + 1] - edges[col] - 2.0 * CELL_PAD;
                wrap_text(cell, cell_width)
            })
            .collect();
        let line_count = wrapped.iter().map(|lines| lines.len()).max().unwrap_or(1);
        let row_height = ROW_HEIGHT + (line_count as f64 - 1.0) * LINE_HEIGHT;

        if composer.ensure_room(row_height + composer.margin) {
            draw_header(composer, &edges, style);
        }

        let y = composer.y();
        if let Some(stripe) = style.zebra {
            if i % 2 == 1 {
                composer.fill_rect(composer.margin, y, width, row_height, stripe);
            }
        }
        if style.grid {
            composer.line(
                composer.margin,
                y + row_height,
                composer.margin + width,
                y + row_height,
                0.5,
                Rgb(220, 220, 220),
            );
        }

        for (col, lines) in wrapped.iter().enumerate() {
            let (x, align) = cell_anchor(&edges, col);
            for (line_no, line) in lines.iter().enumerate() {
                let baseline = y + ROW_HEIGHT - 7.0 + line_no as f64 * LINE_HEIGHT;
                composer.text(line, x, baseline, BODY_SIZE, false, Rgb::BLACK, align);
            }
        }

        composer.advance(row_height);
    }

    composer.y()
}

fn draw_header(composer: &mut PageComposer, edges: &[f64; 7], style: &TableStyle) {
    let y = composer.y();
    let width = edges[6] - edges[0];
    composer.fill_rect(edges[0], y, width, HEADER_HEIGHT, style.header_fill);

    let baseline = y + HEADER_HEIGHT - 8.0;
    for (col, header) in HEADERS.iter().enumerate() {
        let (x, align) = cell_anchor(edges, col);
        composer.text(header, x, baseline, BODY_SIZE, true, style.header_text, align);
    }

    composer.advance(HEADER_HEIGHT);
}

/// Greedy word wrap against the Helvetica metrics. A word wider than the
/// column is broken mid-word rather than allowed to overrun.
fn wrap_text(text: &str, max_width: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        for fragment in split_to_width(word, max_width) {
            let joined_width = if current.is_empty() {
                metrics::text_width(&fragment, false, BODY_SIZE)
            } else {
                metrics::text_width(&current, false, BODY_SIZE)
                    + metrics::char_width(' ', false, BODY_SIZE)
                    + metrics::text_width(&fragment, false, BODY_SIZE)
            };
            if joined_width > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&fragment);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_to_width(word: &str, max_width: f64) -> Vec<String> {
    if metrics::text_width(word, false, BODY_SIZE) <= max_width {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0;
    for ch in word.chars() {
        let advance = metrics::char_width(ch, false, BODY_SIZE);
        if width + advance > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(ch);
        width += advance;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

fn column_edges(margin: f64, width: f64) -> [f64; 7] {
    let mut edges = [0.0; 7];
    edges[0] = margin;
    for i in 0..6 {
        edges[i + 1] = edges[i] + COL_FRACS[i] * width;
    }
    edges
}

fn cell_anchor(edges: &[f64; 7], col: usize) -> (f64, Align) {
    if COL_RIGHT[col] {
        (edges[col + 1] - CELL_PAD, Align::Right)
    } else {
        (edges[col] + CELL_PAD, Align::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvoiceRecord;
    use crate::pdf::page::mm;

    #[test]
    fn test_columns_span_content_width() {
        let edges = column_edges(mm(15.0), 500.0);
        assert!((edges[6] - (mm(15.0) + 500.0)).abs() < 1e-9);
        let fracs_sum: f64 = COL_FRACS.iter().sum();
        assert!((fracs_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_advances_past_all_rows() {
        let mut composer = PageComposer::new();
        let record = InvoiceRecord::seed();
        let next_y = draw(&mut composer, &record, mm(85.0), &TableStyle::default());
        // Seed cells are all single-line.
        let expected = mm(85.0) + HEADER_HEIGHT + 2.0 * ROW_HEIGHT;
        assert!((next_y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_long_table_breaks_pages() {
        let mut composer = PageComposer::new();
        let mut record = InvoiceRecord::seed();
        for _ in 0..60 {
            record.add_line_item();
        }
        draw(&mut composer, &record, mm(85.0), &TableStyle::default());
        assert!(composer.finish().len() >= 2);
    }

    #[test]
    fn test_row_totals_formatted() {
        let mut composer = PageComposer::new();
        draw(&mut composer, &InvoiceRecord::seed(), mm(85.0), &TableStyle::default());
        let stream = composer.finish().remove(0);
        assert!(stream.contains("(500.00) Tj"));
        assert!(stream.contains("(22085.00) Tj"));
    }

    #[test]
    fn test_wrap_text_keeps_lines_within_width() {
        let text = "Polyethylene Glycols Industrial Grade High Viscosity Compound";
        let max = 80.0;
        let lines = wrap_text(text, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                metrics::text_width(line, false, BODY_SIZE) <= max,
                "line too wide: {line:?}"
            );
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let lines = wrap_text("CH-9003-EXTENDED-BATCH-IDENTIFIER-0001", 40.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics::text_width(line, false, BODY_SIZE) <= 40.0);
        }
    }

    #[test]
    fn test_empty_cell_is_one_line() {
        assert_eq!(wrap_text("", 100.0), vec![String::new()]);
    }

    #[test]
    fn test_wrapped_row_grows_height() {
        let mut record = InvoiceRecord::seed();
        record.line_items.truncate(1);
        record.line_items[0].description =
            "Polyethylene Glycols Industrial Grade High Viscosity Extended Specification Compound For Laboratory And Process Use"
                .to_string();
        let mut composer = PageComposer::new();
        let next_y = draw(&mut composer, &record, mm(85.0), &TableStyle::default());
        // Wrapping must add at least one extra line to the row.
        assert!(next_y >= mm(85.0) + HEADER_HEIGHT + ROW_HEIGHT + LINE_HEIGHT);
    }
}
