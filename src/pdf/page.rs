//! Page composition primitives.
//!
//! [`PageComposer`] accumulates PDF content-stream operators for one page at
//! a time and hands the finished streams to the writer. Callers work in a
//! top-origin coordinate system (y grows downward, like the templates are
//! designed) and in points; the composer flips to PDF's bottom-origin space
//! when it emits operators.

use std::fmt::Write as FmtWrite;

use super::metrics;
use super::writer::{encode_pdf_string, PAGE_HEIGHT, PAGE_WIDTH};

/// Millimetres to points. Template geometry is specified in mm.
pub fn mm(v: f64) -> f64 {
    v * 72.0 / 25.4
}

/// An sRGB color, 0..=255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(40, 40, 40);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREY: Rgb = Rgb(120, 120, 120);

    fn components(self) -> (f64, f64, f64) {
        (
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0,
        )
    }
}

/// Horizontal anchoring for [`PageComposer::text`]. `Right` and `Center`
/// measure the string with the Helvetica metrics tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

pub struct PageComposer {
    pages: Vec<String>,
    stream: String,
    /// Current vertical cursor, top-origin points.
    y: f64,
    pub margin: f64,
}

impl PageComposer {
    pub fn new() -> Self {
        PageComposer {
            pages: Vec::new(),
            stream: String::new(),
            y: mm(15.0),
            margin: mm(15.0),
        }
    }

    pub fn width(&self) -> f64 {
        PAGE_WIDTH
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Start a new page if fewer than `needed` points remain above the
    /// bottom margin. Returns true when a break happened.
    pub fn ensure_room(&mut self, needed: f64) -> bool {
        if self.y + needed > PAGE_HEIGHT - self.margin {
            self.break_page();
            true
        } else {
            false
        }
    }

    pub fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.stream));
        self.y = self.margin;
    }

    /// Close the current page and return all finished content streams.
    pub fn finish(mut self) -> Vec<String> {
        self.pages.push(self.stream);
        self.pages
    }

    /// Filled rectangle; `y` is the top edge in top-origin points.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let (r, g, b) = color.components();
        let _ = write!(
            self.stream,
            "q\n{:.3} {:.3} {:.3} rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
            r,
            g,
            b,
            x,
            PAGE_HEIGHT - y - h,
            w,
            h
        );
    }

    /// Filled rectangle with uniformly rounded corners.
    pub fn fill_rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Rgb) {
        let k = 0.5522847498;
        let r = radius.min(w / 2.0).min(h / 2.0);
        let y = PAGE_HEIGHT - y - h;

        let (cr, cg, cb) = color.components();
        let _ = write!(self.stream, "q\n{:.3} {:.3} {:.3} rg\n", cr, cg, cb);

        let s = &mut self.stream;
        let _ = write!(s, "{:.2} {:.2} m\n", x + r, y);
        let _ = write!(s, "{:.2} {:.2} l\n", x + w - r, y);
        let _ = write!(
            s,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w - r + r * k,
            y,
            x + w,
            y + r - r * k,
            x + w,
            y + r
        );
        let _ = write!(s, "{:.2} {:.2} l\n", x + w, y + h - r);
        let _ = write!(
            s,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w,
            y + h - r + r * k,
            x + w - r + r * k,
            y + h,
            x + w - r,
            y + h
        );
        let _ = write!(s, "{:.2} {:.2} l\n", x + r, y + h);
        let _ = write!(
            s,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + r - r * k,
            y + h,
            x,
            y + h - r + r * k,
            x,
            y + h - r
        );
        let _ = write!(s, "{:.2} {:.2} l\n", x, y + r);
        let _ = write!(
            s,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x,
            y + r - r * k,
            x + r - r * k,
            y,
            x + r,
            y
        );
        let _ = write!(s, "h\nf\nQ\n");
    }

    /// Horizontal or arbitrary stroked line between two top-origin points.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgb) {
        let (r, g, b) = color.components();
        let _ = write!(
            self.stream,
            "q\n{:.3} {:.3} {:.3} RG\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
            r,
            g,
            b,
            width,
            x1,
            PAGE_HEIGHT - y1,
            x2,
            PAGE_HEIGHT - y2
        );
    }

    /// One run of text. `y` is the baseline in top-origin points; `x` is the
    /// anchor interpreted per `align`.
    pub fn text(&mut self, text: &str, x: f64, y: f64, size: f64, bold: bool, color: Rgb, align: Align) {
        let width = metrics::text_width(text, bold, size);
        let x = match align {
            Align::Left => x,
            Align::Right => x - width,
            Align::Center => x - width / 2.0,
        };
        let font = if bold { "F1" } else { "F0" };
        let (r, g, b) = color.components();
        let _ = write!(
            self.stream,
            "BT\n{:.3} {:.3} {:.3} rg\n/{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
            r,
            g,
            b,
            font,
            size,
            x,
            PAGE_HEIGHT - y,
            encode_pdf_string(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_conversion() {
        assert!((mm(25.4) - 72.0).abs() < 1e-9);
        assert!((mm(210.0) - 595.275).abs() < 0.01); // A4 width
    }

    #[test]
    fn test_page_break_resets_cursor() {
        let mut composer = PageComposer::new();
        composer.set_y(PAGE_HEIGHT - mm(20.0));
        assert!(composer.ensure_room(mm(45.0)));
        assert!((composer.y() - composer.margin).abs() < 1e-9);
        assert_eq!(composer.finish().len(), 2);
    }

    #[test]
    fn test_no_break_when_room_remains() {
        let mut composer = PageComposer::new();
        composer.set_y(mm(100.0));
        assert!(!composer.ensure_room(mm(45.0)));
        assert_eq!(composer.finish().len(), 1);
    }

    #[test]
    fn test_text_flips_to_bottom_origin() {
        let mut composer = PageComposer::new();
        composer.text("X", mm(15.0), mm(15.0), 10.0, false, Rgb::BLACK, Align::Left);
        let stream = composer.finish().remove(0);
        // Baseline mm(15) from the top lands near the top of a 841.89pt page.
        assert!(stream.contains("799.37 Td"));
        assert!(stream.contains("(X) Tj"));
    }

    #[test]
    fn test_right_alignment_shifts_anchor() {
        let mut left = PageComposer::new();
        left.text("Total", 200.0, 100.0, 10.0, false, Rgb::BLACK, Align::Left);
        let mut right = PageComposer::new();
        right.text("Total", 200.0, 100.0, 10.0, false, Rgb::BLACK, Align::Right);
        assert_ne!(left.finish()[0], right.finish()[0]);
    }
}
