//! Advance widths for the built-in Helvetica faces.
//!
//! The paginated renderer right-aligns numeric columns and the totals block,
//! which needs real string widths. Since output is restricted to the
//! standard PDF fonts, the AFM width tables for Helvetica and
//! Helvetica-Bold (1/1000 em units, ASCII 32..=126) are enough; anything
//! outside that range falls back to the average lowercase width.

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance width of one character in points at the given size.
pub fn char_width(ch: char, bold: bool, size: f64) -> f64 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let units = match ch as u32 {
        32..=126 => table[ch as usize - 32],
        _ => FALLBACK_WIDTH,
    };
    units as f64 / 1000.0 * size
}

/// Width of a string in points at the given size.
pub fn text_width(text: &str, bold: bool, size: f64) -> f64 {
    text.chars().map(|ch| char_width(ch, bold, size)).sum()
}
