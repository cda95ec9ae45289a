//! From-scratch PDF 1.7 writer.
//!
//! Takes finished per-page content streams and writes a valid PDF file. We
//! write the raw bytes ourselves because it gives us full control over the
//! output and keeps the engine self-contained. The PDF spec is verbose but
//! the subset an invoice needs is manageable.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, pages, content streams, etc.)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Invoices only ever use the two standard Helvetica faces, so the font
//! objects are fixed: /F0 is Helvetica, /F1 is Helvetica-Bold.

use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

/// A4 portrait, in points.
pub const PAGE_WIDTH: f64 = 595.28;
pub const PAGE_HEIGHT: f64 = 841.89;

/// Document information written into the PDF Info dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
}

pub struct PdfWriter;

struct PdfObject {
    data: Vec<u8>,
}

impl PdfWriter {
    /// Write finished page content streams to a PDF byte vector.
    pub fn write(pages: &[String], info: &DocInfo) -> Vec<u8> {
        // Object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3 = Helvetica (/F0), 4 = Helvetica-Bold (/F1)
        // 5+ = content streams and page objects, then Info
        let mut objects: Vec<PdfObject> = Vec::new();
        objects.push(PdfObject { data: vec![] });
        objects.push(PdfObject {
            data: b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        });
        objects.push(PdfObject { data: vec![] });
        objects.push(PdfObject {
            data: b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
                    /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        });
        objects.push(PdfObject {
            data: b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold \
                    /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        });

        let mut page_obj_ids: Vec<usize> = Vec::new();

        for content in pages {
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let content_obj_id = objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            objects.push(PdfObject { data: content_data });

            let page_obj_id = objects.len();
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << /F0 3 0 R /F1 4 0 R >> >> >>",
                PAGE_WIDTH, PAGE_HEIGHT, content_obj_id
            );
            objects.push(PdfObject {
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        // Pages tree (object 2)
        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        // Info dictionary
        let info_obj_id = objects.len();
        let info_dict = format!(
            "<< /Title ({}) /Author ({}) /Subject ({}) \
             /Producer (facture 0.1) /Creator (facture) >>",
            encode_pdf_string(&info.title),
            encode_pdf_string(&info.author),
            encode_pdf_string(&info.subject),
        );
        objects.push(PdfObject {
            data: info_dict.into_bytes(),
        });

        Self::serialize(&objects, info_obj_id)
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(objects: &[PdfObject], info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(output, "trailer\n<< /Size {} /Root 1 0 R", objects.len());
        let _ = write!(output, " /Info {} 0 R", info_obj_id);
        let _ = write!(output, " >>\nstartxref\n{}\n%%EOF\n", xref_offset);

        output
    }
}

/// Encode a string as a PDF literal string in WinAnsi (CP1252) bytes.
///
/// The fonts declare /WinAnsiEncoding, so the content stream must carry
/// CP1252 bytes, not UTF-8. ASCII passes through (with the string
/// delimiters escaped); everything else becomes an octal escape for its
/// CP1252 byte. Characters outside CP1252 degrade to `?`, matching the
/// width fallback in the metrics tables.
pub(crate) fn encode_pdf_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            ' '..='~' => out.push(ch),
            _ => match winansi_byte(ch) {
                Some(byte) => out.push_str(&format!("\\{:03o}", byte)),
                None => out.push('?'),
            },
        }
    }
    out
}

/// CP1252 byte for a non-ASCII character. Latin-1 maps through directly;
/// the 0x80..0x9F block holds the Windows additions.
fn winansi_byte(ch: char) -> Option<u8> {
    match ch {
        '\u{A0}'..='\u{FF}' => Some(ch as u8),
        '\u{20AC}' => Some(0x80), // €
        '\u{201A}' => Some(0x82),
        '\u{192}' => Some(0x83),
        '\u{201E}' => Some(0x84),
        '\u{2026}' => Some(0x85),
        '\u{2020}' => Some(0x86),
        '\u{2021}' => Some(0x87),
        '\u{2C6}' => Some(0x88),
        '\u{2030}' => Some(0x89),
        '\u{160}' => Some(0x8A),
        '\u{2039}' => Some(0x8B),
        '\u{152}' => Some(0x8C),
        '\u{17D}' => Some(0x8E),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{2DC}' => Some(0x98),
        '\u{2122}' => Some(0x99),
        '\u{161}' => Some(0x9A),
        '\u{203A}' => Some(0x9B),
        '\u{153}' => Some(0x9C),
        '\u{17E}' => Some(0x9E),
        '\u{178}' => Some(0x9F),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escapes_delimiters() {
        assert_eq!(encode_pdf_string("Hello (World)"), "Hello \\(World\\)");
        assert_eq!(encode_pdf_string("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_encode_transcodes_to_winansi() {
        // € is CP1252 0x80, ü is Latin-1 0xFC
        assert_eq!(encode_pdf_string("100 \u{20AC}"), "100 \\200");
        assert_eq!(encode_pdf_string("M\u{FC}ller"), "M\\374ller");
        assert_eq!(encode_pdf_string("\u{2013}\u{2014}"), "\\226\\227");
    }

    #[test]
    fn test_encode_degrades_outside_cp1252() {
        assert_eq!(encode_pdf_string("\u{5186}"), "?"); // 円
        assert_eq!(encode_pdf_string("\u{20B9}"), "?"); // ₹
    }

    #[test]
    fn test_empty_document_produces_valid_pdf() {
        let bytes = PdfWriter::write(&[String::new()], &DocInfo::default());

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
    }

    #[test]
    fn test_info_dictionary_written() {
        let info = DocInfo {
            title: "Invoice INV-1".to_string(),
            author: "Acme".to_string(),
            subject: "Invoice".to_string(),
        };
        let bytes = PdfWriter::write(&[String::new()], &info);
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Title (Invoice INV-1)"));
        assert!(text.contains("/Author (Acme)"));
    }

    #[test]
    fn test_one_page_object_per_stream() {
        let pages = vec![String::new(), String::new(), String::new()];
        let bytes = PdfWriter::write(&pages, &DocInfo::default());
        let text = String::from_utf8_lossy(&bytes);

        let page_count = text.matches("/Type /Page /Parent").count();
        assert_eq!(page_count, 3);
        assert!(text.contains("/Count 3"));
    }
}
