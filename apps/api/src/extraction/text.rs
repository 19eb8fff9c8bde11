//! Document text extraction: PDF/DOCX bytes → one normalized plain-text
//! string with line breaks preserved as paragraph separators.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::extraction::{DocumentFormat, ParseError};

/// Extracts plain text from raw document bytes.
///
/// No trimming happens at this stage; an empty document yields an empty
/// string rather than an error. Decoding works entirely in memory, so no
/// file handle outlives this call.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ParseError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(bytes),
        DocumentFormat::Docx => extract_docx_text(bytes),
    }
}

/// Page text in document order, pages joined with a single newline. A page
/// with no extractable text contributes an empty string instead of failing
/// the whole document.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ParseError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ParseError::Extraction(e.to_string()))
}

/// Paragraph text in document order, including empty paragraphs as empty
/// lines, joined with a single newline.
fn extract_docx_text(bytes: &[u8]) -> Result<String, ParseError> {
    let docx = read_docx(bytes).map_err(|e| ParseError::Extraction(e.to_string()))?;

    let mut lines = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for paragraph_child in paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            lines.push(line);
        }
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn docx_bytes(docx: Docx) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    /// Minimal valid single-page PDF with no text content. The xref offsets
    /// are computed while assembling, so the fixture stays valid if the
    /// objects change.
    fn blank_pdf_bytes() -> Vec<u8> {
        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << >> /Contents 4 0 R >>\nendobj\n",
            "4 0 obj\n<< /Length 0 >>\nstream\n\nendstream\nendobj\n",
        ];

        let mut buf: Vec<u8> = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for object in objects {
            offsets.push(buf.len());
            buf.extend_from_slice(object.as_bytes());
        }

        let xref_start = buf.len();
        buf.extend_from_slice(b"xref\n0 5\n0000000000 65535 f \n");
        for offset in &offsets {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(b"trailer\n<< /Size 5 /Root 1 0 R >>\nstartxref\n");
        buf.extend_from_slice(format!("{xref_start}\n").as_bytes());
        buf.extend_from_slice(b"%%EOF\n");
        buf
    }

    #[test]
    fn test_empty_pdf_yields_empty_string_not_failure() {
        let text = extract_text(&blank_pdf_bytes(), DocumentFormat::Pdf).unwrap();
        assert_eq!(text.trim(), "");
    }

    #[test]
    fn test_docx_paragraphs_joined_with_newlines() {
        let bytes = docx_bytes(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
                .add_paragraph(Paragraph::new()) // deliberate blank paragraph
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Software Engineer"))),
        );
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        assert_eq!(text, "Jane Doe\n\nSoftware Engineer");
    }

    #[test]
    fn test_docx_runs_within_a_paragraph_concatenate() {
        let bytes = docx_bytes(Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Jane "))
                .add_run(Run::new().add_text("Doe")),
        ));
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        assert_eq!(text, "Jane Doe");
    }

    #[test]
    fn test_empty_docx_yields_empty_string() {
        let bytes = docx_bytes(Docx::new());
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_docx_read_back_from_disk() {
        // Mirrors the upload path: bytes written to a transient file, read
        // back, and decoded entirely in memory.
        let bytes = docx_bytes(
            Docx::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("On disk"))),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, &bytes).unwrap();
        let read_back = std::fs::read(&path).unwrap();
        assert_eq!(
            extract_text(&read_back, DocumentFormat::Docx).unwrap(),
            "On disk"
        );
    }

    #[test]
    fn test_corrupt_docx_is_an_extraction_error() {
        let err = extract_text(b"definitely not a zip archive", DocumentFormat::Docx).unwrap_err();
        assert!(matches!(err, ParseError::Extraction(_)));
    }

    #[test]
    fn test_corrupt_pdf_is_an_extraction_error() {
        let err = extract_text(b"%PDF-garbage", DocumentFormat::Pdf).unwrap_err();
        assert!(matches!(err, ParseError::Extraction(_)));
    }
}
