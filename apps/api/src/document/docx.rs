//! `.docx` reader — flattens the word-processing XML into the `Paragraph`
//! model, keeping only what section extraction needs: text, paragraph style
//! name, and whether any run carries an underline.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::document::Paragraph;
use crate::errors::AppError;

/// Reads a `.docx` byte buffer into paragraphs in document order.
/// Non-paragraph content (tables, section breaks) is skipped.
pub fn read_paragraphs(buf: &[u8]) -> Result<Vec<Paragraph>, AppError> {
    let docx = read_docx(buf)
        .map_err(|e| AppError::Document(format!("Failed to read .docx document: {e:?}")))?;

    let mut paragraphs = Vec::new();

    for child in docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let style = para.property.style.as_ref().map(|s| s.val.clone());

            let mut text = String::new();
            let mut underlined = false;

            for pc in &para.children {
                if let ParagraphChild::Run(run) = pc {
                    if run.run_property.underline.is_some() {
                        underlined = true;
                    }
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            text.push_str(&t.text);
                        }
                    }
                }
            }

            paragraphs.push(Paragraph {
                text,
                style,
                underlined,
            });
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_as_document_error() {
        let result = read_paragraphs(b"not a zip archive");
        assert!(matches!(result, Err(AppError::Document(_))));
    }
}
