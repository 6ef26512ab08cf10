//! Document boundary — reduces a paragraph-oriented rich-text document to the
//! two labeled text regions the pipeline consumes.
//!
//! The `.docx` reader lives in `docx.rs`; the capture algorithm in
//! `extractor.rs` works on the plain `Paragraph` model so it is testable
//! without document files.

pub mod docx;
pub mod extractor;

use serde::{Deserialize, Serialize};

/// A single paragraph reduced from the rich-text document: its visible text,
/// the paragraph style name (if any), and whether any run in it is underlined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub style: Option<String>,
    pub underlined: bool,
}

impl Paragraph {
    /// Header detection: styled as a heading OR containing underlined text.
    /// Documents that mark sections differently are silently not recognized.
    pub fn is_header(&self) -> bool {
        self.style
            .as_deref()
            .map(|s| s.starts_with("Heading"))
            .unwrap_or(false)
            || self.underlined
    }
}

/// The two text blobs extracted from a résumé document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub skills: String,
    pub experience: String,
}

impl ResumeSections {
    /// The concatenated form the rewrite stage sends to the model.
    pub fn concatenated(&self) -> String {
        format!(
            "Key Skills:\n{}\n\nWork Experience:\n{}",
            self.skills, self.experience
        )
    }

    pub fn is_empty(&self) -> bool {
        self.skills.trim().is_empty() && self.experience.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_is_header() {
        let para = Paragraph {
            text: "Key Skills".to_string(),
            style: Some("Heading 1".to_string()),
            underlined: false,
        };
        assert!(para.is_header());
    }

    #[test]
    fn test_underlined_text_is_header() {
        let para = Paragraph {
            text: "Work Experience".to_string(),
            style: None,
            underlined: true,
        };
        assert!(para.is_header());
    }

    #[test]
    fn test_plain_paragraph_is_not_header() {
        let para = Paragraph {
            text: "Built things".to_string(),
            style: Some("Normal".to_string()),
            underlined: false,
        };
        assert!(!para.is_header());
    }

    #[test]
    fn test_concatenated_carries_both_sections() {
        let sections = ResumeSections {
            skills: "Rust\nSQL".to_string(),
            experience: "Engineer at Acme".to_string(),
        };
        let text = sections.concatenated();
        assert!(text.contains("Key Skills:\nRust\nSQL"));
        assert!(text.contains("Work Experience:\nEngineer at Acme"));
    }

    #[test]
    fn test_is_empty_ignores_whitespace() {
        let sections = ResumeSections {
            skills: "  \n".to_string(),
            experience: String::new(),
        };
        assert!(sections.is_empty());
    }
}
