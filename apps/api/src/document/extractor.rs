//! Section extraction — the two-flag capture scan over document paragraphs.
//!
//! Header detection is substring matching against the configured heading
//! names, so a document phrased differently silently yields empty sections.
//! No error is raised for empty extraction.

use crate::document::{Paragraph, ResumeSections};

/// Heading substrings that drive the capture flags.
///
/// The defaults match the conventional résumé layout. `employer_markers`
/// handles documents where the experience section opens with an employer
/// line instead of a "Work Experience" heading; it is empty by default and
/// populated per deployment.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    pub skills_heading: String,
    pub experience_heading: String,
    pub employer_markers: Vec<String>,
    pub terminal_headings: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            skills_heading: "Key Skills".to_string(),
            experience_heading: "Work Experience".to_string(),
            employer_markers: vec![],
            terminal_headings: vec![
                "Education".to_string(),
                "Certifications".to_string(),
                "Publications".to_string(),
                "References".to_string(),
            ],
        }
    }
}

/// Scans paragraphs in document order and captures the skills and experience
/// regions.
///
/// On a header paragraph: the skills heading starts skills capture; the
/// experience heading (or any employer marker) starts experience capture and
/// stops skills capture; a terminal heading stops experience capture. Header
/// paragraphs themselves are not captured. Non-header paragraphs are appended
/// verbatim to whichever section is capturing, skipping blank paragraphs.
///
/// Skills text is post-processed by splitting on the bullet glyph and
/// rejoining with newlines.
pub fn extract_sections(paragraphs: &[Paragraph], rules: &ExtractionRules) -> ResumeSections {
    let mut skills = String::new();
    let mut experience = String::new();
    let mut capture_skills = false;
    let mut capture_experience = false;

    for para in paragraphs {
        if para.is_header() {
            if para.text.contains(&rules.skills_heading) {
                capture_skills = true;
            } else if para.text.contains(&rules.experience_heading)
                || rules
                    .employer_markers
                    .iter()
                    .any(|m| para.text.contains(m))
            {
                capture_experience = true;
                capture_skills = false;
            } else if rules
                .terminal_headings
                .iter()
                .any(|m| para.text.contains(m))
            {
                capture_experience = false;
            }
            continue;
        }

        if para.text.trim().is_empty() {
            continue;
        }

        if capture_skills {
            skills.push_str(&para.text);
            skills.push('\n');
        }
        if capture_experience {
            experience.push_str(&para.text);
            experience.push('\n');
        }
    }

    ResumeSections {
        skills: split_bullet_glyphs(&skills),
        experience: experience.trim_end().to_string(),
    }
}

/// Splits a skills blob on the bullet glyph and rejoins one item per line.
fn split_bullet_glyphs(text: &str) -> String {
    text.split('•')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            style: Some("Heading 2".to_string()),
            underlined: false,
        }
    }

    fn underlined(text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            style: None,
            underlined: true,
        }
    }

    fn body(text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            style: None,
            underlined: false,
        }
    }

    fn sample_resume() -> Vec<Paragraph> {
        vec![
            body("Jane Doe"),
            heading("Key Skills"),
            body("Rust • SQL • Docker"),
            body(""),
            heading("Work Experience"),
            body("Acme Corp - Backend Engineer"),
            body("Built the billing pipeline"),
            heading("Education"),
            body("BSc Computer Science"),
        ]
    }

    #[test]
    fn test_extracts_both_sections() {
        let sections = extract_sections(&sample_resume(), &ExtractionRules::default());
        assert_eq!(sections.skills, "Rust\nSQL\nDocker");
        assert_eq!(
            sections.experience,
            "Acme Corp - Backend Engineer\nBuilt the billing pipeline"
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let paragraphs = sample_resume();
        let rules = ExtractionRules::default();
        let first = extract_sections(&paragraphs, &rules);
        let second = extract_sections(&paragraphs, &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_recognized_headers_yields_empty_sections() {
        let paragraphs = vec![
            body("Jane Doe"),
            heading("Skills I Have"),
            body("Rust"),
            heading("Employment History"),
            body("Acme Corp"),
        ];
        let sections = extract_sections(&paragraphs, &ExtractionRules::default());
        assert_eq!(sections.skills, "");
        assert_eq!(sections.experience, "");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_underlined_headers_are_recognized() {
        let paragraphs = vec![
            underlined("Key Skills"),
            body("Rust"),
            underlined("Work Experience"),
            body("Acme Corp"),
        ];
        let sections = extract_sections(&paragraphs, &ExtractionRules::default());
        assert_eq!(sections.skills, "Rust");
        assert_eq!(sections.experience, "Acme Corp");
    }

    #[test]
    fn test_experience_heading_stops_skills_capture() {
        let paragraphs = vec![
            heading("Key Skills"),
            body("Rust"),
            heading("Work Experience"),
            body("Acme Corp"),
        ];
        let sections = extract_sections(&paragraphs, &ExtractionRules::default());
        assert!(!sections.skills.contains("Acme Corp"));
    }

    #[test]
    fn test_terminal_heading_stops_experience_capture() {
        let paragraphs = vec![
            heading("Work Experience"),
            body("Acme Corp"),
            heading("References"),
            body("Available on request"),
        ];
        let sections = extract_sections(&paragraphs, &ExtractionRules::default());
        assert_eq!(sections.experience, "Acme Corp");
    }

    #[test]
    fn test_employer_marker_starts_experience_capture() {
        let mut rules = ExtractionRules::default();
        rules
            .employer_markers
            .push("Panorama Education, Boston, MA".to_string());

        let paragraphs = vec![
            heading("Key Skills"),
            body("Rust"),
            underlined("Panorama Education, Boston, MA (Remote)"),
            body("Led the data team"),
        ];
        let sections = extract_sections(&paragraphs, &rules);
        assert_eq!(sections.experience, "Led the data team");
        assert_eq!(sections.skills, "Rust");
    }

    #[test]
    fn test_blank_paragraphs_are_skipped() {
        let paragraphs = vec![
            heading("Work Experience"),
            body("Acme Corp"),
            body("   "),
            body("Built things"),
        ];
        let sections = extract_sections(&paragraphs, &ExtractionRules::default());
        assert_eq!(sections.experience, "Acme Corp\nBuilt things");
    }

    #[test]
    fn test_header_text_is_not_captured() {
        let sections = extract_sections(&sample_resume(), &ExtractionRules::default());
        assert!(!sections.skills.contains("Key Skills"));
        assert!(!sections.experience.contains("Work Experience"));
    }

    #[test]
    fn test_preamble_before_first_header_is_ignored() {
        let sections = extract_sections(&sample_resume(), &ExtractionRules::default());
        assert!(!sections.skills.contains("Jane Doe"));
        assert!(!sections.experience.contains("Jane Doe"));
    }

    #[test]
    fn test_bullet_splitting_trims_fragments() {
        assert_eq!(split_bullet_glyphs("Rust •  SQL•Docker "), "Rust\nSQL\nDocker");
        assert_eq!(split_bullet_glyphs(""), "");
    }
}
