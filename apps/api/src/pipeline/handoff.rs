//! Hand-off prompt assembly — fourth pipeline stage.
//!
//! Concatenates the accumulated session state into a single formatted
//! instruction block the user can paste into another model session. Makes no
//! model call; like every other stage it records its output in the
//! conversation log.

use crate::errors::AppError;
use crate::pipeline::prompts::HANDOFF_INSTRUCTION;
use crate::pipeline::session::{StageTrigger, TailorSession};

/// Assembles the hand-off prompt from the session state. The session stays
/// in `ExperiencesSubmitted`, so `Fix` remains available afterwards.
pub fn assemble_handoff(session: &mut TailorSession) -> Result<String, AppError> {
    session.require(StageTrigger::AssembleHandoff)?;

    let prompt = format!(
        "{HANDOFF_INSTRUCTION}\n\n\
         job description:\n{}\n\n\
         my resume:\n{}\n\n\
         recommendations:\n{}\n\n\
         experiences not on resume:\n{}",
        session.job_description,
        session.processed_resume.as_deref().unwrap_or_default(),
        session.review.as_deref().unwrap_or_default(),
        session.new_experiences.as_deref().unwrap_or_default(),
    );

    session.log.record(format!("Hand-off prompt:\n{prompt}"));
    session.advance(StageTrigger::AssembleHandoff)?;

    Ok(prompt)
}
