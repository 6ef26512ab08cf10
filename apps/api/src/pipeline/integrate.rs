//! Experience integration — fifth pipeline stage.
//!
//! Sends the job description, the processed résumé, and the user's new
//! experience bullets to the completion service; the response is the
//! rewritten résumé. Recovery follows the same contract as the rewrite
//! stage (structured JSON, fenced fallback, degraded raw) so the two
//! résumé-producing stages behave identically.

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::STRUCTURED_RESUME_CONTRACT;
use crate::llm_client::CompletionClient;
use crate::pipeline::prompts::{INTEGRATE_SYSTEM, INTEGRATE_USER_TEMPLATE};
use crate::pipeline::rewrite::{recover_resume, NO_DELIMITED_SECTION};
use crate::pipeline::session::{StageTrigger, TailorSession};

/// Runs the integration stage, storing the fixed résumé on the session and
/// advancing it to `Fixed`.
pub async fn fix_resume(
    session: &mut TailorSession,
    llm: &dyn CompletionClient,
) -> Result<String, AppError> {
    session.require(StageTrigger::Fix)?;

    session.log.record("Fixing resume...");

    let user = INTEGRATE_USER_TEMPLATE
        .replace("{jd_text}", &session.job_description)
        .replace(
            "{resume}",
            session.processed_resume.as_deref().unwrap_or_default(),
        )
        .replace(
            "{experiences}",
            session.new_experiences.as_deref().unwrap_or_default(),
        );
    let system = format!("{INTEGRATE_SYSTEM}\n\n{STRUCTURED_RESUME_CONTRACT}");

    let raw = llm
        .complete(&system, &user)
        .await
        .map_err(|e| AppError::Llm(format!("Experience integration failed: {e}")))?;

    let fixed = match recover_resume(&raw) {
        Some(text) => text,
        None => {
            warn!(
                "Integration response for session {} carried no structured resume section",
                session.id
            );
            session.log.record(NO_DELIMITED_SECTION);
            raw
        }
    };

    session.log.record(format!("Fixed resume:\n{fixed}"));
    session.fixed_resume = Some(fixed.clone());
    session.advance(StageTrigger::Fix)?;

    Ok(fixed)
}
