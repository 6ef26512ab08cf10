//! Résumé filtering/rewriting — second pipeline stage.
//!
//! Sends the keyword list plus the extracted résumé sections to the
//! completion service and recovers the rewritten résumé from the response:
//! first via the structured JSON contract, then via the legacy
//! first-fence-pair fallback. If neither yields a section, the stage
//! degrades rather than failing: the raw response is kept as the processed
//! résumé and the miss is recorded in the conversation log.

use serde::Deserialize;
use tracing::warn;

use crate::document::ResumeSections;
use crate::errors::AppError;
use crate::llm_client::prompts::STRUCTURED_RESUME_CONTRACT;
use crate::llm_client::{strip_json_fences, CompletionClient};
use crate::pipeline::prompts::{REWRITE_SYSTEM, REWRITE_USER_TEMPLATE};
use crate::pipeline::session::{StageTrigger, TailorSession};

/// Logged when a response carries neither the JSON payload nor a fenced block.
pub const NO_DELIMITED_SECTION: &str = "No delimited section found";

#[derive(Debug, Deserialize)]
struct ResumePayload {
    resume: String,
}

/// Returns exactly the substring between the first and second triple-backtick
/// delimiter, or `None` when fewer than two delimiters are present.
pub fn extract_delimited(text: &str) -> Option<&str> {
    let mut parts = text.splitn(3, "```");
    parts.next()?;
    let between = parts.next()?;
    // the second delimiter must actually be present
    parts.next()?;
    Some(between)
}

/// Recovers the résumé text from a model response: structured JSON contract
/// first, fenced block second.
pub fn recover_resume(raw: &str) -> Option<String> {
    if let Ok(payload) = serde_json::from_str::<ResumePayload>(strip_json_fences(raw)) {
        return Some(payload.resume);
    }
    extract_delimited(raw).map(str::to_string)
}

/// Runs the filtering/rewriting stage, storing the processed résumé on the
/// session and advancing it to `ResumeProcessed`.
pub async fn process_resume(
    session: &mut TailorSession,
    llm: &dyn CompletionClient,
    sections: ResumeSections,
) -> Result<String, AppError> {
    session.require(StageTrigger::ProcessResume)?;

    let resume_text = sections.concatenated();
    session
        .log
        .record(format!("Resume sections loaded:\n{resume_text}"));

    let user = REWRITE_USER_TEMPLATE
        .replace("{keywords}", &session.keywords.join(", "))
        .replace("{resume}", &resume_text);
    let system = format!("{REWRITE_SYSTEM}\n\n{STRUCTURED_RESUME_CONTRACT}");

    let raw = llm
        .complete(&system, &user)
        .await
        .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))?;

    let processed = match recover_resume(&raw) {
        Some(text) => text,
        None => {
            warn!(
                "Rewrite response for session {} carried no structured resume section",
                session.id
            );
            session.log.record(NO_DELIMITED_SECTION);
            raw
        }
    };

    session
        .log
        .record(format!("Processed resume:\n{processed}"));
    session.sections = Some(sections);
    session.processed_resume = Some(processed.clone());
    session.advance(StageTrigger::ProcessResume)?;

    Ok(processed)
}
