//! Match scoring/review — third pipeline stage.
//!
//! Sends the job description plus the processed résumé to the completion
//! service and stores the response as free text. The numeric score lives
//! inside the prose; no structured score field is parsed out.

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::pipeline::prompts::{REVIEW_SYSTEM, REVIEW_USER_TEMPLATE};
use crate::pipeline::session::{StageTrigger, TailorSession};

/// Runs the review stage, storing the free-text review on the session and
/// advancing it to `Reviewed`.
pub async fn review_resume(
    session: &mut TailorSession,
    llm: &dyn CompletionClient,
) -> Result<String, AppError> {
    session.require(StageTrigger::Review)?;

    let resume = session.processed_resume.clone().unwrap_or_default();
    session.log.record("Reviewing resume...");

    let user = REVIEW_USER_TEMPLATE
        .replace("{jd_text}", &session.job_description)
        .replace("{resume}", &resume);

    let review = llm
        .complete(REVIEW_SYSTEM, &user)
        .await
        .map_err(|e| AppError::Llm(format!("Resume review failed: {e}")))?;

    session.log.record(format!("Review response:\n{review}"));
    session.review = Some(review.clone());
    session.advance(StageTrigger::Review)?;

    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedClient;
    use crate::pipeline::session::SessionStage;

    fn processed_session() -> TailorSession {
        let mut session = TailorSession::new("Backend engineer role".to_string());
        session.processed_resume = Some("Go\nPostgreSQL".to_string());
        session.stage = SessionStage::ResumeProcessed;
        session
    }

    #[tokio::test]
    async fn test_stage_stores_review_and_advances() {
        let mut session = processed_session();
        let llm = ScriptedClient::new(
            ["I would score this resume 85 out of 100. Missing: Kubernetes."],
        );

        let review = review_resume(&mut session, &llm).await.unwrap();

        assert!(review.contains("85"));
        assert_eq!(session.review.as_deref(), Some(review.as_str()));
        assert_eq!(session.stage, SessionStage::Reviewed);
        assert!(session.log.render().contains("Review response:"));
    }

    #[tokio::test]
    async fn test_stage_rejected_before_resume_processed() {
        let mut session = TailorSession::new("jd".to_string());
        let llm = ScriptedClient::new(["unused"]);

        let result = review_resume(&mut session, &llm).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.stage, SessionStage::Created);
    }
}
