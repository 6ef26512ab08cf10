//! Keyword extraction — first pipeline stage.
//!
//! Sends the job description to the completion service and captures the
//! response as an ordered keyword list by comma splitting. Tokens are
//! trimmed and empties dropped; this is the deliberate resolution of the
//! historical trim/no-trim split between the tool's two lineages.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::pipeline::prompts::{KEYWORDS_SYSTEM, KEYWORDS_USER_TEMPLATE};
use crate::pipeline::session::{StageTrigger, TailorSession};

/// Splits a model response into the ordered keyword list.
/// A response with no commas yields a one-element list of the whole
/// (trimmed) response.
pub fn split_keywords(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Runs the keyword extraction stage, storing the keyword list on the
/// session and advancing it to `KeywordsExtracted`.
pub async fn extract_keywords(
    session: &mut TailorSession,
    llm: &dyn CompletionClient,
) -> Result<Vec<String>, AppError> {
    session.require(StageTrigger::ExtractKeywords)?;

    session.log.record("Processing job description...");

    let user = KEYWORDS_USER_TEMPLATE.replace("{jd_text}", &session.job_description);
    let response = llm
        .complete(KEYWORDS_SYSTEM, &user)
        .await
        .map_err(|e| AppError::Llm(format!("Keyword extraction failed: {e}")))?;

    let keywords = split_keywords(&response);
    info!("Extracted {} keywords for session {}", keywords.len(), session.id);

    session
        .log
        .record(format!("Keywords extracted:\n{}", keywords.join("\n")));
    session.keywords = keywords.clone();
    session.advance(StageTrigger::ExtractKeywords)?;

    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedClient;
    use crate::pipeline::session::SessionStage;

    #[test]
    fn test_split_trims_tokens() {
        assert_eq!(
            split_keywords("Python, SQL, Docker"),
            vec!["Python", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_split_without_commas_yields_whole_response() {
        assert_eq!(split_keywords("Kubernetes"), vec!["Kubernetes"]);
        assert_eq!(split_keywords("  Kubernetes \n"), vec!["Kubernetes"]);
    }

    #[test]
    fn test_split_drops_empty_tokens() {
        assert_eq!(split_keywords("Rust,, SQL,"), vec!["Rust", "SQL"]);
        assert!(split_keywords("  ,  , ").is_empty());
    }

    #[tokio::test]
    async fn test_stage_stores_keywords_and_advances() {
        let mut session = TailorSession::new("Backend engineer, Go and PostgreSQL".to_string());
        let llm = ScriptedClient::new(["Go, PostgreSQL, REST"]);

        let keywords = extract_keywords(&mut session, &llm).await.unwrap();

        assert_eq!(keywords, vec!["Go", "PostgreSQL", "REST"]);
        assert_eq!(session.keywords, keywords);
        assert_eq!(session.stage, SessionStage::KeywordsExtracted);
        assert!(session.log.render().contains("Go\nPostgreSQL\nREST"));
    }

    #[tokio::test]
    async fn test_stage_rejected_outside_created() {
        let mut session = TailorSession::new("jd".to_string());
        session.stage = SessionStage::Reviewed;
        let llm = ScriptedClient::new(["unused"]);

        let result = extract_keywords(&mut session, &llm).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.stage, SessionStage::Reviewed);
    }

    #[tokio::test]
    async fn test_service_failure_propagates_as_llm_error() {
        let mut session = TailorSession::new("jd".to_string());
        let llm = ScriptedClient::new(Vec::<String>::new());

        let result = extract_keywords(&mut session, &llm).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
        assert_eq!(session.stage, SessionStage::Created);
    }
}
