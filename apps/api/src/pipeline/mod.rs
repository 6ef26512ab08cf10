// The five-stage tailoring pipeline and its session state machine.
// All LLM calls go through llm_client — no direct Anthropic SDK calls here.

pub mod handlers;
pub mod handoff;
pub mod integrate;
pub mod keywords;
pub mod log;
pub mod prompts;
pub mod review;
pub mod rewrite;
pub mod session;

#[cfg(test)]
mod tests {
    //! Full-pipeline scenario against a scripted completion client.

    use crate::document::ResumeSections;
    use crate::llm_client::testing::ScriptedClient;
    use crate::pipeline::handoff::assemble_handoff;
    use crate::pipeline::integrate::fix_resume;
    use crate::pipeline::keywords::extract_keywords;
    use crate::pipeline::review::review_resume;
    use crate::pipeline::rewrite::process_resume;
    use crate::pipeline::session::{SessionStage, TailorSession};

    #[tokio::test]
    async fn test_end_to_end_session_walkthrough() {
        let llm = ScriptedClient::new([
            "Go, PostgreSQL, backend".to_string(),
            r#"{"resume": "Key Skills:\nGo\nPostgreSQL\n\nWork Experience:\nAcme Corp - built backend services"}"#.to_string(),
            "Your resume scores 78 out of 100. Missing: Kubernetes.".to_string(),
            r#"{"resume": "Key Skills:\nGo\nPostgreSQL\nKubernetes\n\nWork Experience:\nAcme Corp - built backend services\nMigrated workloads to Kubernetes"}"#.to_string(),
        ]);

        let mut session = TailorSession::new(
            "Looking for a backend engineer skilled in Go and PostgreSQL".to_string(),
        );

        let keywords = extract_keywords(&mut session, &llm).await.unwrap();
        assert_eq!(keywords, vec!["Go", "PostgreSQL", "backend"]);

        let sections = ResumeSections {
            skills: "Go\nPostgreSQL\nOil painting".to_string(),
            experience: "Acme Corp - built backend services".to_string(),
        };
        let processed = process_resume(&mut session, &llm, sections).await.unwrap();
        assert!(processed.contains("Go"));
        assert!(!processed.contains("Oil painting"));

        let review = review_resume(&mut session, &llm).await.unwrap();
        assert!(review.contains("78"));

        session
            .submit_experiences("Migrated workloads to Kubernetes")
            .unwrap();

        let handoff = assemble_handoff(&mut session).unwrap();
        assert!(handoff.contains("Migrated workloads to Kubernetes"));

        let fixed = fix_resume(&mut session, &llm).await.unwrap();
        assert!(fixed.contains("Kubernetes"));
        assert_eq!(session.stage, SessionStage::Fixed);

        // One log per stage input/output pair, all in call order.
        let log = session.log.render();
        for needle in [
            "Job description entered:",
            "Processing job description...",
            "Keywords extracted:",
            "Resume sections loaded:",
            "Processed resume:",
            "Review response:",
            "New experiences:",
            "Hand-off prompt:",
            "Fixed resume:",
        ] {
            assert!(log.contains(needle), "log is missing {needle:?}");
        }
    }
}
