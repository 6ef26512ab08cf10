//! Axum route handlers for the tailoring pipeline.
//!
//! Each handler fires exactly one state-machine trigger on the addressed
//! session. The former desktop flow's yes/no gates live on the client side
//! now: progressing is calling the next endpoint.

use std::path::PathBuf;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::docx::read_paragraphs;
use crate::document::extractor::{extract_sections, ExtractionRules};
use crate::document::ResumeSections;
use crate::errors::AppError;
use crate::pipeline::handoff::assemble_handoff;
use crate::pipeline::integrate::fix_resume;
use crate::pipeline::keywords::extract_keywords;
use crate::pipeline::review::review_resume;
use crate::pipeline::rewrite::process_resume;
use crate::pipeline::session::{SessionStage, StageTrigger, TailorSession};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub stage: SessionStage,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub stage: SessionStage,
}

#[derive(Debug, Serialize)]
pub struct ProcessResumeResponse {
    pub sections: ResumeSections,
    pub processed_resume: String,
    pub stage: SessionStage,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
    pub stage: SessionStage,
}

#[derive(Debug, Deserialize)]
pub struct SubmitExperiencesRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FixResponse {
    pub fixed_resume: String,
    pub stage: SessionStage,
}

#[derive(Debug, Serialize)]
pub struct HandoffResponse {
    pub prompt: String,
    pub stage: SessionStage,
}

#[derive(Debug, Deserialize)]
pub struct SaveLogRequest {
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct SaveLogResponse {
    pub path: PathBuf,
    pub entries: usize,
    pub stage: SessionStage,
}

/// Read-only view of everything a session has accumulated.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub stage: SessionStage,
    pub job_description: String,
    pub keywords: Vec<String>,
    pub sections: Option<ResumeSections>,
    pub processed_resume: Option<String>,
    pub review: Option<String>,
    pub new_experiences: Option<String>,
    pub fixed_resume: Option<String>,
    pub log_entries: usize,
}

impl SessionSnapshot {
    fn of(session: &TailorSession) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            stage: session.stage,
            job_description: session.job_description.clone(),
            keywords: session.keywords.clone(),
            sections: session.sections.clone(),
            processed_resume: session.processed_resume.clone(),
            review: session.review.clone(),
            new_experiences: session.new_experiences.clone(),
            fixed_resume: session.fixed_resume.clone(),
            log_entries: session.log.len(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Creates a session around a job description. The JD is set once and read
/// by every later stage.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let session = TailorSession::new(request.jd_text);
    let stage = session.stage;
    let session_id = state.store.insert(session).await;

    Ok(Json(CreateSessionResponse { session_id, stage }))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state.store.get(session_id).await?;
    let session = session.lock().await;
    Ok(Json(SessionSnapshot::of(&session)))
}

/// POST /api/v1/sessions/:id/keywords
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let session = state.store.get(session_id).await?;
    let mut session = session.lock().await;

    let keywords = extract_keywords(&mut session, state.llm.as_ref()).await?;

    Ok(Json(KeywordsResponse {
        keywords,
        stage: session.stage,
    }))
}

/// POST /api/v1/sessions/:id/resume
///
/// Multipart upload of a `.docx` résumé. Extracts the skills and experience
/// sections, then runs the filtering/rewriting stage on them.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResumeResponse>, AppError> {
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") || data.is_none() {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            data = Some(bytes.to_vec());
        }
    }

    let data = data.ok_or_else(|| {
        AppError::Validation("multipart body must carry a 'resume' file field".to_string())
    })?;

    let paragraphs = read_paragraphs(&data)?;
    let sections = extract_sections(&paragraphs, &ExtractionRules::default());

    let session = state.store.get(session_id).await?;
    let mut session = session.lock().await;

    let processed = process_resume(&mut session, state.llm.as_ref(), sections.clone()).await?;

    Ok(Json(ProcessResumeResponse {
        sections,
        processed_resume: processed,
        stage: session.stage,
    }))
}

/// POST /api/v1/sessions/:id/review
pub async fn handle_review(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReviewResponse>, AppError> {
    let session = state.store.get(session_id).await?;
    let mut session = session.lock().await;

    let review = review_resume(&mut session, state.llm.as_ref()).await?;

    Ok(Json(ReviewResponse {
        review,
        stage: session.stage,
    }))
}

/// POST /api/v1/sessions/:id/experiences
pub async fn handle_submit_experiences(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitExperiencesRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state.store.get(session_id).await?;
    let mut session = session.lock().await;

    session.submit_experiences(&request.text)?;

    Ok(Json(SessionSnapshot::of(&session)))
}

/// POST /api/v1/sessions/:id/fix
pub async fn handle_fix(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<FixResponse>, AppError> {
    let session = state.store.get(session_id).await?;
    let mut session = session.lock().await;

    let fixed_resume = fix_resume(&mut session, state.llm.as_ref()).await?;

    Ok(Json(FixResponse {
        fixed_resume,
        stage: session.stage,
    }))
}

/// POST /api/v1/sessions/:id/handoff
pub async fn handle_handoff(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HandoffResponse>, AppError> {
    let session = state.store.get(session_id).await?;
    let mut session = session.lock().await;

    let prompt = assemble_handoff(&mut session)?;

    Ok(Json(HandoffResponse {
        prompt,
        stage: session.stage,
    }))
}

/// GET /api/v1/sessions/:id/log
///
/// The rendered conversation log as plain text.
pub async fn handle_get_log(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<String, AppError> {
    let session = state.store.get(session_id).await?;
    let session = session.lock().await;
    Ok(session.log.render())
}

/// POST /api/v1/sessions/:id/log/save
///
/// Flushes the log to a UTF-8 file at the requested path. The save message
/// is recorded before writing so the file itself carries it.
pub async fn handle_save_log(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SaveLogRequest>,
) -> Result<Json<SaveLogResponse>, AppError> {
    let session = state.store.get(session_id).await?;
    let mut session = session.lock().await;

    session.require(StageTrigger::SaveLog)?;
    session
        .log
        .record(format!("Log saved to: {}", request.path.display()));
    session.log.save(&request.path)?;
    session.advance(StageTrigger::SaveLog)?;

    Ok(Json(SaveLogResponse {
        path: request.path,
        entries: session.log.len(),
        stage: session.stage,
    }))
}
