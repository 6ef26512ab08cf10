//! Session state machine and registry.
//!
//! The original tool chained its stages through presentation-layer yes/no
//! dialogs; here the progression is an explicit state machine with explicit
//! triggers, so orchestration is decoupled from any presentation technology.
//! Each HTTP endpoint fires one trigger; an out-of-order trigger is rejected
//! without mutating the session.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::document::ResumeSections;
use crate::errors::AppError;
use crate::pipeline::log::ConversationLog;
use crate::pipeline::session::SessionStage::*;
use crate::pipeline::session::StageTrigger::*;

/// Where a session is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStage {
    Created,
    KeywordsExtracted,
    ResumeProcessed,
    Reviewed,
    ExperiencesSubmitted,
    Fixed,
    LoggedAndSaved,
}

/// The transition triggers. One per stage operation, plus log saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTrigger {
    ExtractKeywords,
    ProcessResume,
    Review,
    SubmitExperiences,
    Fix,
    AssembleHandoff,
    SaveLog,
}

impl SessionStage {
    /// Returns the stage a trigger leads to, or `None` if the trigger is not
    /// allowed here.
    ///
    /// `AssembleHandoff` does not move the session: it is the no-cost
    /// alternative to `Fix`, and both stay available until one of `Fix` or
    /// `SaveLog` fires. `SaveLog` is terminal and allowed from any stage
    /// once the session holds something worth saving.
    pub fn on(self, trigger: StageTrigger) -> Option<SessionStage> {
        match (self, trigger) {
            (Created, ExtractKeywords) => Some(KeywordsExtracted),
            (KeywordsExtracted, ProcessResume) => Some(ResumeProcessed),
            (ResumeProcessed, Review) => Some(Reviewed),
            (Reviewed, SubmitExperiences) => Some(ExperiencesSubmitted),
            (ExperiencesSubmitted, Fix) => Some(Fixed),
            (ExperiencesSubmitted, AssembleHandoff) => Some(ExperiencesSubmitted),
            (Created, SaveLog) => None,
            (_, SaveLog) => Some(LoggedAndSaved),
            _ => None,
        }
    }
}

/// The single orchestrating object: all pipeline state is session-scoped
/// fields here. Sessions share nothing with each other, and nothing survives
/// the process except an explicitly saved log file.
#[derive(Debug)]
pub struct TailorSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub stage: SessionStage,
    pub job_description: String,
    pub keywords: Vec<String>,
    pub sections: Option<ResumeSections>,
    pub processed_resume: Option<String>,
    pub review: Option<String>,
    pub new_experiences: Option<String>,
    pub fixed_resume: Option<String>,
    pub log: ConversationLog,
}

impl TailorSession {
    pub fn new(job_description: String) -> Self {
        let mut log = ConversationLog::new();
        log.record(format!("Job description entered:\n{job_description}"));

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            stage: Created,
            job_description,
            keywords: Vec::new(),
            sections: None,
            processed_resume: None,
            review: None,
            new_experiences: None,
            fixed_resume: None,
            log,
        }
    }

    /// Checks that `trigger` is allowed in the current stage and returns the
    /// target stage without moving.
    pub fn require(&self, trigger: StageTrigger) -> Result<SessionStage, AppError> {
        self.stage.on(trigger).ok_or_else(|| {
            AppError::Validation(format!(
                "{trigger:?} is not allowed while the session is in the {:?} stage",
                self.stage
            ))
        })
    }

    /// Fires `trigger`, moving the session to its target stage.
    pub fn advance(&mut self, trigger: StageTrigger) -> Result<(), AppError> {
        self.stage = self.require(trigger)?;
        Ok(())
    }

    /// Stores the user-supplied experience bullets not yet on the résumé.
    /// Not an LLM stage; the text is consumed by `Fix` and `AssembleHandoff`.
    pub fn submit_experiences(&mut self, text: &str) -> Result<(), AppError> {
        self.require(SubmitExperiences)?;

        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "new experiences cannot be empty".to_string(),
            ));
        }

        self.log.record(format!("New experiences:\n{text}"));
        self.new_experiences = Some(text.to_string());
        self.advance(SubmitExperiences)
    }
}

/// In-process session registry. The outer lock guards the map; each session
/// carries its own `Mutex`, so stage execution within a session is strictly
/// serialized while distinct sessions do not contend.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Mutex<TailorSession>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: TailorSession) -> Uuid {
        let id = session.id;
        self.inner
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        id
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<Mutex<TailorSession>>, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }
}
