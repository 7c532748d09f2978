use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::domain::{NewsItem, QuizQuestion, QuizSnapshot},
    services::{
        news_scraper::SourceFailure,
        quiz_service::{GenerationOutcome, PushOutcome, PushReport},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Generated,
    NoNews,
    NoQuestions,
    Pushed,
    NothingToPush,
    Snapshot,
    NoSnapshot,
}

#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub status: ActionStatus,
    pub message: String,
    pub questions: Vec<QuizQuestion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub news: Vec<NewsItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_failures: Vec<SourceFailure>,
    pub snapshot_saved: bool,
}

impl From<GenerationOutcome> for GenerationResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            GenerationOutcome::Generated {
                questions,
                news,
                snapshot_error,
            } => GenerationResponse {
                status: ActionStatus::Generated,
                message,
                questions: questions.questions,
                news,
                source_failures: Vec::new(),
                snapshot_saved: snapshot_error.is_none(),
            },
            GenerationOutcome::NoNews { failures } => GenerationResponse {
                status: ActionStatus::NoNews,
                message,
                questions: Vec::new(),
                news: Vec::new(),
                source_failures: failures,
                snapshot_saved: false,
            },
            GenerationOutcome::NoQuestions { .. } => GenerationResponse {
                status: ActionStatus::NoQuestions,
                message,
                questions: Vec::new(),
                news: Vec::new(),
                source_failures: Vec::new(),
                snapshot_saved: false,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PushResponse {
    pub status: ActionStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PushReport>,
}

impl From<PushOutcome> for PushResponse {
    fn from(outcome: PushOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            PushOutcome::NothingToPush => PushResponse {
                status: ActionStatus::NothingToPush,
                message,
                report: None,
            },
            PushOutcome::Pushed(report) => PushResponse {
                status: ActionStatus::Pushed,
                message,
                report: Some(report),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub status: ActionStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    pub questions: Vec<QuizQuestion>,
}

impl From<Option<QuizSnapshot>> for SnapshotResponse {
    fn from(snapshot: Option<QuizSnapshot>) -> Self {
        match snapshot {
            Some(snapshot) => SnapshotResponse {
                status: ActionStatus::Snapshot,
                message: format!("{} saved questions", snapshot.questions.len()),
                saved_at: Some(snapshot.saved_at),
                questions: snapshot.questions.questions,
            },
            None => SnapshotResponse {
                status: ActionStatus::NoSnapshot,
                message: "No saved questions. Please generate them first.".to_string(),
                saved_at: None,
                questions: Vec::new(),
            },
        }
    }
}
