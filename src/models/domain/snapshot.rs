use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::QuizQuestionList;

/// The single persisted copy of the most recently generated question list.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizSnapshot {
    pub saved_at: DateTime<Utc>,
    pub questions: QuizQuestionList,
}

impl QuizSnapshot {
    pub fn new(questions: QuizQuestionList) -> Self {
        Self {
            saved_at: Utc::now(),
            questions,
        }
    }
}
