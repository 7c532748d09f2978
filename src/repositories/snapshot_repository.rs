use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizQuestionList, QuizSnapshot},
};

/// Single-slot local store for the most recently generated questions.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Overwrites whatever snapshot was there before.
    async fn save(&self, questions: &QuizQuestionList) -> AppResult<QuizSnapshot>;
    /// `Ok(None)` when nothing has been saved yet.
    async fn load(&self) -> AppResult<Option<QuizSnapshot>>;
}

/// Stores the snapshot as a BSON document at a fixed path.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SnapshotRepository for FileSnapshotRepository {
    async fn save(&self, questions: &QuizQuestionList) -> AppResult<QuizSnapshot> {
        let mut questions = questions.clone();
        for question in &mut questions.questions {
            question.metadata.values_mut().for_each(fit_integer_range);
        }
        let snapshot = QuizSnapshot::new(questions);
        let bytes = bson::serialize_to_vec(&snapshot)
            .map_err(|e| AppError::SnapshotError(format!("Error saving questions: {}", e)))?;

        fs::write(&self.path, bytes).await.map_err(|e| {
            AppError::SnapshotError(format!(
                "Error saving questions to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        log::info!(
            "Saved {} questions to {}",
            snapshot.questions.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    async fn load(&self) -> AppResult<Option<QuizSnapshot>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::SnapshotError(format!(
                    "Error loading questions from {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let snapshot = bson::deserialize_from_slice::<QuizSnapshot>(&bytes).map_err(|e| {
            AppError::SnapshotError(format!(
                "Error loading questions from {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(snapshot))
    }
}

/// BSON integers are signed 64-bit; larger unsigned values are kept as their decimal string.
fn fit_integer_range(value: &mut Value) {
    if let Some(big) = value.as_u64().filter(|n| *n > i64::MAX as u64) {
        *value = Value::String(big.to_string());
        return;
    }
    match value {
        Value::Array(items) => items.iter_mut().for_each(fit_integer_range),
        Value::Object(map) => map.values_mut().for_each(fit_integer_range),
        _ => {}
    }
}
