use async_trait::async_trait;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
};

/// The remote table finalized questions are inserted into, one row per question.
#[async_trait]
pub trait QuizTableRepository: Send + Sync {
    async fn insert(&self, question: &QuizQuestion) -> AppResult<()>;
}

pub struct RestQuizTableRepository {
    db: Database,
    table: String,
}

impl RestQuizTableRepository {
    pub fn new(db: &Database, table: &str) -> Self {
        Self {
            db: db.clone(),
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl QuizTableRepository for RestQuizTableRepository {
    async fn insert(&self, question: &QuizQuestion) -> AppResult<()> {
        let response = self
            .db
            .client()
            .post(self.db.table_url(&self.table))
            .header("Prefer", "return=minimal")
            .json(question)
            .send()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::DatabaseError(format!(
                "{} rejected insert with {}: {}",
                self.table, status, body
            )));
        }

        log::debug!("Inserted question into {}", self.table);
        Ok(())
    }
}
