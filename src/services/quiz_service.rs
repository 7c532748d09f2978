use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        news_item::render_news_content, quiz_question::shuffle_options, ContentSource, NewsItem,
        QuizQuestionList, QuizSnapshot,
    },
    repositories::{QuizTableRepository, SnapshotRepository},
    services::{
        model_service::QuizGenerator,
        news_scraper::{NewsSource, SourceFailure},
    },
};

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// Questions were generated. `snapshot_error` is set when they could not be saved.
    Generated {
        questions: QuizQuestionList,
        news: Vec<NewsItem>,
        snapshot_error: Option<String>,
    },
    /// Acquisition found no usable articles.
    NoNews { failures: Vec<SourceFailure> },
    /// The model call failed or returned nothing.
    NoQuestions { reason: String },
}

impl GenerationOutcome {
    pub fn message(&self) -> String {
        match self {
            GenerationOutcome::Generated {
                questions,
                news,
                snapshot_error,
            } => {
                let mut message = String::new();
                if !news.is_empty() {
                    message.push_str(&format!(
                        "Found {} recent AI news articles. ",
                        news.len()
                    ));
                }
                message.push_str(&format!("Generated {} questions!", questions.len()));
                if let Some(err) = snapshot_error {
                    message.push_str(&format!(" {}", err));
                }
                message
            }
            GenerationOutcome::NoNews { .. } => "No news articles found!".to_string(),
            GenerationOutcome::NoQuestions { reason } => {
                format!("No questions generated! {}", reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    pub index: usize,
    pub question: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushReport {
    pub source: ContentSource,
    pub attempted: usize,
    pub inserted: usize,
    pub failures: Vec<RowFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// No snapshot, or an empty one.
    NothingToPush,
    Pushed(PushReport),
}

impl PushOutcome {
    pub fn message(&self) -> String {
        match self {
            PushOutcome::NothingToPush => {
                "No questions available to push. Please generate them first.".to_string()
            }
            PushOutcome::Pushed(report) if report.failures.is_empty() => {
                format!("Pushed {} questions to the database.", report.inserted)
            }
            PushOutcome::Pushed(report) => format!(
                "Pushed {} of {} questions; {} failed.",
                report.inserted,
                report.attempted,
                report.failures.len()
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct QuizService {
    news_source: Arc<dyn NewsSource>,
    generator: QuizGenerator,
    snapshots: Arc<dyn SnapshotRepository>,
    table: Arc<dyn QuizTableRepository>,
    rng: Mutex<StdRng>,
}

impl QuizService {
    pub fn new(
        news_source: Arc<dyn NewsSource>,
        generator: QuizGenerator,
        snapshots: Arc<dyn SnapshotRepository>,
        table: Arc<dyn QuizTableRepository>,
    ) -> Self {
        Self {
            news_source,
            generator,
            snapshots,
            table,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replaces the option-shuffling randomness, e.g. with a seeded generator.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    /// Scrapes the news sources and turns the articles into questions.
    pub async fn generate_from_news(&self, num_questions: u32) -> GenerationOutcome {
        let report = self.news_source.collect_news().await;
        if report.is_empty() {
            log::warn!(
                "No news articles found ({} sources failed)",
                report.failures.len()
            );
            return GenerationOutcome::NoNews {
                failures: report.failures,
            };
        }

        let content = render_news_content(&report.items);
        self.generate_and_save(&content, num_questions, report.items)
            .await
    }

    pub async fn generate_from_text(
        &self,
        text: &str,
        num_questions: u32,
    ) -> AppResult<GenerationOutcome> {
        if text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Please enter some text to generate questions.".to_string(),
            ));
        }

        Ok(self.generate_and_save(text, num_questions, Vec::new()).await)
    }

    async fn generate_and_save(
        &self,
        content: &str,
        num_questions: u32,
        news: Vec<NewsItem>,
    ) -> GenerationOutcome {
        let questions = match self.generator.generate_quiz(content, num_questions).await {
            Ok(questions) if questions.is_empty() => {
                return GenerationOutcome::NoQuestions {
                    reason: "The model returned an empty question list.".to_string(),
                }
            }
            Ok(questions) => questions,
            Err(e) => {
                log::error!("Error generating quiz: {}", e);
                return GenerationOutcome::NoQuestions {
                    reason: e.to_string(),
                };
            }
        };

        let snapshot_error = match self.snapshots.save(&questions).await {
            Ok(_) => None,
            Err(e) => {
                log::error!("{}", e);
                Some(e.to_string())
            }
        };

        GenerationOutcome::Generated {
            questions,
            news,
            snapshot_error,
        }
    }

    /// The current snapshot, or `None` when it is missing or unreadable.
    pub async fn load_snapshot(&self) -> Option<QuizSnapshot> {
        match self.snapshots.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    /// Pushes the saved snapshot to the remote table.
    pub async fn push_snapshot(&self, source: ContentSource) -> PushOutcome {
        match self.load_snapshot().await {
            Some(snapshot) if !snapshot.questions.is_empty() => {
                PushOutcome::Pushed(self.push_questions(&snapshot.questions, source).await)
            }
            _ => PushOutcome::NothingToPush,
        }
    }

    /// Shuffles options, stamps the source label and inserts one row per question.
    ///
    /// A failed row is recorded and the remaining rows are still attempted.
    pub async fn push_questions(
        &self,
        questions: &QuizQuestionList,
        source: ContentSource,
    ) -> PushReport {
        let shuffled = {
            let mut rng = self.rng.lock().await;
            shuffle_options(&questions.questions, &mut *rng)
        };

        let mut inserted = 0;
        let mut failures = Vec::new();

        for (index, mut question) in shuffled.into_iter().enumerate() {
            question.stamp_source(source.label());
            match self.table.insert(&question).await {
                Ok(()) => inserted += 1,
                Err(e) => {
                    log::error!("Failed to insert question {}: {}", index + 1, e);
                    failures.push(RowFailure {
                        index,
                        question: question.question,
                        reason: e.to_string(),
                    });
                }
            }
        }

        log::info!(
            "Pushed {}/{} questions tagged '{}'",
            inserted,
            questions.len(),
            source
        );

        PushReport {
            source,
            attempted: questions.len(),
            inserted,
            failures,
        }
    }
}
