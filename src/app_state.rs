use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{FileSnapshotRepository, RestQuizTableRepository},
    services::{
        model_service::{OpenAiCompletionClient, QuizGenerator},
        news_scraper::build_http_news_source,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub db: Option<Database>,
}

impl AppState {
    pub fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config)?;

        let news_source = Arc::new(build_http_news_source(config.news_source_urls.clone())?);
        let generator = QuizGenerator::new(Arc::new(OpenAiCompletionClient::new(config)));
        let snapshots = Arc::new(FileSnapshotRepository::new(&config.snapshot_path));
        let table = Arc::new(RestQuizTableRepository::new(&db, &config.quiz_table));

        let quiz_service = Arc::new(QuizService::new(news_source, generator, snapshots, table));

        Ok(Self {
            quiz_service,
            db: Some(db),
        })
    }

    /// Builds state around an already assembled service, without a remote table connection.
    pub fn with_service(quiz_service: QuizService) -> Self {
        Self {
            quiz_service: Arc::new(quiz_service),
            db: None,
        }
    }
}
