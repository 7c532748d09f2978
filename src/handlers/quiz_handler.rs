use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateFromNewsRequest, GenerateFromTextRequest, PushQuestionsRequest},
        response::{GenerationResponse, PushResponse, SnapshotResponse},
    },
};

fn rejected(req: &HttpRequest, action: &str, err: impl Into<AppError>) -> AppError {
    let err = err.into();
    log::warn!(
        "[{}] {} failed: {}",
        get_request_id(req).unwrap_or_else(|| "-".to_string()),
        action,
        err
    );
    err
}

#[post("/api/quiz/news")]
async fn generate_from_news(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateFromNewsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| rejected(&req, "news generation", e))?;

    let outcome = state
        .quiz_service
        .generate_from_news(request.num_questions)
        .await;
    Ok(HttpResponse::Ok().json(GenerationResponse::from(outcome)))
}

#[post("/api/quiz/custom")]
async fn generate_from_text(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateFromTextRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| rejected(&req, "custom text generation", e))?;

    let outcome = state
        .quiz_service
        .generate_from_text(&request.text, request.num_questions)
        .await
        .map_err(|e| rejected(&req, "custom text generation", e))?;
    Ok(HttpResponse::Ok().json(GenerationResponse::from(outcome)))
}

#[get("/api/quiz/snapshot")]
async fn get_snapshot(state: web::Data<AppState>) -> HttpResponse {
    let snapshot = state.quiz_service.load_snapshot().await;
    HttpResponse::Ok().json(SnapshotResponse::from(snapshot))
}

#[post("/api/quiz/push")]
async fn push_questions(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<PushQuestionsRequest>,
) -> HttpResponse {
    let outcome = state
        .quiz_service
        .push_snapshot(request.into_inner().source)
        .await;
    log::info!(
        "[{}] {}",
        get_request_id(&req).unwrap_or_else(|| "-".to_string()),
        outcome.message()
    );
    HttpResponse::Ok().json(PushResponse::from(outcome))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_from_news)
        .service(generate_from_text)
        .service(get_snapshot)
        .service(push_questions);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
        models::domain::NewsItem,
        repositories::SnapshotRepository,
        services::{
            model_service::{MockCompletionClient, QuizGenerator},
            news_scraper::AcquisitionReport,
            quiz_service::QuizService,
        },
        test_utils::{
            fakes::{InMemorySnapshotRepository, RecordingQuizTable, StaticNewsSource},
            fixtures::{sample_question_list, sample_reply_json},
        },
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn state_with(
        snapshots: Arc<InMemorySnapshotRepository>,
        table: Arc<RecordingQuizTable>,
    ) -> AppState {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Ok(sample_reply_json().to_string()));

        let news = StaticNewsSource::new(AcquisitionReport {
            items: vec![NewsItem::new("Chips cleared", "Export approved", "")],
            failures: vec![],
        });
        let service = QuizService::new(
            Arc::new(news),
            QuizGenerator::new(Arc::new(client)),
            snapshots,
            table,
        );
        AppState::with_service(service)
    }

    #[actix_web::test]
    async fn test_generate_from_news_returns_questions() {
        let snapshots = Arc::new(InMemorySnapshotRepository::new());
        let state = state_with(snapshots.clone(), Arc::new(RecordingQuizTable::new()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/news")
            .set_json(json!({ "num_questions": 2 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "generated");
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["snapshot_saved"], true);
        assert!(snapshots.load().await.expect("load").is_some());
    }

    #[actix_web::test]
    async fn test_generate_from_news_rejects_out_of_range_count() {
        let state = state_with(
            Arc::new(InMemorySnapshotRepository::new()),
            Arc::new(RecordingQuizTable::new()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/news")
            .set_json(json!({ "num_questions": 50 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_rejected_request_still_carries_request_id() {
        let state = state_with(
            Arc::new(InMemorySnapshotRepository::new()),
            Arc::new(RecordingQuizTable::new()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(RequestIdMiddleware)
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/custom")
            .set_json(json!({ "text": "", "num_questions": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[actix_web::test]
    async fn test_generate_from_blank_text_is_bad_request() {
        let state = state_with(
            Arc::new(InMemorySnapshotRepository::new()),
            Arc::new(RecordingQuizTable::new()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/custom")
            .set_json(json!({ "text": "   ", "num_questions": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_push_uses_saved_snapshot() {
        let snapshots = Arc::new(InMemorySnapshotRepository::new());
        snapshots
            .save(&sample_question_list())
            .await
            .expect("seed snapshot");
        let table = Arc::new(RecordingQuizTable::new());
        let state = state_with(snapshots, table.clone());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/push")
            .set_json(json!({ "source": "Scraped News" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "pushed");
        assert_eq!(body["report"]["inserted"], 2);
        assert_eq!(body["report"]["source"], "Scraped News");
        assert_eq!(table.rows().await.len(), 2);
    }

    #[actix_web::test]
    async fn test_snapshot_view_without_snapshot() {
        let state = state_with(
            Arc::new(InMemorySnapshotRepository::new()),
            Arc::new(RecordingQuizTable::new()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/quiz/snapshot")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "no_snapshot");
        assert_eq!(body["questions"], json!([]));
    }
}
