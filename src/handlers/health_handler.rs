use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let table_health = match &state.db {
        Some(db) => db.health_check().await.is_ok(),
        None => false,
    };

    let response = serde_json::json!({
        "status": if table_health { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "remote_table": if table_health { "ok" } else { "error" }
        }
    });

    if table_health {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        services::{
            model_service::{MockCompletionClient, QuizGenerator},
            news_scraper::AcquisitionReport,
            quiz_service::QuizService,
        },
        test_utils::fakes::{InMemorySnapshotRepository, RecordingQuizTable, StaticNewsSource},
    };
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_ready_without_remote_table_is_unavailable() {
        let service = QuizService::new(
            Arc::new(StaticNewsSource::new(AcquisitionReport::default())),
            QuizGenerator::new(Arc::new(MockCompletionClient::new())),
            Arc::new(InMemorySnapshotRepository::new()),
            Arc::new(RecordingQuizTable::new()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::with_service(service)))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "not_ready");
        assert_eq!(body["dependencies"]["remote_table"], "error");
    }
}
