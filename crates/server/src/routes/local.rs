use actix_web::{post, web, HttpResponse};
use tracing::error;

use crate::state::AppState;
use crate::types::{AnalyzeRequest, ErrorResponse};

/// Analyze text with the local summarization and sentiment models
///
/// Backs the interactive page; failures surface there as a warning banner.
#[post("/local/analyze")]
pub async fn local_analyze(
    req: web::Json<AnalyzeRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    match state.local.analyze(&req.text).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            error!("Model-backed analysis failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;
    use textlens_common::{AppConfig, Result, TextLensError};
    use textlens_llm::{ChatBackend, InferenceBackend, Sentiment};
    use textlens_text::AnalysisResult;

    struct StubInference;

    #[async_trait::async_trait]
    impl InferenceBackend for StubInference {
        async fn summarize(&self, _text: &str) -> Result<String> {
            Ok("AI is changing how software is built.".to_string())
        }

        async fn classify_sentiment(&self, _text: &str) -> Result<Sentiment> {
            Ok(Sentiment {
                label: "POSITIVE".to_string(),
                score: 0.9,
            })
        }
    }

    struct FailingInference;

    #[async_trait::async_trait]
    impl InferenceBackend for FailingInference {
        async fn summarize(&self, _text: &str) -> Result<String> {
            Err(TextLensError::inference("model unavailable"))
        }

        async fn classify_sentiment(&self, _text: &str) -> Result<Sentiment> {
            Err(TextLensError::inference("model unavailable"))
        }
    }

    struct UnusedChat;

    #[async_trait::async_trait]
    impl ChatBackend for UnusedChat {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            unreachable!("local route must not call the chat backend")
        }
    }

    fn app_state(inference: Arc<dyn InferenceBackend>) -> web::Data<Arc<AppState>> {
        let state = AppState::with_backends(AppConfig::default(), inference, Arc::new(UnusedChat));
        web::Data::new(Arc::new(state))
    }

    #[actix_web::test]
    async fn test_local_analyze_scenario() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(Arc::new(StubInference)))
                .service(local_analyze),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/local/analyze")
            .set_json(serde_json::json!({
                "text": "AI is transforming software. It enables automation. It raises new risks."
            }))
            .to_request();
        let result: AnalysisResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(result.word_count, 11);
        assert_eq!(result.reading_time, "1 min");
        assert_eq!(result.sentiment, "POSITIVE (90% confidence)");
        assert_eq!(
            result.key_points,
            vec![
                "AI is transforming software",
                "It enables automation",
                "It raises new risks"
            ]
        );
    }

    #[actix_web::test]
    async fn test_model_failure_is_500() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(Arc::new(FailingInference)))
                .service(local_analyze),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/local/analyze")
            .set_json(serde_json::json!({"text": "some text to analyze"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }

    #[actix_web::test]
    async fn test_empty_input_is_reported() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(Arc::new(StubInference)))
                .service(local_analyze),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/local/analyze")
            .set_json(serde_json::json!({"text": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("Invalid input"));
    }
}
