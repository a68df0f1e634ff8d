use actix_web::{post, web, HttpResponse};
use tracing::error;

use crate::state::AppState;
use crate::types::{AnalyzeRequest, ErrorResponse};

/// Analyze text via the remote chat-completion API
#[post("/analyze")]
pub async fn analyze(
    req: web::Json<AnalyzeRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    match state.remote.analyze(&req.text).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            error!("Remote analysis failed: {}", e);
            // Every failure class collapses to one generic 500 response.
            Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    }
}
