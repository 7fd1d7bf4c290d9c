use std::sync::Arc;

use axum::extract::{Request, State};
use axum::routing::post;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use chequer_ocr::{ChequePipeline, ChequeResult, OcrBackend};

use crate::error::ApiError;
use crate::intake;

pub struct AppState<R: OcrBackend> {
    pub pipeline: Arc<ChequePipeline<R>>,
    pub http: reqwest::Client,
}

// Manual impl: `derive(Clone)` would demand `R: Clone`.
impl<R: OcrBackend> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self { pipeline: Arc::clone(&self.pipeline), http: self.http.clone() }
    }
}

pub fn create_router<R: OcrBackend + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/cheque", post(post_cheque::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `POST /cheque` — accepts either a single-part multipart upload or a JSON
/// body naming a remote `image_url`, and answers with the extracted MICR
/// fields. Empty fields are a valid 200, not a failure.
async fn post_cheque<R: OcrBackend + 'static>(
    State(state): State<AppState<R>>,
    req: Request,
) -> Result<Json<ChequeResult>, ApiError> {
    let image = intake::image_bytes(&state.http, req).await?;
    let result = state.pipeline.process_bytes(&image).await?;
    Ok(Json(result))
}
