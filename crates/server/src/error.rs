use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use chequer_ocr::PipelineError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing image_url in request body")]
    MissingImageUrl,

    #[error("Failed to read request body: {0}")]
    Body(String),

    #[error("Multiple parts found. Currently we only support a single part.")]
    MultipleParts,

    #[error("No image part found in multipart body")]
    MissingPart,

    #[error("Failed to read multipart body: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Failed to fetch image: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Json(_)
            | ApiError::MissingImageUrl
            | ApiError::Body(_)
            | ApiError::MultipleParts
            | ApiError::MissingPart
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Plain-text reason only — never internal paths or backtraces.
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(
            ApiError::MultipleParts.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingImageUrl.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn pipeline_errors_map_to_500() {
        let err = ApiError::Pipeline(PipelineError::Io(std::io::Error::other("disk full")));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
