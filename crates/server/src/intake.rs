//! Request normalization: turn either accepted body encoding into exactly
//! one cheque image.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::Deserialize;

use crate::error::ApiError;

/// Cap on a buffered request body or multipart image part.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// JSON body for the non-upload path.
#[derive(Debug, Deserialize)]
pub struct ChequeRequest {
    pub image_url: Option<String>,
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

/// Produce exactly one image byte sequence from the raw request, or fail.
///
/// Multipart bodies must carry a single part; anything else is decoded as
/// JSON naming a remote `image_url` which is fetched with `http`.
pub async fn image_bytes(http: &reqwest::Client, req: Request) -> Result<Vec<u8>, ApiError> {
    if is_multipart(req.headers()) {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| ApiError::Body(e.to_string()))?;
        single_part_bytes(multipart).await
    } else {
        let body = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|e| ApiError::Body(e.to_string()))?;
        let cheque_req: ChequeRequest = serde_json::from_slice(&body)?;
        let url = cheque_req.image_url.ok_or(ApiError::MissingImageUrl)?;
        fetch_image(http, &url).await
    }
}

/// Buffer the single image part. A second part is a hard error: the
/// buffered first part is discarded rather than returned alongside it.
async fn single_part_bytes(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    let first = multipart.next_field().await?.ok_or(ApiError::MissingPart)?;
    let image = first.bytes().await?;
    if image.len() > MAX_BODY_BYTES {
        return Err(ApiError::Body(format!(
            "image part too large: {} bytes (max {MAX_BODY_BYTES})",
            image.len()
        )));
    }

    if multipart.next_field().await?.is_some() {
        return Err(ApiError::MultipleParts);
    }

    Ok(image.to_vec())
}

async fn fetch_image(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, ApiError> {
    let response = http.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
