use thiserror::Error;

use crate::config::OcrConfig;
use crate::extract::Extractor;
use crate::recognizer::{OcrBackend, OcrError};
use crate::select;
use crate::stage::StagedFile;
use crate::types::ChequeResult;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
}

/// Orchestrates: stage image → OCR → select MICR line → extract fields.
///
/// Every invocation owns its own staging files, so concurrent requests
/// never interfere; all staging is released before this returns, on every
/// path.
pub struct ChequePipeline<R: OcrBackend> {
    recognizer: R,
    config: OcrConfig,
}

impl<R: OcrBackend> ChequePipeline<R> {
    pub fn new(recognizer: R, config: OcrConfig) -> Self {
        Self { recognizer, config }
    }

    /// Process one cheque image.
    pub async fn process_bytes(&self, data: &[u8]) -> Result<ChequeResult, PipelineError> {
        let staged = StagedFile::create(&self.config.staging_dir, &self.config.image_prefix)?;
        tokio::fs::write(staged.path(), data).await?;

        let text = self.recognizer.recognize(staged.path())?;

        let micr = select::micr_line(&text);
        tracing::debug!(micr_line = %micr, "selected MICR line");

        let result = Extractor::extract(micr);
        tracing::info!(routing = %result.routing, account = %result.account, "cheque processed");
        Ok(result)
    }
}
