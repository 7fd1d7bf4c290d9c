use std::path::Path;
use std::process::Command;

use thiserror::Error;

use crate::config::OcrConfig;
use crate::stage::OutputStage;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Failed to stage OCR output file: {0}")]
    Stage(#[source] std::io::Error),
    #[error("Failed to launch tesseract: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Tesseract exited with {status}")]
    Engine { status: std::process::ExitStatus },
    #[error("Tesseract produced no readable output: {0}")]
    Output(#[source] std::io::Error),
}

/// Abstraction over an OCR engine.
/// Implementations read an image file from disk and return the recognized
/// text, one visual line per output line.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image: &Path) -> Result<String, OcrError>;
}

// ── Tesseract backend ─────────────────────────────────────────────────────────

/// Invokes the external `tesseract` executable against an image file.
///
/// The engine is handed a staged output base path and writes its text to
/// `<base>.txt` by its own convention. Both staging files are removed when
/// the call returns, success or not. A failed run is never retried.
pub struct TesseractRecognizer {
    config: OcrConfig,
}

impl TesseractRecognizer {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }
}

impl OcrBackend for TesseractRecognizer {
    fn recognize(&self, image: &Path) -> Result<String, OcrError> {
        let out = OutputStage::create(&self.config.staging_dir, &self.config.result_prefix)
            .map_err(OcrError::Stage)?;

        let result = Command::new("tesseract")
            .arg(image)
            .arg(out.base_path())
            .arg("-l")
            .arg(&self.config.language)
            .output()
            .map_err(OcrError::Spawn)?;

        if !result.status.success() {
            tracing::error!(
                status = %result.status,
                stdout = %String::from_utf8_lossy(&result.stdout),
                stderr = %String::from_utf8_lossy(&result.stderr),
                "tesseract failed"
            );
            return Err(OcrError::Engine { status: result.status });
        }

        std::fs::read_to_string(out.text_path()).map_err(OcrError::Output)
    }
}

// ── Mock backend (used for tests) ─────────────────────────────────────────────

/// Returns a pre-set string — lets the pipeline and HTTP layer be exercised
/// without Tesseract installed.
pub struct MockRecognizer {
    pub text: String,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OcrBackend for MockRecognizer {
    fn recognize(&self, _image: &Path) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_preset_text() {
        let r = MockRecognizer::new("[123456789[\n@0001234567@");
        assert_eq!(
            r.recognize(Path::new("/nonexistent")).unwrap(),
            "[123456789[\n@0001234567@"
        );
    }

    #[test]
    fn mock_ignores_image_path() {
        let r = MockRecognizer::new("hello");
        assert_eq!(r.recognize(Path::new("a")).unwrap(), "hello");
        assert_eq!(r.recognize(Path::new("b")).unwrap(), "hello");
    }

    #[test]
    fn tesseract_cleans_up_staging_on_spawn_failure() {
        // Point the recognizer at a staging dir we control; the binary lookup
        // happens after staging, so a missing image still exercises cleanup.
        let dir = tempfile::tempdir().unwrap();
        let r = TesseractRecognizer::new(OcrConfig::staged_in(dir.path()));
        let _ = r.recognize(Path::new("/nonexistent/cheque.png"));
        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(leftovers.is_empty(), "staging dir not empty: {leftovers:?}");
    }
}
