use std::path::PathBuf;

/// Staging prefix for the inbound cheque image.
pub const IMAGE_PREFIX: &str = "chequer_image";
/// Staging prefix for the OCR output base file.
pub const RESULT_PREFIX: &str = "tesseract_result";
/// Tesseract language profile tuned for the MICR E-13B font.
pub const MICR_LANGUAGE: &str = "mcr";

/// Immutable pipeline configuration, injected at construction.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Directory where per-request scratch files are created.
    pub staging_dir: PathBuf,
    pub image_prefix: String,
    pub result_prefix: String,
    /// Language profile passed to the OCR engine via `-l`.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            staging_dir: std::env::temp_dir(),
            image_prefix: IMAGE_PREFIX.to_string(),
            result_prefix: RESULT_PREFIX.to_string(),
            language: MICR_LANGUAGE.to_string(),
        }
    }
}

impl OcrConfig {
    /// Same constants as [`Default`], but staged under `dir` instead of the
    /// system temp directory.
    pub fn staged_in(dir: impl Into<PathBuf>) -> Self {
        Self { staging_dir: dir.into(), ..Self::default() }
    }
}
