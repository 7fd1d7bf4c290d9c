pub mod config;
pub mod extract;
pub mod pipeline;
pub mod recognizer;
pub mod select;
pub mod stage;
pub mod types;

pub use config::OcrConfig;
pub use extract::Extractor;
pub use pipeline::{ChequePipeline, PipelineError};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError, TesseractRecognizer};
pub use select::micr_line;
pub use types::ChequeResult;
