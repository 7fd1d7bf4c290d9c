use serde::{Deserialize, Serialize};

/// The two MICR fields a downstream payments system needs.
///
/// Either field may be the empty string when its delimiters never made it
/// through OCR — partial extraction is a valid terminal state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChequeResult {
    pub account: String,
    pub routing: String,
}
