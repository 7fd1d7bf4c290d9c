use std::sync::OnceLock;

use regex::Regex;

use crate::types::ChequeResult;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// OCR misreads the MICR delimiters inconsistently — print quality often
// drops one of the pair — so each field carries an ordered candidate list
// that tolerates an asymmetric pair: mandatory opener with optional closer
// first, then the mirror image. First non-empty capture wins.

// Account number: delimited by the on-us symbol, rendered `@`.
re!(re_account_open, r"@(\d+)@?");
re!(re_account_close, r"@?(\d+)@");

// Routing number: delimited by the transit symbol, rendered `[`. Transit
// numbers may carry an embedded hyphen between components.
re!(re_routing_open, r"\[([\d-]+)\[?");
re!(re_routing_close, r"\[?([\d-]+)\[");

fn account_patterns() -> [&'static Regex; 2] {
    [re_account_open(), re_account_close()]
}

fn routing_patterns() -> [&'static Regex; 2] {
    [re_routing_open(), re_routing_close()]
}

/// First capture group of the first pattern that matches, or `""`.
fn first_capture<'a>(line: &'a str, patterns: &[&Regex]) -> &'a str {
    patterns
        .iter()
        .find_map(|re| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or("")
}

// ── Public extraction API ─────────────────────────────────────────────────────

pub struct Extractor;

impl Extractor {
    /// Extract both fields from a MICR line. Missing delimiters for one
    /// field leave that field empty without affecting the other.
    pub fn extract(micr_line: &str) -> ChequeResult {
        ChequeResult {
            account: Self::account(micr_line).to_string(),
            routing: Self::routing(micr_line).to_string(),
        }
    }

    pub fn account(micr_line: &str) -> &str {
        first_capture(micr_line, &account_patterns())
    }

    pub fn routing(micr_line: &str) -> &str {
        first_capture(micr_line, &routing_patterns())
    }
}
