/// The OCR profile renders the MICR "on-us" symbol as `@`; its presence is
/// what structurally marks a recognized line as the MICR line.
pub const ON_US_SENTINEL: char = '@';

/// Pick the MICR line out of raw OCR text.
///
/// Scans every line and keeps the last one containing the on-us sentinel:
/// noise lines with a stray `@` sometimes precede the true MICR line, which
/// conventionally sits at the bottom of the cheque. No candidate is not an
/// error — the empty string is returned and extraction yields empty fields.
pub fn micr_line(text: &str) -> &str {
    text.lines()
        .filter(|line| line.contains(ON_US_SENTINEL))
        .next_back()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sentinel_yields_empty() {
        assert_eq!(micr_line("PAY TO THE ORDER OF\nONE HUNDRED DOLLARS"), "");
        assert_eq!(micr_line(""), "");
    }

    #[test]
    fn single_candidate_is_returned() {
        let text = "MEMO rent\n[123456789[@0001234567@";
        assert_eq!(micr_line(text), "[123456789[@0001234567@");
    }

    #[test]
    fn last_candidate_wins_over_earlier_noise() {
        let text = "noise @ smudge\nmore text\n[123456789[@0001234567@";
        assert_eq!(micr_line(text), "[123456789[@0001234567@");
    }

    #[test]
    fn sentinel_position_within_line_is_irrelevant() {
        assert_eq!(micr_line("trailing sentinel @"), "trailing sentinel @");
    }
}
