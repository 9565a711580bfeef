use unicode_normalization::UnicodeNormalization;

const REPLACEMENT_CHAR: char = '\u{FFFD}';

// Common UTF-8 read as Latin-1 mis-decodings. A fixed substitution table,
// not a general decoder; inputs outside the table stay damaged.
static MOJIBAKE_REPAIRS: [(&str, &str); 12] = [
    ("\u{C3}\u{A1}", "á"),
    ("\u{C3}\u{A9}", "é"),
    ("\u{C3}\u{AD}", "í"),
    ("\u{C3}\u{B3}", "ó"),
    ("\u{C3}\u{BA}", "ú"),
    ("\u{C3}\u{B1}", "ñ"),
    ("\u{C3}\u{A4}", "ä"),
    ("\u{C3}\u{B6}", "ö"),
    ("\u{C3}\u{BC}", "ü"),
    ("\u{C3}\u{A8}", "è"),
    ("\u{C3}\u{B4}", "ô"),
    ("\u{C3}\u{AE}", "î"),
];

/// Attempt to undo common mojibake and strip stray replacement characters.
///
/// Returns `Some(repaired)` only when the text actually changed.
pub fn repair(text: &str) -> Option<String> {
    let mut repaired = text.to_string();

    for &(broken, fixed) in MOJIBAKE_REPAIRS.iter() {
        if repaired.contains(broken) {
            repaired = repaired.replace(broken, fixed);
        }
    }

    if repaired.contains(REPLACEMENT_CHAR) {
        repaired.retain(|c| c != REPLACEMENT_CHAR);
    }

    let repaired: String = repaired.nfc().collect();

    if repaired == text {
        None
    } else {
        Some(repaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mojibake_pairs() {
        assert_eq!(Some("José".to_string()), repair("Jos\u{C3}\u{A9}"));
        assert_eq!(Some("Peña".to_string()), repair("Pe\u{C3}\u{B1}a"));
        assert_eq!(Some("Müller".to_string()), repair("M\u{C3}\u{BC}ller"));
    }

    #[test]
    fn strips_replacement_chars() {
        assert_eq!(Some("Jose".to_string()), repair("Jos\u{FFFD}e"));
        assert_eq!(Some("".to_string()), repair("\u{FFFD}\u{FFFD}"));
    }

    #[test]
    fn untouched_text_reports_no_change() {
        assert_eq!(None, repair("John Smith"));
        assert_eq!(None, repair("José"));
    }
}
