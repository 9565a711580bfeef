use phf::{phf_set, Set};

static SUFFIXES: Set<&'static str> = phf_set! {
    "jr", "sr", "i", "ii", "iii", "iv", "v", "phd", "md", "dds", "esq",
};

pub fn is_suffix(word: &str) -> bool {
    let lower = clean(word).to_lowercase();
    SUFFIXES.contains(lower.as_str()) || lower.starts_with("jr") || lower.starts_with("sr")
}

/// Canonical stored form of a matched suffix token: punctuation dropped,
/// upper-cased ("jr." becomes "JR").
pub fn canonicalize(word: &str) -> String {
    clean(word).to_uppercase()
}

fn clean(word: &str) -> &str {
    word.trim_end_matches(|c| c == '.' || c == ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized() {
        assert!(is_suffix("Jr"));
        assert!(is_suffix("jr."));
        assert!(is_suffix("III"));
        assert!(is_suffix("PhD"));
        assert!(is_suffix("esq,"));
        // Prefix rule catches decorated generations
        assert!(is_suffix("Jr-"));
        assert!(is_suffix("Srs"));
    }

    #[test]
    fn unrecognized() {
        assert!(!is_suffix("Doe"));
        assert!(!is_suffix("vi"));
        assert!(!is_suffix(""));
    }

    #[test]
    fn canonical_form() {
        assert_eq!("JR", canonicalize("jr."));
        assert_eq!("III", canonicalize("iii"));
        assert_eq!("PHD", canonicalize("PhD,"));
    }
}
