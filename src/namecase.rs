use crate::case::capitalize_word;
use phf::{phf_set, Set};

// Name-part words with positional capitalization rules: lower-cased when
// leading a full name, capitalized when starting the surname.
static PARTICLES: Set<&'static str> = phf_set! {
    "von", "van", "de", "del", "della", "di", "da", "do", "dos", "das",
    "du", "la", "le", "el", "les", "lo", "mac", "mc", "o'", "al", "bin",
    "ibn", "ap", "ben", "bat", "bint",
};

pub fn is_particle(word: &str) -> bool {
    PARTICLES.contains(word.to_lowercase().as_str())
}

/// Particle-aware capitalization of a name field.
///
/// `surname_position` selects the casing of particles: "van beethoven" is
/// "Van Beethoven" as a surname but "van Beethoven" would keep the particle
/// lower-cased elsewhere. Hyphenated parts are cased independently, and the
/// Mc/Mac/O' and internal-apostrophe patterns are preserved.
pub fn namecase(word: &str, surname_position: bool) -> String {
    if word.contains('-') {
        return word
            .split('-')
            .map(|part| namecase(part, surname_position))
            .collect::<Vec<_>>()
            .join("-");
    }

    let chars = word.chars().count();
    let lower = word.to_lowercase();

    if lower.starts_with("mac") && chars > 3 {
        return format!("Mac{}", capitalize_word(&word[3..]));
    }

    if lower.starts_with("mc") && chars > 3 {
        return format!("Mc{}", capitalize_word(&word[2..]));
    }

    if lower.starts_with("o'") && chars > 2 {
        return format!("O'{}", capitalize_word(&word[2..]));
    }

    if let Some(i) = word.find('\'') {
        if i > 0 && i + 1 < word.len() {
            return format!(
                "{}'{}",
                capitalize_word(&word[..i]),
                capitalize_word(&word[i + 1..])
            );
        }
    }

    let (head, rest) = match word.find(' ') {
        Some(i) => (&word[..i], Some(&word[i + 1..])),
        None => (word, None),
    };
    let head_lower = head.to_lowercase();
    if PARTICLES.contains(head_lower.as_str()) {
        let cased = if surname_position {
            capitalize_word(head)
        } else {
            head_lower
        };
        return match rest {
            Some(rest) => format!("{} {}", cased, namecase(rest, surname_position)),
            None => cased,
        };
    }

    capitalize_word(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word() {
        assert_eq!("Smith", namecase("smith", true));
        assert_eq!("Smith", namecase("SMITH", true));
        assert_eq!("Ludwig", namecase("ludwig", false));
    }

    #[test]
    fn hyphenated() {
        assert_eq!("Smith-Jones", namecase("smith-jones", true));
        assert_eq!("Anne-Marie", namecase("ANNE-MARIE", false));
    }

    #[test]
    fn mac_prefix() {
        assert_eq!("MacDonald", namecase("macdonald", true));
        assert_eq!("McDonald", namecase("mcdonald", true));
        // Too short for the prefix rule
        assert_eq!("Mac", namecase("Mac", true));
        assert_eq!("mac", namecase("MAC", false));
    }

    #[test]
    fn apostrophes() {
        assert_eq!("O'Brien", namecase("o'brien", true));
        assert_eq!("D'Artagnan", namecase("d'artagnan", false));
        // Trailing apostrophe gets no special treatment
        assert_eq!("Smith'", namecase("smith'", true));
    }

    #[test]
    fn particle_position() {
        assert_eq!("van", namecase("Van", false));
        assert_eq!("Van", namecase("van", true));
        assert_eq!("Van Beethoven", namecase("van beethoven", true));
        assert_eq!("van Beethoven", namecase("VAN BEETHOVEN", false));
        assert_eq!("De La Cruz", namecase("de la cruz", true));
    }

    #[test]
    fn idempotent() {
        for (word, surname) in [
            ("ludwig van beethoven", true),
            ("macdonald", true),
            ("o'brien", false),
            ("smith-jones", true),
            ("de la cruz", true),
            ("d'artagnan", false),
        ] {
            let once = namecase(word, surname);
            assert_eq!(once, namecase(&once, surname), "input {:?}", word);
        }
    }
}
