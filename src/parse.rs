use crate::encoding;
use crate::namecase::namecase;
use crate::quality;
use crate::script::{self, Script};
use crate::suffix;
use crate::surname;
use crate::title;
use crate::{issues, Confidence, NameValidation};
use compact_str::CompactString;
use smallvec::SmallVec;

/// Collapse whitespace runs to single spaces and strip wrapping quotes.
pub(crate) fn sanitize(raw: &str) -> String {
    let stripped = raw.trim().trim_matches(|c| c == '"' || c == '\'');

    let mut out = String::with_capacity(stripped.len());
    for token in stripped.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

fn cased(word: &str, surname_position: bool, latin_rules: bool) -> String {
    if latin_rules {
        namecase(word, surname_position)
    } else {
        word.to_string()
    }
}

/// Decompose a raw name field into a [`NameValidation`].
///
/// Total over all inputs: malformed, damaged, and empty values produce a
/// best-effort result with advisory issues, never an error.
pub fn decompose(raw: Option<&str>) -> NameValidation {
    let mut v = NameValidation::default();

    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => {
            v.issues.push(issues::NULL_OR_EMPTY);
            v.confidence = Confidence::Low;
            return v;
        }
    };
    v.original = CompactString::from(raw);

    let mut text = sanitize(raw);
    if text.is_empty() {
        v.issues.push(issues::EMPTY_AFTER_SANITIZATION);
        v.confidence = Confidence::Low;
        return v;
    }

    let lower = text.to_lowercase();
    if quality::has_placeholder(&lower) {
        v.issues.push(issues::PLACEHOLDER);
        v.cap_confidence(Confidence::Low);
    }
    if quality::has_security_pattern(&lower) {
        v.issues.push(issues::SECURITY_PATTERNS);
        v.cap_confidence(Confidence::Low);
    }

    v.script = script::classify(&text);

    if v.script == Script::EncodingIssue {
        v.issues.push(issues::ENCODING_DAMAGE);
        v.cap_confidence(Confidence::Low);
        if let Some(repaired) = encoding::repair(&text) {
            text = repaired;
            v.issues.push(issues::ENCODING_REPAIRED);
        }
    }
    v.sanitized = CompactString::from(text.as_str());

    let latin_rules = v.script.uses_latin_casing();

    if !latin_rules {
        if v.script.is_spaceless() {
            // Scripts written without inter-word spaces get a single
            // first/family split at most; no honorific or particle logic.
            match text.find(' ') {
                Some(i) => {
                    v.first_name = CompactString::from(&text[..i]);
                    v.last_name = CompactString::from(&text[i + 1..]);
                }
                None => {
                    v.last_name = CompactString::from(text.as_str());
                    v.issues.push(issues::NO_SPACE_NON_LATIN);
                }
            }
            v.cap_confidence(Confidence::Medium);
            return v;
        }

        v.issues.push(issues::NON_LATIN_SPLIT);
        v.cap_confidence(Confidence::Medium);
    }

    if let Some(i) = text.find(',') {
        // "Last, First Middle"; only the first comma splits
        v.is_comma_format = true;

        let last = text[..i].trim();
        let rest = text[i + 1..].trim();

        v.last_name = CompactString::from(cased(last, true, latin_rules));

        let mut given = rest.split(' ').filter(|t| !t.is_empty());
        if let Some(first) = given.next() {
            v.first_name = CompactString::from(cased(first, false, latin_rules));
        }
        let middle = given
            .map(|t| cased(t, false, latin_rules))
            .collect::<Vec<_>>()
            .join(" ");
        if !middle.is_empty() {
            v.middle_name = CompactString::from(middle);
        }

        return v;
    }

    let mut tokens: SmallVec<[&str; 8]> =
        text.split(' ').filter(|t| !t.is_empty()).collect();
    if tokens.is_empty() {
        return v;
    }

    if tokens.len() > 1 && title::is_honorific(tokens[0]) {
        v.honorific = CompactString::from(title::canonicalize(tokens[0]));
        tokens.remove(0);
    }

    if tokens.len() > 1 && suffix::is_suffix(tokens[tokens.len() - 1]) {
        if let Some(stripped) = tokens.pop() {
            v.suffix = CompactString::from(suffix::canonicalize(stripped));
        }
    }

    match tokens.len() {
        0 => {
            v.issues.push(issues::ONLY_HONORIFICS);
            v.cap_confidence(Confidence::Low);
        }
        1 => {
            v.first_name = CompactString::from(cased(tokens[0], false, latin_rules));
            v.issues.push(issues::SINGLE_NAME);
            v.cap_confidence(Confidence::Medium);
        }
        2 => {
            v.first_name = CompactString::from(cased(tokens[0], false, latin_rules));
            v.last_name = CompactString::from(cased(tokens[1], true, latin_rules));
        }
        _ => {
            let surname_index = surname::find_surname_index(&tokens);

            v.first_name = CompactString::from(cased(tokens[0], false, latin_rules));
            if surname_index > 1 {
                let middle = tokens[1..surname_index]
                    .iter()
                    .map(|t| cased(t, false, latin_rules))
                    .collect::<Vec<_>>()
                    .join(" ");
                v.middle_name = CompactString::from(middle);
            }
            let last = tokens[surname_index..].join(" ");
            v.last_name = CompactString::from(cased(&last, true, latin_rules));
        }
    }

    v
}
