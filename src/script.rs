use std::fmt;

/// Writing system a string is classified into.
///
/// `NonLatin` covers text outside Basic Latin that matches none of the
/// known block ranges; `EncodingIssue` marks text containing U+FFFD;
/// `Unknown` is reserved for empty or absent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Cyrillic,
    Devanagari,
    Arabic,
    Han,
    Hiragana,
    Katakana,
    Hangul,
    Thai,
    NonLatin,
    EncodingIssue,
    Unknown,
}

impl Script {
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
            Script::Devanagari => "devanagari",
            Script::Arabic => "arabic",
            Script::Han => "han",
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
            Script::Hangul => "hangul",
            Script::Thai => "thai",
            Script::NonLatin => "non-latin",
            Script::EncodingIssue => "encoding-issue",
            Script::Unknown => "unknown",
        }
    }

    /// Scripts conventionally written without inter-word spaces, which get
    /// the whole-string-is-a-family-name treatment when no space is present.
    pub fn is_spaceless(&self) -> bool {
        matches!(
            self,
            Script::Han | Script::Hiragana | Script::Katakana | Script::Thai
        )
    }

    /// Whether Latin-oriented capitalization and token rules apply. Damaged
    /// text is treated as Latin that was mangled in transit.
    pub fn uses_latin_casing(&self) -> bool {
        matches!(
            self,
            Script::Latin | Script::Unknown | Script::EncodingIssue
        )
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const REPLACEMENT_CHAR: char = '\u{FFFD}';

// Checked in this order; for mixed-script strings the earliest listed
// script wins. That is the documented behavior, kept as-is.
const PRIORITY: [Script; 8] = [
    Script::Cyrillic,
    Script::Devanagari,
    Script::Arabic,
    Script::Han,
    Script::Hiragana,
    Script::Katakana,
    Script::Hangul,
    Script::Thai,
];

fn in_script(c: char, script: Script) -> bool {
    match script {
        Script::Cyrillic => ('\u{0400}'..='\u{04FF}').contains(&c),
        Script::Devanagari => ('\u{0900}'..='\u{097F}').contains(&c),
        Script::Arabic => {
            ('\u{0600}'..='\u{06FF}').contains(&c) || ('\u{0750}'..='\u{077F}').contains(&c)
        }
        Script::Han => {
            ('\u{4E00}'..='\u{9FFF}').contains(&c) || ('\u{3400}'..='\u{4DBF}').contains(&c)
        }
        Script::Hiragana => ('\u{3040}'..='\u{309F}').contains(&c),
        Script::Katakana => ('\u{30A0}'..='\u{30FF}').contains(&c),
        Script::Hangul => {
            ('\u{AC00}'..='\u{D7AF}').contains(&c) || ('\u{1100}'..='\u{11FF}').contains(&c)
        }
        Script::Thai => ('\u{0E00}'..='\u{0E7F}').contains(&c),
        _ => false,
    }
}

/// Classify the writing system of `text`.
///
/// Pure and deterministic. Encoding damage (U+FFFD) takes priority over any
/// script signal; empty input is `Unknown`.
pub fn classify(text: &str) -> Script {
    if text.is_empty() {
        return Script::Unknown;
    }

    if text.contains(REPLACEMENT_CHAR) {
        return Script::EncodingIssue;
    }

    for &script in PRIORITY.iter() {
        if text.chars().any(|c| in_script(c, script)) {
            return script;
        }
    }

    if text.is_ascii() {
        Script::Latin
    } else {
        Script::NonLatin
    }
}
