// Both screens are plain substring matches over the lower-cased sanitized
// string. Matches produce advisory issues, never rejections.

static PLACEHOLDER_WORDS: [&str; 16] = [
    "test",
    "user",
    "admin",
    "sample",
    "demo",
    "fake",
    "anonymous",
    "unknown",
    "noreply",
    "example",
    "null",
    "undefined",
    "n/a",
    "na",
    "none",
    "blank",
];

static SECURITY_PATTERNS: [&str; 13] = [
    ");", "--", "/*", "*/", ";", "drop", "select", "insert", "update",
    "delete", "union", "script", "<>",
];

/// True if the lower-cased text contains any placeholder vocabulary entry.
pub fn has_placeholder(lower: &str) -> bool {
    PLACEHOLDER_WORDS.iter().any(|word| lower.contains(word))
}

/// True if the lower-cased text contains any SQL or script fragment.
pub fn has_security_pattern(lower: &str) -> bool {
    SECURITY_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        assert!(has_placeholder("test user"));
        assert!(has_placeholder("jane example"));
        assert!(has_placeholder("n/a"));
        // Substring matching flags ordinary names too; that is the
        // documented behavior
        assert!(has_placeholder("anna"));
        assert!(!has_placeholder("john smith"));
    }

    #[test]
    fn security_patterns() {
        assert!(has_security_pattern("robert'); drop table students"));
        assert!(has_security_pattern("a; b"));
        assert!(has_security_pattern("select one"));
        assert!(has_security_pattern("<script>"));
        assert!(!has_security_pattern("john smith"));
    }
}
