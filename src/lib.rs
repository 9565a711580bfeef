//! A library for decomposing and validating human names in tabular data.
//!
//! Given a free-text name field, [`decompose`] produces a structured
//! [`NameValidation`]: first/middle/last name, honorific and suffix, the
//! detected writing system, a coarse confidence level, and an ordered list
//! of data-quality issues. Decomposition is total and deterministic; bad
//! input degrades confidence, it never raises an error.
//!
//! ```
//! use name_audit::{decompose, Confidence};
//!
//! let v = decompose(Some("Dr. Ludwig van Beethoven Jr"));
//! assert_eq!("Dr", v.honorific);
//! assert_eq!("Ludwig", v.first_name);
//! assert_eq!("Van Beethoven", v.last_name);
//! assert_eq!("JR", v.suffix);
//! assert_eq!(Confidence::High, v.confidence);
//! ```
//!
//! The [`batch`] module feeds whole row collections through the decomposer,
//! merging the results back into each record and accumulating summary
//! counters.

pub mod batch;
mod case;
mod encoding;
mod namecase;
mod parse;
mod quality;
mod script;
mod suffix;
mod surname;
mod title;

#[cfg(feature = "serialization")]
mod serialization;

pub use crate::batch::{
    drop_problem_rows, enrich_row, enrich_rows, enrich_rows_parallel, BatchSummary, Row,
};
pub use crate::namecase::namecase;
pub use crate::parse::decompose;
pub use crate::script::{classify, Script};

use compact_str::CompactString;
use std::fmt;

/// Issue texts recorded on a [`NameValidation`], in detection order.
pub mod issues {
    pub const NULL_OR_EMPTY: &str = "Null or empty name";
    pub const EMPTY_AFTER_SANITIZATION: &str = "Empty name after sanitization";
    pub const PLACEHOLDER: &str = "Name may be a test or placeholder";
    pub const SECURITY_PATTERNS: &str = "Name may contain code or SQL patterns";
    pub const ENCODING_DAMAGE: &str = "Character encoding issues detected";
    pub const ENCODING_REPAIRED: &str = "Attempted to fix encoding issues";
    pub const NO_SPACE_NON_LATIN: &str =
        "Non-Latin name without spaces - assuming entire name is family name";
    pub const NON_LATIN_SPLIT: &str =
        "Non-Latin script detected - name splitting might be incorrect";
    pub const ONLY_HONORIFICS: &str = "Name consists of only honorifics/suffixes";
    pub const SINGLE_NAME: &str = "Only a single name was provided";
}

/// Coarse trust rating for a decomposition. Ordered: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured decomposition of one raw name field.
///
/// Name fields default to empty; `issues` preserves detection order. A
/// value is built fresh per input record and not mutated once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct NameValidation {
    pub original: CompactString,
    pub sanitized: CompactString,
    pub first_name: CompactString,
    pub middle_name: CompactString,
    pub last_name: CompactString,
    pub honorific: CompactString,
    pub suffix: CompactString,
    pub script: Script,
    pub is_comma_format: bool,
    pub issues: Vec<&'static str>,
    pub confidence: Confidence,
}

impl Default for NameValidation {
    fn default() -> NameValidation {
        NameValidation {
            original: CompactString::default(),
            sanitized: CompactString::default(),
            first_name: CompactString::default(),
            middle_name: CompactString::default(),
            last_name: CompactString::default(),
            honorific: CompactString::default(),
            suffix: CompactString::default(),
            script: Script::Unknown,
            is_comma_format: false,
            issues: Vec::new(),
            confidence: Confidence::High,
        }
    }
}

impl NameValidation {
    /// Lower the confidence to `ceiling` if it is currently higher.
    /// Confidence is only ever forced downward.
    pub(crate) fn cap_confidence(&mut self, ceiling: Confidence) {
        if ceiling < self.confidence {
            self.confidence = ceiling;
        }
    }

    /// The name parts rejoined in canonical order: honorific, first,
    /// middle, last, suffix.
    pub fn display(&self) -> String {
        let parts = [
            &self.honorific,
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.suffix,
        ];

        let mut out = String::new();
        for part in parts.iter().filter(|p| !p.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(part.as_str());
        }
        out
    }

    /// Whether the record falls under the problem filter: low confidence
    /// combined with a security, placeholder, or null/empty finding.
    /// Non-Latin and medium-confidence records are never discardable.
    pub fn is_discardable(&self) -> bool {
        self.confidence == Confidence::Low
            && self.issues.iter().any(|&issue| {
                issue == issues::SECURITY_PATTERNS
                    || issue == issues::PLACEHOLDER
                    || issue == issues::NULL_OR_EMPTY
                    || issue == issues::EMPTY_AFTER_SANITIZATION
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_ordering() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn cap_never_raises() {
        let mut v = NameValidation::default();
        v.cap_confidence(Confidence::Low);
        assert_eq!(Confidence::Low, v.confidence);
        v.cap_confidence(Confidence::Medium);
        assert_eq!(Confidence::Low, v.confidence);
    }

    #[test]
    fn display_joins_canonical_order() {
        let v = decompose(Some("dr. jane q. doe jr"));
        assert_eq!("Dr Jane Q. Doe JR", v.display());
    }

    #[test]
    fn discardable_requires_low_and_a_hard_issue() {
        assert!(decompose(Some("test user")).is_discardable());
        assert!(decompose(None).is_discardable());
        assert!(decompose(Some("Robert'); DROP TABLE")).is_discardable());

        // Encoding damage is low-confidence but not discardable
        let damaged = decompose(Some("Smith\u{FFFD} Alice"));
        assert_eq!(Confidence::Low, damaged.confidence);
        assert!(!damaged.is_discardable());

        // Medium-confidence caveats are never discardable
        assert!(!decompose(Some("Cher")).is_discardable());
        assert!(!decompose(Some("Иван Петров")).is_discardable());
    }
}
