use crate::{decompose, issues, NameValidation};
use crossbeam_utils::thread;
use std::collections::BTreeMap;

/// A dynamic-shape input record: column name to optional field value.
pub type Row = BTreeMap<String, Option<String>>;

pub const FIRST_NAME_KEY: &str = "First_Name";
pub const LAST_NAME_KEY: &str = "Last_Name";
pub const MIDDLE_NAME_KEY: &str = "Middle_Name";
pub const HONORIFIC_KEY: &str = "Honorific";
pub const SUFFIX_KEY: &str = "Suffix";
pub const SCRIPT_KEY: &str = "Script";
pub const CONFIDENCE_KEY: &str = "Confidence";
pub const ISSUES_KEY: &str = "Issues";

/// Counters accumulated over one enrichment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub processed: usize,
    pub non_latin: usize,
    pub placeholder: usize,
    pub security: usize,
    pub null_or_empty: usize,
    pub with_issues: usize,
    pub comma_format: usize,
}

impl BatchSummary {
    fn record(&mut self, validation: &NameValidation) {
        self.processed += 1;

        if !validation.script.uses_latin_casing() {
            self.non_latin += 1;
        }
        if validation.issues.contains(&issues::PLACEHOLDER) {
            self.placeholder += 1;
        }
        if validation.issues.contains(&issues::SECURITY_PATTERNS) {
            self.security += 1;
        }
        if validation.issues.contains(&issues::NULL_OR_EMPTY)
            || validation.issues.contains(&issues::EMPTY_AFTER_SANITIZATION)
        {
            self.null_or_empty += 1;
        }
        if !validation.issues.is_empty() {
            self.with_issues += 1;
        }
        if validation.is_comma_format {
            self.comma_format += 1;
        }
    }

    pub fn merge(&mut self, other: &BatchSummary) {
        self.total += other.total;
        self.processed += other.processed;
        self.non_latin += other.non_latin;
        self.placeholder += other.placeholder;
        self.security += other.security;
        self.null_or_empty += other.null_or_empty;
        self.with_issues += other.with_issues;
        self.comma_format += other.comma_format;
    }
}

/// Decompose `row[column]` and merge the output fields back into the row.
///
/// `First_Name` and `Last_Name` are always written; the remaining keys only
/// when non-empty.
pub fn enrich_row(row: &mut Row, column: &str) -> NameValidation {
    let value: Option<String> = row.get(column).and_then(|v| v.clone());
    let validation = decompose(value.as_deref());

    row.insert(
        FIRST_NAME_KEY.to_string(),
        Some(validation.first_name.to_string()),
    );
    row.insert(
        LAST_NAME_KEY.to_string(),
        Some(validation.last_name.to_string()),
    );
    if !validation.middle_name.is_empty() {
        row.insert(
            MIDDLE_NAME_KEY.to_string(),
            Some(validation.middle_name.to_string()),
        );
    }
    if !validation.honorific.is_empty() {
        row.insert(
            HONORIFIC_KEY.to_string(),
            Some(validation.honorific.to_string()),
        );
    }
    if !validation.suffix.is_empty() {
        row.insert(SUFFIX_KEY.to_string(), Some(validation.suffix.to_string()));
    }
    row.insert(
        SCRIPT_KEY.to_string(),
        Some(validation.script.to_string()),
    );
    row.insert(
        CONFIDENCE_KEY.to_string(),
        Some(validation.confidence.to_string()),
    );
    if !validation.issues.is_empty() {
        row.insert(ISSUES_KEY.to_string(), Some(validation.issues.join("; ")));
    }

    validation
}

/// Enrich every row in place, returning the per-row validations (in row
/// order) and the accumulated summary.
pub fn enrich_rows(rows: &mut [Row], column: &str) -> (Vec<NameValidation>, BatchSummary) {
    let mut summary = BatchSummary {
        total: rows.len(),
        ..BatchSummary::default()
    };
    let mut validations = Vec::with_capacity(rows.len());

    for row in rows.iter_mut() {
        let validation = enrich_row(row, column);
        summary.record(&validation);
        validations.push(validation);
    }

    (validations, summary)
}

/// Data-parallel variant of [`enrich_rows`] over disjoint row chunks.
///
/// Decomposition has no cross-record dependencies, so chunks share nothing;
/// results and counters are identical to the sequential pass.
pub fn enrich_rows_parallel(
    rows: &mut [Row],
    column: &str,
    threads: usize,
) -> (Vec<NameValidation>, BatchSummary) {
    let threads = threads.max(1);
    if threads == 1 || rows.len() < 2 {
        return enrich_rows(rows, column);
    }

    let chunk_size = (rows.len() + threads - 1) / threads;
    let mut validations = Vec::with_capacity(rows.len());
    let mut summary = BatchSummary::default();

    thread::scope(|scope| {
        let handles: Vec<_> = rows
            .chunks_mut(chunk_size)
            .map(|chunk| scope.spawn(move |_| enrich_rows(chunk, column)))
            .collect();

        for handle in handles {
            let (mut chunk_validations, chunk_summary) =
                handle.join().expect("enrichment worker panicked");
            validations.append(&mut chunk_validations);
            summary.merge(&chunk_summary);
        }
    })
    .expect("enrichment worker panicked");

    (validations, summary)
}

/// Remove rows whose validation is discardable, in lockstep with their
/// validations. Returns the number of rows dropped.
pub fn drop_problem_rows(rows: &mut Vec<Row>, validations: &mut Vec<NameValidation>) -> usize {
    debug_assert_eq!(rows.len(), validations.len());

    let keep: Vec<bool> = validations.iter().map(|v| !v.is_discardable()).collect();
    let dropped = keep.iter().filter(|&&k| !k).count();

    let mut i = 0;
    rows.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });
    let mut j = 0;
    validations.retain(|_| {
        let k = keep[j];
        j += 1;
        k
    });

    dropped
}
