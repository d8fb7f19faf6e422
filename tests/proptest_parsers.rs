//! Property-based tests for git output parsers
//!
//! Uses proptest to verify parsers handle arbitrary input without panicking.
//! Reference: https://lib.rs/crates/proptest

use proptest::prelude::*;
use commit_train::git::{Parser, commits_oldest_first, parse_shortstat};

// =============================================================================
// Strategy generators for realistic-ish git output
// =============================================================================

/// Generate a full commit hash (40 hex chars)
fn hash_strategy() -> impl Strategy<Value = String> {
    "[a-f0-9]{40}".prop_map(|s| s.to_string())
}

/// Generate a subject line (single line, no record separator)
fn subject_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :_-]{0,80}".prop_map(|s| s.to_string())
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// =============================================================================
// Robustness tests: parsers should never panic on arbitrary input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Shortstat parser should not panic on arbitrary input
    #[test]
    fn shortstat_parser_does_not_panic(input in ".*") {
        let _ = parse_shortstat(&input);
    }

    /// Log parser should not panic on arbitrary input
    #[test]
    fn log_parser_does_not_panic(input in "(.|\n|\u{1e})*") {
        let _ = Parser::parse_log(&input);
    }
}

// =============================================================================
// Structured input tests: parsers handle well-formed input correctly
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Shortstat parser normalizes every combination of clauses
    #[test]
    fn shortstat_parser_normalizes_counts(
        files in 1u32..500,
        insertions in prop::option::of(1u32..10_000),
        deletions in prop::option::of(1u32..10_000),
    ) {
        let mut line = format!("{} changed", plural(files, "file"));
        let mut expected = line.clone();
        if let Some(n) = insertions {
            line.push_str(&format!(", {}(+)", plural(n, "insertion")));
            expected.push_str(&format!(", +{n}"));
        }
        if let Some(n) = deletions {
            line.push_str(&format!(", {}(-)", plural(n, "deletion")));
            expected.push_str(&format!(" -{n}"));
        }

        prop_assert_eq!(parse_shortstat(&line), expected);
    }

    /// Newest-first log entries come back oldest-first, one per entry
    #[test]
    fn log_entries_are_reversed(
        entries in prop::collection::vec((hash_strategy(), subject_strategy()), 1..20),
    ) {
        let raw: String = entries
            .iter()
            .map(|(hash, subject)| format!("\u{1e}\n{hash}\n{subject}\n"))
            .collect();

        let commits = commits_oldest_first(&raw, "main").unwrap();
        prop_assert_eq!(commits.len(), entries.len());
        for (commit, (hash, subject)) in commits.iter().zip(entries.iter().rev()) {
            prop_assert_eq!(commit.hash(), hash.as_str());
            prop_assert_eq!(commit.summary(), subject.trim());
        }
    }
}
