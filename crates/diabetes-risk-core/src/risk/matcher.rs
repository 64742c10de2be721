//! Term matcher.
//!
//! Finds which vocabulary entries occur in note text. Matching is
//! case-insensitive with Unicode case folding ("RÉACTION" matches "réaction")
//! and restricted to whole words ("contrepoids" does not match "poids").

use std::sync::LazyLock;

use regex::RegexSet;

use super::vocabulary::{whole_word_pattern, TRIGGER_TERMS};
use crate::models::concat_notes;

/// Compiled vocabulary, one pattern per entry, indexed like `TRIGGER_TERMS`.
static COMPILED_TRIGGERS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(TRIGGER_TERMS.iter().map(whole_word_pattern))
        .expect("trigger vocabulary patterns are valid regexes")
});

/// Canonical labels of the vocabulary entries found in `text`, in vocabulary order.
///
/// Each entry appears at most once however often it occurs.
pub fn matched_terms(text: &str) -> Vec<&'static str> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    COMPILED_TRIGGERS
        .matches(text)
        .iter()
        .map(|idx| TRIGGER_TERMS[idx].label)
        .collect()
}

/// Number of distinct vocabulary entries found in `text`.
pub fn count_triggers(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    COMPILED_TRIGGERS.matches(text).iter().count()
}

/// Number of distinct vocabulary entries found across all notes.
pub fn count_triggers_in_notes<S: AsRef<str>>(notes: &[S]) -> usize {
    count_triggers(&concat_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_triggers() {
        assert_eq!(count_triggers("Le patient va bien. Aucun symptôme notable."), 0);
        assert_eq!(count_triggers(""), 0);
        assert_eq!(count_triggers("   "), 0);
        assert_eq!(count_triggers_in_notes::<&str>(&[]), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_triggers("FUMEUR"), 1);
        assert_eq!(count_triggers("fumeur"), 1);
        assert_eq!(count_triggers("Fumeur"), 1);
        assert_eq!(count_triggers("RÉACTION aux médicaments"), 1);
        assert_eq!(count_triggers("taux de CHOLESTÉROL élevé"), 1);
    }

    #[test]
    fn test_repeated_term_counts_once() {
        let notes = ["Le patient est Fumeur.", "Son poids est stable. Il est aussi Fumeur."];
        assert_eq!(count_triggers_in_notes(&notes), 2);
    }

    #[test]
    fn test_inflected_forms_count_once() {
        assert_eq!(count_triggers("fumeuse"), 1);
        assert_eq!(count_triggers("fumeur et fumeuse"), 1);
        assert_eq!(count_triggers("vertige"), 1);
        assert_eq!(count_triggers("vertige puis vertiges"), 1);
        assert_eq!(count_triggers("audition anormale"), 1);
        assert_eq!(count_triggers("anormal, anormale"), 1);
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(count_triggers("contrepoids"), 0);
        assert_eq!(count_triggers("fumeurs"), 0);
        assert_eq!(count_triggers("réactions"), 0);
        assert_eq!(count_triggers("Présence d'Anticorps"), 1);
    }

    #[test]
    fn test_multi_word_term() {
        assert_eq!(matched_terms("Hémoglobine A1C élevée"), vec!["Hémoglobine A1C"]);
        assert_eq!(matched_terms("hémoglobine   a1c"), vec!["Hémoglobine A1C"]);
        assert!(matched_terms("hémoglobine").is_empty());
    }

    #[test]
    fn test_matched_terms_in_vocabulary_order() {
        let found = matched_terms("Anticorps. Taille. Hémoglobine A1C. Poids.");
        assert_eq!(found, vec!["Hémoglobine A1C", "Taille", "Poids", "Anticorps"]);
    }

    #[test]
    fn test_terms_split_across_notes() {
        let notes = ["Taille", "Poids", "Fumeur", "Anormal", "Cholestérol", "Vertiges"];
        assert_eq!(count_triggers_in_notes(&notes), 6);
    }
}
