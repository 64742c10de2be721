//! Trigger vocabulary.
//!
//! Clinical terms whose presence in a patient's notes counts toward diabetes
//! risk. Each entry is a regex fragment; alternations cover inflected forms
//! (masculine/feminine, singular/plural) that count as one trigger.

/// Revision of [`TRIGGER_TERMS`]. Bump when an entry is added, removed or reworded.
pub const VOCABULARY_VERSION: u32 = 1;

/// A vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerTerm {
    /// Canonical label, as listed in reports
    pub label: &'static str,
    /// Regex fragment matched case-insensitively on whole words
    pub pattern: &'static str,
}

/// The trigger vocabulary, in canonical order.
pub static TRIGGER_TERMS: [TriggerTerm; 11] = [
    TriggerTerm { label: "Hémoglobine A1C", pattern: r"hémoglobine\s+a1c" },
    TriggerTerm { label: "Microalbumine", pattern: r"microalbumine" },
    TriggerTerm { label: "Taille", pattern: r"taille" },
    TriggerTerm { label: "Poids", pattern: r"poids" },
    TriggerTerm { label: "Fumeur", pattern: r"fumeu(?:r|se)" },
    TriggerTerm { label: "Anormal", pattern: r"anormale?" },
    TriggerTerm { label: "Cholestérol", pattern: r"cholestérol" },
    TriggerTerm { label: "Vertiges", pattern: r"vertiges?" },
    TriggerTerm { label: "Rechute", pattern: r"rechute" },
    TriggerTerm { label: "Réaction", pattern: r"réaction" },
    TriggerTerm { label: "Anticorps", pattern: r"anticorps" },
];

/// Canonical labels of every vocabulary entry.
pub fn trigger_terms() -> impl Iterator<Item = &'static str> {
    TRIGGER_TERMS.iter().map(|t| t.label)
}

/// Number of entries in the vocabulary; the upper bound of any trigger count.
pub fn vocabulary_size() -> usize {
    TRIGGER_TERMS.len()
}

/// Full regex for one entry: case-insensitive, anchored on word boundaries.
pub(crate) fn whole_word_pattern(term: &TriggerTerm) -> String {
    format!(r"(?i)\b(?:{})\b", term.pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_labels() {
        let labels: Vec<&str> = trigger_terms().collect();
        assert_eq!(labels.len(), vocabulary_size());
        assert_eq!(labels[0], "Hémoglobine A1C");
        assert!(labels.contains(&"Anticorps"));
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<&str> = trigger_terms().collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), TRIGGER_TERMS.len());
    }

    #[test]
    fn test_whole_word_pattern() {
        let term = TriggerTerm { label: "Poids", pattern: "poids" };
        assert_eq!(whole_word_pattern(&term), r"(?i)\b(?:poids)\b");
    }
}
