// ============================================================
// Layer 4 — Phrase Splitter
// ============================================================
// Breaks a passage into candidate answer phrases.
//
// A phrase is whatever sits between two delimiters from the set
//   .  ;  ,  (  )
// Empty fragments (two delimiters in a row, or a delimiter at
// the very start/end of the passage) are kept as empty strings,
// so the number of phrases is always delimiters + 1.
//
// Example:
//   "Bobby ate a sandwich, quickly."
//     → ["Bobby ate a sandwich", " quickly", ""]
//
// Phrases borrow from the passage; nothing is allocated per phrase.

/// Characters that end one phrase and start the next
pub const PHRASE_DELIMITERS: [char; 5] = ['.', ';', ',', '(', ')'];

/// Split `passage` into phrases on `PHRASE_DELIMITERS`.
pub fn split_phrases(passage: &str) -> Vec<&str> {
    passage.split(&PHRASE_DELIMITERS[..]).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_delimiter_leaves_empty_phrase() {
        assert_eq!(
            split_phrases("Bobby ate a sandwich, quickly."),
            vec!["Bobby ate a sandwich", " quickly", ""]
        );
    }

    #[test]
    fn test_all_delimiters_split() {
        assert_eq!(
            split_phrases("a;b(c)d.e,f"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn test_consecutive_delimiters_keep_empty_fragments() {
        assert_eq!(split_phrases("x.;y"), vec!["x", "", "y"]);
    }

    #[test]
    fn test_empty_passage_is_one_empty_phrase() {
        assert_eq!(split_phrases(""), vec![""]);
    }

    #[test]
    fn test_no_delimiters() {
        assert_eq!(split_phrases("no delimiters here"), vec!["no delimiters here"]);
    }
}
