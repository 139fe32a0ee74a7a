use std::collections::HashSet;

/// Canonical comparison form: trimmed and lowercased.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalizes every entry, dropping blanks and later duplicates.
/// The first occurrence of each normalized form keeps its position.
pub fn normalize_answers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|answer| normalize(answer.as_ref()))
        .filter(|answer| !answer.is_empty())
        .filter(|answer| seen.insert(answer.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Kucing "), "kucing");
        assert_eq!(normalize("ANJING"), "anjing");
        assert_eq!(normalize("\tnasi goreng\n"), "nasi goreng");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" Nasi  Goreng "), "nasi  goreng");
    }

    #[test]
    fn test_normalize_blank_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("  MiXeD Case ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_answers_collapses_duplicates() {
        let answers = normalize_answers(["Kucing", " anjing ", "KUCING"]);
        assert_eq!(answers, vec!["kucing".to_string(), "anjing".to_string()]);
    }

    #[test]
    fn test_normalize_answers_drops_blanks() {
        let answers = normalize_answers(["", "  ", "sapi"]);
        assert_eq!(answers, vec!["sapi".to_string()]);
    }

    proptest! {
        #[test]
        fn prop_cardinality_matches_distinct_forms(
            words in prop::collection::vec("[a-zA-Z ]{0,8}", 0..20)
        ) {
            let distinct: HashSet<String> = words
                .iter()
                .map(|w| normalize(w))
                .filter(|w| !w.is_empty())
                .collect();
            let answers = normalize_answers(&words);
            prop_assert_eq!(answers.len(), distinct.len());
        }

        #[test]
        fn prop_case_and_padding_variants_collapse(word in "[a-z]{1,10}", pad in 0usize..4) {
            let padded = format!("{}{}{}", " ".repeat(pad), word.to_uppercase(), " ".repeat(pad));
            let answers = normalize_answers([word.clone(), padded]);
            prop_assert_eq!(answers, vec![word]);
        }
    }
}
