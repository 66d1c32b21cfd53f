//! Whitespace tokenizer

/// Split normalized text on runs of whitespace, keeping order and duplicates
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_runs_of_whitespace() {
        assert_eq!(tokenize("a  b\tc\n d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_keeps_duplicates_in_order() {
        assert_eq!(tokenize("no no yes no"), vec!["no", "no", "yes", "no"]);
    }

    #[test]
    fn test_question_token_survives() {
        assert_eq!(tokenize("why  ?"), vec!["why", "?"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
