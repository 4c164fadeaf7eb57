use std::sync::OnceLock;

use regex::Regex;

use crate::similarity::stop_words::is_stop_word;

fn non_word() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"))
}

/// Lowercases and removes every character that is neither a Unicode word
/// character nor whitespace. Punctuation is deleted, not replaced, so
/// "e-mail" becomes "email".
pub fn normalize(text: &str) -> String {
    non_word().replace_all(&text.to_lowercase(), "").into_owned()
}

/// Splits normalized text into terms: unigrams and bigrams of the tokens left
/// after dropping single-character tokens and stop words.
///
/// Bigrams are formed after stop-word removal, so "machine and learning"
/// still yields "machine learning".
pub fn terms(normalized: &str) -> Vec<String> {
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !is_stop_word(t))
        .collect();

    let mut out: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    out.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Rust, Go & C++!"), "rust go  c");
        assert_eq!(normalize("E-mail: JANE@EXAMPLE.COM"), "email janeexamplecom");
    }

    #[test]
    fn test_normalize_keeps_unicode_word_characters() {
        assert_eq!(normalize("Café München_2024"), "café münchen_2024");
    }

    #[test]
    fn test_terms_drop_stop_words_and_short_tokens() {
        let t = terms(&normalize("I built a system in Rust"));
        assert_eq!(t, vec!["built", "rust", "built rust"]);
    }

    #[test]
    fn test_terms_include_bigrams_in_order() {
        let t = terms("machine learning pipelines");
        assert_eq!(
            t,
            vec![
                "machine",
                "learning",
                "pipelines",
                "machine learning",
                "learning pipelines"
            ]
        );
    }

    #[test]
    fn test_terms_of_stop_words_only_is_empty() {
        assert!(terms(&normalize("and the of a")).is_empty());
        assert!(terms("").is_empty());
    }
}
