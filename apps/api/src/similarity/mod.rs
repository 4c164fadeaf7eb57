//! Similarity Scorer — lexical overlap between a resume and a job description.
//!
//! Pure-Rust, deterministic, no LLM call:
//! 1. normalize both texts (lowercase, drop non-word characters)
//! 2. TF-IDF over the two-document corpus, unigrams + bigrams, stop words removed
//! 3. cosine similarity, scaled to 0–100 and rounded to 2 decimals
//!
//! Scoring never blocks an analysis: any internal failure degrades to 0.

pub mod normalize;
pub mod stop_words;
pub mod tfidf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::similarity::normalize::{normalize, terms};

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("one of the texts is empty after normalization")]
    EmptyInput,

    #[error("empty vocabulary; the texts contain only stop words")]
    EmptyVocabulary,
}

/// Similarity score in [0, 100]. Soft failures are logged and reported as 0.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    match try_similarity(text_a, text_b) {
        Ok(score) => score,
        Err(SimilarityError::EmptyInput) => {
            debug!("Similarity skipped: empty input");
            0.0
        }
        Err(e) => {
            warn!("Similarity scoring degraded to 0: {e}");
            0.0
        }
    }
}

/// Like [`similarity`], but reports why a score could not be computed.
pub fn try_similarity(text_a: &str, text_b: &str) -> Result<f64, SimilarityError> {
    let (norm_a, norm_b) = (normalize(text_a), normalize(text_b));
    if norm_a.trim().is_empty() || norm_b.trim().is_empty() {
        return Err(SimilarityError::EmptyInput);
    }

    let corpus = [terms(&norm_a), terms(&norm_b)];
    let vectors = tfidf::vectorize(&corpus).ok_or(SimilarityError::EmptyVocabulary)?;
    let cosine = tfidf::cosine(&vectors[0], &vectors[1]);

    Ok(round2((cosine * 100.0).clamp(0.0, 100.0)))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Built scalable systems using Python and Go";
    const JD: &str = "Looking for a backend engineer skilled in Go and distributed systems";

    #[test]
    fn test_identical_texts_score_100() {
        let text = "Senior Rust engineer shipping distributed storage engines.";
        assert_eq!(similarity(text, text), 100.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [
            (RESUME, JD),
            ("rust rust kafka", "kafka streams in rust"),
            ("machine learning engineer", "learning machine engineering"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(similarity("", JD), 0.0);
        assert_eq!(similarity(RESUME, ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(try_similarity("", JD), Err(SimilarityError::EmptyInput));
    }

    #[test]
    fn test_punctuation_only_text_scores_zero() {
        assert_eq!(similarity("!!! ... ???", JD), 0.0);
    }

    #[test]
    fn test_stop_words_only_is_soft_failure() {
        assert_eq!(
            try_similarity("and the of", "to be or not"),
            Err(SimilarityError::EmptyVocabulary)
        );
        assert_eq!(similarity("and the of", "to be or not"), 0.0);
    }

    #[test]
    fn test_no_shared_vocabulary_scores_zero() {
        assert_eq!(similarity("kubernetes operator", "watercolor painting"), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_strictly_between_bounds() {
        let score = similarity(RESUME, JD);
        assert!(score > 0.0, "expected > 0, got {score}");
        assert!(score < 100.0, "expected < 100, got {score}");
    }

    #[test]
    fn test_score_has_at_most_two_decimals() {
        let score = similarity(RESUME, JD);
        assert_eq!(score, round2(score));
    }

    #[test]
    fn test_bigrams_reward_phrase_overlap() {
        let jd = "machine learning engineer";
        let phrase = similarity("machine learning research", jd);
        let scattered = similarity("learning about machine research", jd);
        assert!(phrase > scattered, "{phrase} <= {scattered}");
    }

    #[test]
    fn test_case_and_punctuation_do_not_matter() {
        assert_eq!(similarity("RUST, Kafka!", "rust kafka"), 100.0);
    }
}
