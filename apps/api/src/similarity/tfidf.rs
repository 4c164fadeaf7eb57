//! TF-IDF vectors over a small in-memory corpus.
//!
//! Weighting: raw term count × smoothed IDF, `ln((1 + n) / (1 + df)) + 1`,
//! followed by L2 normalisation of each document vector.

use std::collections::{BTreeMap, BTreeSet};

/// A sparse, L2-normalised document vector keyed by term.
/// `BTreeMap` keeps iteration order fixed, so dot products are reproducible
/// bit-for-bit regardless of argument order.
pub type TermVector = BTreeMap<String, f64>;

/// Builds one vector per document. Returns `None` when the corpus has no
/// vocabulary at all.
pub fn vectorize(documents: &[Vec<String>]) -> Option<Vec<TermVector>> {
    let n = documents.len() as f64;

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in documents {
        let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }
    if document_frequency.is_empty() {
        return None;
    }

    let vectors = documents
        .iter()
        .map(|doc| {
            let mut counts: BTreeMap<String, f64> = BTreeMap::new();
            for term in doc {
                *counts.entry(term.clone()).or_insert(0.0) += 1.0;
            }
            for (term, weight) in counts.iter_mut() {
                let df = document_frequency.get(term.as_str()).copied().unwrap_or(0) as f64;
                *weight *= ((1.0 + n) / (1.0 + df)).ln() + 1.0;
            }
            l2_normalize(counts)
        })
        .collect();

    Some(vectors)
}

fn l2_normalize(mut vector: TermVector) -> TermVector {
    let norm = norm(&vector);
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
    vector
}

fn norm(vector: &TermVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine of the angle between two sparse vectors; 0 if either is zero.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    let (norm_a, norm_b) = (norm(a), norm(b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_corpus_has_no_vectors() {
        assert!(vectorize(&[vec![], vec![]]).is_none());
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectors = vectorize(&[doc(&["rust", "rust", "go"]), doc(&["rust", "kafka"])]).unwrap();
        for v in &vectors {
            assert!((norm(v) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_shared_terms_weigh_less_than_unique_terms() {
        let vectors = vectorize(&[doc(&["rust", "kafka"]), doc(&["rust"])]).unwrap();
        assert!(vectors[0]["kafka"] > vectors[0]["rust"]);
    }

    #[test]
    fn test_cosine_of_disjoint_vectors_is_zero() {
        let vectors = vectorize(&[doc(&["rust"]), doc(&["python"])]).unwrap();
        assert_eq!(cosine(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_cosine_with_empty_vector_is_zero() {
        let vectors = vectorize(&[doc(&["rust"]), vec![]]).unwrap();
        assert!(vectors[1].is_empty());
        assert_eq!(cosine(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_cosine_of_identical_documents_is_one() {
        let d = doc(&["distributed", "systems", "distributed systems"]);
        let vectors = vectorize(&[d.clone(), d]).unwrap();
        assert!((cosine(&vectors[0], &vectors[1]) - 1.0).abs() < 1e-12);
    }
}
