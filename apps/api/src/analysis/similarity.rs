//! Similarity Scorer — bag-of-words cosine similarity between two skill lists.
//!
//! Each list is joined into one lowercase document and split into unigrams of
//! two or more word characters. Single-character skills such as "C" or "R"
//! therefore contribute no terms. No stemming, no synonyms.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::SkillList;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

pub const INSUFFICIENT_INPUT_MESSAGE: &str = "Could not extract skills from resume or JD.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// 0.0 – 100.0, rounded to two decimals.
    pub similarity_score: f64,
    /// Lowercased skills present in both lists, sorted.
    pub matching_skills: Vec<String>,
}

/// Scores two skill lists. Both must be non-empty: cosine similarity against
/// an empty document is undefined.
pub fn compute_similarity(a: &SkillList, b: &SkillList) -> Result<SimilarityResult, AppError> {
    if a.is_empty() || b.is_empty() {
        return Err(AppError::InsufficientInput(
            INSUFFICIENT_INPUT_MESSAGE.to_string(),
        ));
    }

    let similarity = cosine(&term_frequencies(a), &term_frequencies(b));

    Ok(SimilarityResult {
        similarity_score: round2(similarity * 100.0),
        matching_skills: matching_skills(a, b),
    })
}

fn term_frequencies(skills: &SkillList) -> BTreeMap<String, u64> {
    let document = skills.as_slice().join(" ").to_lowercase();
    let mut counts = BTreeMap::new();
    for token in TOKEN_RE.find_iter(&document) {
        *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Integer dot products keep the result exactly symmetric. A zero vector
/// (no usable terms) scores 0.
fn cosine(a: &BTreeMap<String, u64>, b: &BTreeMap<String, u64>) -> f64 {
    let dot: u64 = a
        .iter()
        .filter_map(|(term, count)| b.get(term).map(|other| count * other))
        .sum();
    let norm_a: u64 = a.values().map(|c| c * c).sum();
    let norm_b: u64 = b.values().map(|c| c * c).sum();

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    let denominator = (norm_a as f64).sqrt() * (norm_b as f64).sqrt();
    (dot as f64 / denominator).clamp(0.0, 1.0)
}

fn matching_skills(a: &SkillList, b: &SkillList) -> Vec<String> {
    let lower = |list: &SkillList| -> BTreeSet<String> {
        list.iter().map(|s| s.to_lowercase()).collect()
    };
    lower(a).intersection(&lower(b)).cloned().collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::normalize;

    #[test]
    fn test_identical_lists_score_100() {
        let a = normalize(["Python"]);
        let result = compute_similarity(&a, &a.clone()).unwrap();
        assert_eq!(result.similarity_score, 100.0);
        assert_eq!(result.matching_skills, vec!["python"]);
    }

    #[test]
    fn test_partial_overlap() {
        let resume = normalize(["Python", "SQL"]);
        let jd = normalize(["python", "AWS"]);
        let result = compute_similarity(&resume, &jd).unwrap();
        assert_eq!(result.matching_skills, vec!["python"]);
        assert!(result.similarity_score > 0.0 && result.similarity_score < 100.0);
        assert_eq!(result.similarity_score, 50.0);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let result =
            compute_similarity(&normalize(["Rust"]), &normalize(["Excel", "Sales"])).unwrap();
        assert_eq!(result.similarity_score, 0.0);
        assert!(result.matching_skills.is_empty());
    }

    #[test]
    fn test_multi_word_skills_share_tokens() {
        // "machine learning" vs "machine vision": one shared term of two each.
        let result = compute_similarity(
            &normalize(["Machine Learning"]),
            &normalize(["Machine Vision"]),
        )
        .unwrap();
        assert_eq!(result.similarity_score, 50.0);
        assert!(result.matching_skills.is_empty());
    }

    #[test]
    fn test_score_is_rounded_to_two_decimals() {
        let result = compute_similarity(
            &normalize(["Python", "Java", "Go"]),
            &normalize(["Python"]),
        )
        .unwrap();
        // 1 / sqrt(3) * 100 = 57.735...
        assert_eq!(result.similarity_score, 57.74);
    }

    #[test]
    fn test_single_character_skills_have_no_terms() {
        let result = compute_similarity(&normalize(["C", "R"]), &normalize(["C"])).unwrap();
        assert_eq!(result.similarity_score, 0.0);
        assert_eq!(result.matching_skills, vec!["c"]);
    }

    #[test]
    fn test_symmetry() {
        let a = normalize(["Python", "Docker", "Kubernetes", "AWS"]);
        let b = normalize(["aws", "Terraform", "python", "Go"]);
        let ab = compute_similarity(&a, &b).unwrap();
        let ba = compute_similarity(&b, &a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_empty_list_is_insufficient_input() {
        let empty = normalize(Vec::<String>::new());
        let some = normalize(["Rust"]);
        assert!(matches!(
            compute_similarity(&empty, &some),
            Err(AppError::InsufficientInput(_))
        ));
        assert!(matches!(
            compute_similarity(&some, &empty),
            Err(AppError::InsufficientInput(_))
        ));
    }
}
