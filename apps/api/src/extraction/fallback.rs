//! Fallback Matcher — whole-document vocabulary scan used when no skills
//! section can be read.

use crate::extraction::vocabulary::Vocabulary;

/// Emits the canonical name of a vocabulary entry once per pattern occurrence,
/// in table order, then pattern order, then position in `text`.
pub fn match_vocabulary(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    vocabulary
        .iter()
        .flat_map(move |(name, patterns)| {
            patterns
                .iter()
                .flat_map(move |pattern| pattern.find_iter(text).map(move |_| name.to_string()))
        })
        .collect()
}
