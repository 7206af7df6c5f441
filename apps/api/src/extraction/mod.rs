// Skill extraction engine.
// Pipeline: section locator -> parsing strategies -> normalizer, with a
// whole-document vocabulary scan when no usable section is found.
// Everything here is synchronous and free of I/O.

pub mod fallback;
pub mod normalize;
pub mod section;
pub mod strategies;
pub mod vocabulary;

use serde::Serialize;
use tracing::debug;

pub use normalize::normalize;
pub use vocabulary::Vocabulary;

/// Ordered, case-insensitively distinct skills for one document.
/// Only the normalizer builds these, so the invariants always hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillList(Vec<String>);

impl SkillList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

/// Where a skill list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    Section,
    Vocabulary,
}

#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub skills: SkillList,
    pub source: ExtractionSource,
}

/// Extracts skills and reports which path produced them.
pub fn extract(text: &str, vocabulary: &Vocabulary) -> Extraction {
    if let Some(section) = section::locate(text) {
        let skills = normalize(strategies::parse(section));
        if !skills.is_empty() {
            debug!(count = skills.len(), "skills read from located section");
            return Extraction {
                skills,
                source: ExtractionSource::Section,
            };
        }
        debug!("skills section yielded nothing usable, scanning vocabulary");
    } else {
        debug!("no skills section found, scanning vocabulary");
    }

    let skills = normalize(fallback::match_vocabulary(text, vocabulary));
    debug!(count = skills.len(), "skills matched from vocabulary");
    Extraction {
        skills,
        source: ExtractionSource::Vocabulary,
    }
}

/// Extracts the skill list of one document. Never fails; text with nothing
/// recognisable yields an empty list.
pub fn extract_skills(text: &str, vocabulary: &Vocabulary) -> SkillList {
    extract(text, vocabulary).skills
}
