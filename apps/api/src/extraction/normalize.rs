//! Normalizer — turns raw candidates into a clean, deduplicated `SkillList`.

use std::collections::HashSet;

use crate::extraction::section::starts_with_header;
use crate::extraction::strategies::is_link;
use crate::extraction::SkillList;

/// Section and category names that are never skills on their own.
const EXCLUDED_WORDS: &[&str] = &[
    "projects",
    "experience",
    "education",
    "work",
    "responsibilities",
    "achievements",
    "certifications",
    "awards",
    "references",
    "interests",
    "hobbies",
    "objective",
    "summary",
    "profile",
];

/// Collapses whitespace, drops noise, and keeps the first spelling of each
/// skill (compared case-insensitively) in first-seen order.
pub fn normalize<I, S>(candidates: I) -> SkillList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for candidate in candidates {
        let skill = collapse_whitespace(candidate.as_ref());
        if skill.is_empty() || is_link(&skill) || starts_with_header(&skill) {
            continue;
        }

        let key = skill.to_lowercase();
        if EXCLUDED_WORDS.contains(&key.as_str()) {
            continue;
        }
        if seen.insert(key) {
            skills.push(skill);
        }
    }

    SkillList(skills)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
