//! Section Locator — finds the skills section inside unstructured document text.
//!
//! Header patterns are tried in priority order. The first pattern that occurs
//! anywhere wins, and its *last* occurrence is used: résumés often mention
//! "Skills" once in a summary near the top and again, in full, further down.
//! A later skills-like header inside a project description will also win, which
//! is a known precision limitation of this heuristic.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Skills-section headers, highest priority first.
pub const SKILL_HEADERS: &[&str] = &[
    r"Skills?",
    r"Technical Skills?",
    r"Core Competencies",
    r"Key Skills?",
    r"Areas? of Expertise",
    r"Competencies",
    r"Technologies",
    r"Technical Competencies",
    r"Proficiencies",
    r"Technical Expertise",
];

/// Headers of sections that end a skills section.
pub const STOP_HEADERS: &[&str] = &[
    r"Positions? of Responsibility",
    r"Achievements?",
    r"Certifications?",
    r"Awards?",
    r"References?",
    r"Interests?",
    r"Hobbies",
    r"Education",
    r"Work Experience",
    r"Professional Experience",
];

static HEADER_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    SKILL_HEADERS
        .iter()
        .map(|h| case_insensitive(h))
        .collect()
});

/// A stop header at the start of a line, then a line break or a colon.
static STOP_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| case_insensitive(&format!(r"\n(?:{})\s*(?:\n|:)", STOP_HEADERS.join("|"))));

/// Same-line padding and an optional colon between a header and its content.
/// Line breaks are left in place so a stop header on the next line still counts.
static HEADER_TAIL_RE: Lazy<Regex> = Lazy::new(|| case_insensitive(r"^[ \t]*:?[ \t]*"));

/// Anchored alternation of all skills headers, used to reject header echoes.
static HEADER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| case_insensitive(&format!(r"^(?:{})", SKILL_HEADERS.join("|"))));

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("section header patterns are valid regexes")
}

/// Returns the content of the skills section, or `None` when no header occurs
/// or the winning occurrence has no content.
pub fn locate(text: &str) -> Option<&str> {
    for header in HEADER_RES.iter() {
        if let Some(content) = last_section(header, text) {
            let content = content.trim();
            return (!content.is_empty()).then_some(content);
        }
    }
    None
}

/// True when `value` starts with one of the skills-section headers.
pub fn starts_with_header(value: &str) -> bool {
    HEADER_PREFIX_RE.is_match(value)
}

/// Scans non-overlapping `<header>:? <content>` spans and returns the last one.
fn last_section<'a>(header: &Regex, text: &'a str) -> Option<&'a str> {
    let mut last = None;
    let mut pos = 0;

    while let Some(found) = header.find_at(text, pos) {
        let start = found.end()
            + HEADER_TAIL_RE
                .find(&text[found.end()..])
                .map_or(0, |tail| tail.end());
        let end = STOP_BOUNDARY_RE
            .find_at(text, start)
            .map_or(text.len(), |stop| stop.start());

        last = Some(&text[start..end]);
        pos = end;
    }

    last
}
