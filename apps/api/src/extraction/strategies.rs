//! Multi-Strategy Parser — four independent ways of reading skills out of a
//! located section.
//!
//! Résumés write skill lists as bracketed lists, `Category: a, b` lines,
//! bulleted or plain comma lists, and `a | b | c` rows. Rather than guessing the
//! format, every strategy runs over the whole section and the outputs are
//! concatenated; the normalizer removes the overlap.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// A strategy turns section text into raw, possibly noisy candidates.
pub type Strategy = fn(&str) -> Vec<String>;

pub const STRATEGIES: [Strategy; 4] = [
    bracketed_items,
    category_items,
    plain_line_items,
    pipe_row_items,
];

/// Longest item (in words) still treated as a skill rather than a sentence.
const MAX_ITEM_WORDS: usize = 4;

static BRACKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("bracket pattern is valid"));

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•◦●○▪\-*➢▶►→]+\s*").expect("bullet pattern is valid"));

static PIPE_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9#+. \t]+(?:[ \t]*\|[ \t]*[A-Za-z0-9#+. \t]+){2,}")
        .expect("pipe row pattern is valid")
});

/// Runs every strategy over `section` and concatenates their candidates.
pub fn parse(section: &str) -> Vec<String> {
    STRATEGIES
        .iter()
        .flat_map(|strategy| strategy(section))
        .collect()
}

/// Items inside `[...]`, split on `,` and `;`. Links and paths are dropped.
pub fn bracketed_items(section: &str) -> Vec<String> {
    BRACKET_RE
        .captures_iter(section)
        .filter_map(|caps| caps.get(1))
        .flat_map(|inner| inner.as_str().split(|c: char| matches!(c, ',' | ';')))
        .map(str::trim)
        .filter(|item| !item.is_empty() && !is_link(item))
        .map(String::from)
        .collect()
}

/// `Category: a, b | c` lines. The label before the first colon is dropped.
pub fn category_items(section: &str) -> Vec<String> {
    cleaned_lines(section)
        .filter(|line| line.contains(':') && !line.contains('['))
        .filter_map(|line| line.split_once(':').map(|(_, rest)| rest.to_string()))
        .flat_map(|rest| split_items(&rest))
        .collect()
}

/// Bulleted or bare lines without a category label, split on `,`, `;`, `|`.
pub fn plain_line_items(section: &str) -> Vec<String> {
    cleaned_lines(section)
        .filter(|line| !line.is_empty() && !line.contains(':') && !line.contains('['))
        .flat_map(|line| split_items(&line))
        .filter(|item| !item.contains(':'))
        .collect()
}

/// `a | b | c` runs anywhere in the section, at least two separators long.
pub fn pipe_row_items(section: &str) -> Vec<String> {
    PIPE_ROW_RE
        .find_iter(section)
        .flat_map(|row| row.as_str().split('|'))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Trimmed lines with any leading bullet glyphs removed.
fn cleaned_lines(section: &str) -> impl Iterator<Item = Cow<'_, str>> {
    section
        .lines()
        .map(|line| BULLET_RE.replace(line.trim(), ""))
}

fn split_items(list: &str) -> Vec<String> {
    list.split(|c: char| matches!(c, ',' | ';' | '|'))
        .map(str::trim)
        .filter(|item| looks_like_skill(item))
        .map(String::from)
        .collect()
}

/// Short fragments only; anything ending in a period reads as a sentence.
fn looks_like_skill(item: &str) -> bool {
    !item.is_empty()
        && item.split_whitespace().count() <= MAX_ITEM_WORDS
        && !item.ends_with('.')
}

pub(crate) fn is_link(item: &str) -> bool {
    item.starts_with('/') || item.to_ascii_lowercase().starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_items() {
        let section = "Languages: [Python, Java; Go]\nLinks: [https://github.com/jdoe, /home/jdoe, Rust]";
        assert_eq!(bracketed_items(section), vec!["Python", "Java", "Go", "Rust"]);
    }

    #[test]
    fn test_bracketed_items_skips_empty_entries() {
        assert_eq!(bracketed_items("[ , Docker,, ]"), vec!["Docker"]);
    }

    #[test]
    fn test_category_items() {
        let section = "Languages: Python, Java\n\
                       Tools: Docker | Git; Jenkins\n\
                       Summary: I have built many distributed systems over the years\n\
                       Notes: Fluent in German.\n\
                       Web: [React]";
        assert_eq!(
            category_items(section),
            vec!["Python", "Java", "Docker", "Git", "Jenkins"]
        );
    }

    #[test]
    fn test_category_items_strip_bullets() {
        assert_eq!(category_items("• Languages: Rust"), vec!["Rust"]);
    }

    #[test]
    fn test_category_items_split_on_first_colon_only() {
        assert_eq!(category_items("Runtime: Node: 20"), vec!["Node: 20"]);
        assert_eq!(category_items("Cloud: AWS, GCP"), vec!["AWS", "GCP"]);
    }

    #[test]
    fn test_plain_line_items() {
        let section = "• Python, Java\n\
                       - Docker\n\
                       * Kubernetes | Helm\n\
                       ➢ Built a compiler from scratch for fun\n\
                       Frameworks: Django\n\
                       \n\
                       [Flask]";
        assert_eq!(
            plain_line_items(section),
            vec!["Python", "Java", "Docker", "Kubernetes", "Helm"]
        );
    }

    #[test]
    fn test_category_items_word_limit() {
        assert_eq!(
            category_items("Cloud: Amazon Web Services Lambda"),
            vec!["Amazon Web Services Lambda"]
        );
        assert!(category_items("Cloud: Amazon Web Services Lambda Functions").is_empty());
    }

    #[test]
    fn test_plain_line_items_word_limit() {
        assert_eq!(
            plain_line_items("- Amazon Web Services Lambda, Google Cloud Run Jobs Service"),
            vec!["Amazon Web Services Lambda"]
        );
    }

    #[test]
    fn test_plain_line_items_drop_sentences() {
        assert!(plain_line_items("Shipped the payments platform.").is_empty());
    }

    #[test]
    fn test_pipe_row_items() {
        let section = "Languages: Python | Java | C++\nEducation: ...";
        assert_eq!(pipe_row_items(section), vec!["Python", "Java", "C++"]);
    }

    #[test]
    fn test_pipe_row_needs_two_separators() {
        assert!(pipe_row_items("Python | Java").is_empty());
    }

    #[test]
    fn test_pipe_rows_do_not_span_lines() {
        let section = "C# | .NET | Azure\nGo | Rust | Zig";
        assert_eq!(
            pipe_row_items(section),
            vec!["C#", ".NET", "Azure", "Go", "Rust", "Zig"]
        );
    }

    #[test]
    fn test_parse_concatenates_all_strategies() {
        let section = "Python, Java, SQL";
        assert_eq!(parse(section), vec!["Python", "Java", "SQL"]);

        let mixed = "Languages: Rust | Go | C\n[Docker]";
        assert_eq!(
            parse(mixed),
            vec!["Docker", "Rust", "Go", "C", "Rust", "Go", "C"]
        );
    }

    #[test]
    fn test_parse_empty_section() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_is_link() {
        assert!(is_link("https://example.com"));
        assert!(is_link("HTTP://EXAMPLE.COM"));
        assert!(is_link("/usr/local/bin"));
        assert!(!is_link("Python"));
    }
}
