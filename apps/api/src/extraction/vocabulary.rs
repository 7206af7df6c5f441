//! Vocabulary Table — known skill names and the patterns that recognise them.
//!
//! The table is an explicit value built once at startup (either the built-in
//! list or a JSON file) and handed to the engine. Nothing here is global.

use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// One vocabulary row as written in a vocabulary file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Canonical name emitted when any pattern matches.
    pub name: String,
    /// Case-insensitive regex fragments; plain names are valid literals.
    pub patterns: Vec<String>,
}

#[derive(Debug)]
struct CompiledEntry {
    name: String,
    patterns: Vec<Regex>,
}

/// Compiled, read-only vocabulary. Order of entries is significant: the
/// fallback matcher reports matches in table order.
#[derive(Debug)]
pub struct Vocabulary {
    entries: Vec<CompiledEntry>,
}

// (canonical name, patterns)
const BUILTIN_TABLE: &[(&str, &[&str])] = &[
    // Programming languages
    ("Python", &["Python"]),
    ("Java", &["Java"]),
    ("JavaScript", &["JavaScript"]),
    ("C++", &[r"C\+\+"]),
    ("C#", &["C#"]),
    ("Ruby", &["Ruby"]),
    ("PHP", &["PHP"]),
    ("Swift", &["Swift"]),
    ("Kotlin", &["Kotlin"]),
    ("TypeScript", &["TypeScript"]),
    ("Go", &["Go"]),
    ("Rust", &["Rust"]),
    ("Scala", &["Scala"]),
    ("R", &[r"R\b"]),
    ("MATLAB", &["MATLAB"]),
    ("Perl", &["Perl"]),
    // Web
    ("HTML", &["HTML"]),
    ("CSS", &["CSS"]),
    ("React", &["React"]),
    ("Angular", &["Angular"]),
    ("Vue.js", &[r"Vue\.js"]),
    ("Node.js", &[r"Node\.js"]),
    ("Django", &["Django"]),
    ("Flask", &["Flask"]),
    ("Spring", &["Spring"]),
    ("Express.js", &[r"Express\.js"]),
    ("jQuery", &["jQuery"]),
    ("Bootstrap", &["Bootstrap"]),
    ("Tailwind", &["Tailwind"]),
    // Databases
    ("MySQL", &["MySQL"]),
    ("PostgreSQL", &["PostgreSQL"]),
    ("MongoDB", &["MongoDB"]),
    ("Redis", &["Redis"]),
    ("Oracle", &["Oracle"]),
    ("SQLite", &["SQLite"]),
    ("SQL Server", &["SQL Server"]),
    ("DynamoDB", &["DynamoDB"]),
    ("Cassandra", &["Cassandra"]),
    ("Neo4j", &["Neo4j"]),
    // Cloud & DevOps
    ("AWS", &["AWS"]),
    ("Azure", &["Azure"]),
    ("Google Cloud", &["Google Cloud"]),
    ("GCP", &["GCP"]),
    ("Docker", &["Docker"]),
    ("Kubernetes", &["Kubernetes"]),
    ("Jenkins", &["Jenkins"]),
    ("CI/CD", &["CI/CD"]),
    ("GitLab", &["GitLab"]),
    ("GitHub Actions", &["GitHub Actions"]),
    ("Terraform", &["Terraform"]),
    ("Ansible", &["Ansible"]),
    // Data science & ML
    ("Machine Learning", &["Machine Learning"]),
    ("Deep Learning", &["Deep Learning"]),
    ("TensorFlow", &["TensorFlow"]),
    ("PyTorch", &["PyTorch"]),
    ("Scikit-learn", &["Scikit-learn"]),
    ("Pandas", &["Pandas"]),
    ("NumPy", &["NumPy"]),
    ("NLP", &["NLP"]),
    ("Computer Vision", &["Computer Vision"]),
    ("Data Analysis", &["Data Analysis"]),
    // Other tools
    ("Git", &["Git"]),
    ("Linux", &["Linux"]),
    ("REST API", &["REST API"]),
    ("GraphQL", &["GraphQL"]),
    ("Microservices", &["Microservices"]),
    ("Agile", &["Agile"]),
    ("Scrum", &["Scrum"]),
];

impl Vocabulary {
    /// Compiles every pattern case-insensitively. Fails on an empty table, an
    /// entry without patterns, or an invalid regex.
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self> {
        if entries.is_empty() {
            bail!("skill vocabulary must contain at least one entry");
        }

        let entries = entries
            .into_iter()
            .map(|entry| -> Result<CompiledEntry> {
                if entry.patterns.is_empty() {
                    bail!("vocabulary entry '{}' has no patterns", entry.name);
                }
                let patterns = entry
                    .patterns
                    .iter()
                    .map(|p| {
                        RegexBuilder::new(p)
                            .case_insensitive(true)
                            .build()
                            .with_context(|| {
                                format!("invalid pattern '{p}' for skill '{}'", entry.name)
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledEntry {
                    name: entry.name,
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// The built-in technology table.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_entries())
    }

    /// Loads a vocabulary from a JSON array of `{"name", "patterns"}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file {}", path.display()))?;
        let entries: Vec<VocabularyEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Vocabulary file {} is not valid JSON", path.display()))?;
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates `(canonical name, patterns)` in table order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[Regex])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.patterns.as_slice()))
    }
}

/// The built-in table as plain entries, e.g. to seed a custom vocabulary file.
pub fn builtin_entries() -> Vec<VocabularyEntry> {
    BUILTIN_TABLE
        .iter()
        .map(|(name, patterns)| VocabularyEntry {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
