use std::sync::Arc;

use crate::analysis::text_extractor::TextExtractor;
use crate::extraction::Vocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Skill vocabulary for the fallback matcher, loaded once at startup.
    pub vocabulary: Arc<Vocabulary>,
    /// Pluggable document reader. Default: PdfTextExtractor.
    pub text_extractor: Arc<dyn TextExtractor>,
}
