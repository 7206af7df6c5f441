// Résumé vs job description analysis: document text extraction, similarity
// scoring, and the HTTP handlers that tie them to the extraction engine.

pub mod handlers;
pub mod similarity;
pub mod text_extractor;
