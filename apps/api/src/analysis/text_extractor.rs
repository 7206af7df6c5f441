//! Document text extraction — the collaborator that turns an uploaded résumé
//! into plain text before skills are extracted.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default backend reads PDFs
//! with `pdf-extract`. Extraction is best-effort: a document that cannot be
//! read yields empty text, which surfaces downstream as insufficient input.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError>;
}

/// Reads PDF uploads through a temporary file in `upload_dir`.
///
/// The temporary file is removed when extraction finishes, whether it
/// succeeded, failed, or the PDF parser panicked.
pub struct PdfTextExtractor {
    upload_dir: PathBuf,
}

impl PdfTextExtractor {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError> {
        let upload_dir = self.upload_dir.clone();
        let outcome =
            tokio::task::spawn_blocking(move || extract_pdf_text(&upload_dir, &document)).await;

        match outcome {
            Ok(result) => result.map_err(AppError::Internal),
            Err(e) => {
                warn!("PDF text extraction aborted: {e}");
                Ok(String::new())
            }
        }
    }
}

fn extract_pdf_text(upload_dir: &Path, document: &[u8]) -> anyhow::Result<String> {
    let mut upload = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile_in(upload_dir)
        .with_context(|| format!("Failed to create upload file in {}", upload_dir.display()))?;
    upload
        .write_all(document)
        .and_then(|_| upload.flush())
        .context("Failed to write uploaded document")?;

    match pdf_extract::extract_text(upload.path()) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("Could not read text from uploaded PDF: {e:?}");
            Ok(String::new())
        }
    }
}
