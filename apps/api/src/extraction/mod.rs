//! Document text extraction — turns an uploaded document into raw text.
//!
//! The analysis core never sees documents, only the strings produced here.
//! `AppState` holds an `Arc<dyn DocumentTextExtractor>` so the backend can be
//! swapped without touching handlers.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded document is empty")]
    EmptyDocument,

    #[error("Uploaded document is not a PDF")]
    NotPdf,

    #[error("Could not read text from PDF: {0}")]
    Unreadable(String),
}

#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError>;
}

/// PDF extractor backed by `pdf-extract`. Parsing is CPU-bound, so it runs in
/// `spawn_blocking`.
pub struct PdfTextExtractor;

#[async_trait]
impl DocumentTextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError> {
        check_pdf_header(&document)?;
        extract_on_blocking_pool(document, parse_pdf).await
    }
}

fn parse_pdf(document: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(document)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))
}

/// Runs `parse` inside `spawn_blocking`. Parse errors are the caller's fault
/// (422); a task that dies (e.g. a parser panic) is an internal error (500).
pub async fn extract_on_blocking_pool(
    document: Bytes,
    parse: fn(&[u8]) -> Result<String, ExtractionError>,
) -> Result<String, AppError> {
    let size = document.len();
    let text = tokio::task::spawn_blocking(move || parse(&document))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text extraction: {e}"))
        })??;

    debug!("Extracted {} chars from {} byte document", text.len(), size);
    Ok(text)
}

fn check_pdf_header(document: &[u8]) -> Result<(), ExtractionError> {
    if document.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }
    if !document.starts_with(PDF_MAGIC) {
        return Err(ExtractionError::NotPdf);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_check_accepts_pdf_magic() {
        assert!(check_pdf_header(b"%PDF-1.7\n...").is_ok());
    }

    #[tokio::test]
    async fn test_empty_document_rejected() {
        let err = PdfTextExtractor
            .extract_text(Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(ExtractionError::EmptyDocument)));
    }

    #[tokio::test]
    async fn test_non_pdf_rejected() {
        let err = PdfTextExtractor
            .extract_text(Bytes::from_static(b"plain text resume"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(ExtractionError::NotPdf)));
    }

    #[tokio::test]
    async fn test_truncated_pdf_fails() {
        let result = PdfTextExtractor
            .extract_text(Bytes::from_static(b"%PDF-1.4\n%garbage"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_parse_error_maps_to_extraction_error() {
        let err = extract_on_blocking_pool(Bytes::from_static(b"x"), |_| {
            Err(ExtractionError::Unreadable("bad xref".to_string()))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Extraction(ExtractionError::Unreadable(_))));
    }

    #[tokio::test]
    async fn test_parser_panic_maps_to_internal_error() {
        let err = extract_on_blocking_pool(Bytes::from_static(b"x"), |_| {
            panic!("parser crashed")
        })
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_blocking_pool_returns_parsed_text() {
        let text = extract_on_blocking_pool(Bytes::from_static(b"python sql"), |bytes| {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        })
        .await
        .unwrap();
        assert_eq!(text, "python sql");
    }
}
