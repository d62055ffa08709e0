use tracing::debug;

use crate::errors::AppError;
use crate::screening::extractor::normalize_text;

/// Extracts and lowercases the text of an uploaded PDF.
///
/// Parsing is CPU-bound and the parser may panic on malformed input, so it
/// runs inside `spawn_blocking`; parse errors and parser panics surface as
/// `Extraction`. The document is read as a whole: one unreadable page fails
/// the upload rather than being skipped.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let size = bytes.len();

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::Extraction(format!("PDF parser panicked: {e}"))
            } else {
                AppError::Internal(anyhow::Error::new(e).context("PDF extraction task cancelled"))
            }
        })?
        .map_err(|e| AppError::Extraction(format!("PDF could not be parsed: {e}")))?;

    debug!(bytes = size, chars = text.len(), "PDF text extracted");
    Ok(normalize_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_an_extraction_error() {
        let result = extract_pdf_text(b"definitely not a pdf".to_vec()).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_empty_upload_is_an_extraction_error() {
        let result = extract_pdf_text(Vec::new()).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
