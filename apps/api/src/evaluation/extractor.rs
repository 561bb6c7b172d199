//! Resume text extraction — wraps `pdf-extract`.
//!
//! Extraction never fails: unreadable documents degrade to an empty string and the
//! evaluation proceeds with an empty resume.

use bytes::Bytes;
use tracing::{debug, warn};

/// Extracts the text of every page of a PDF, in page order.
///
/// Parsing runs on the blocking pool; a parser error or panic yields `""`.
pub async fn extract_resume_text(document: Bytes) -> String {
    let result = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&document).map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(Ok(pages)) => {
            debug!("Extracted text from {} PDF page(s)", pages.len());
            concat_pages(pages.into_iter().map(Some))
        }
        Ok(Err(e)) => {
            warn!("PDF text extraction failed, continuing with empty resume: {e}");
            String::new()
        }
        Err(e) => {
            warn!("PDF parser aborted, continuing with empty resume: {e}");
            String::new()
        }
    }
}

/// Concatenates page texts in order. Pages without text contribute nothing.
pub fn concat_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pages
        .into_iter()
        .flatten()
        .filter(|page| !page.is_empty())
        .collect()
}
