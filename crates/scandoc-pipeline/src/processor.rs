//! Sequential per-page document processing.

use std::time::Instant;

use chrono::Utc;
use scandoc_analysis::{
    classify_pages, detect_language, detect_quality_hints, detect_table, extract_entities,
    extract_table_data, overall_confidence, status_for_hints, summarize,
};
use scandoc_core::{PageResult, PageStatus, ProcessedDocument, Result, ScandocError};
use scandoc_correct::CorrectionClient;
use scandoc_ocr::{deterministic_confidence, normalize_confidence, OcrProvider, PageInput};

use crate::options::{validate_input, PageSelection};

/// A source document: file name plus one input per source page.
#[derive(Debug, Clone)]
pub struct InputDocument {
    /// Original file name, carried into the processed document
    pub file_name: String,
    /// Source pages in order (page 1 first)
    pub pages: Vec<PageInput>,
}

/// Sequential document processor.
///
/// Owns the OCR provider and an optional correction client. Pages are
/// processed strictly in order, one provider call per page; a provider
/// failure aborts the whole document. Correction failures are logged and
/// fall back to the raw text.
#[derive(Debug)]
pub struct DocumentProcessor<P> {
    provider: P,
    corrector: Option<CorrectionClient>,
}

impl<P: OcrProvider> DocumentProcessor<P> {
    /// Create a processor around an OCR provider, without correction.
    #[must_use = "creates a processor without using it"]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            corrector: None,
        }
    }

    /// Attach an AI correction client.
    #[must_use = "returns the configured processor"]
    pub fn with_corrector(mut self, corrector: CorrectionClient) -> Self {
        self.corrector = Some(corrector);
        self
    }

    /// The wrapped OCR provider.
    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Process the selected pages of a document.
    ///
    /// `progress` is called once per completed page with
    /// `(completed, total)` for the selected page count.
    ///
    /// # Errors
    /// Validation errors are returned before the first provider call; a
    /// provider error on any page aborts the run with no partial document.
    pub async fn process(
        &self,
        input: &InputDocument,
        selection: &PageSelection,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<ProcessedDocument> {
        let started = Instant::now();

        for page in &input.pages {
            if let PageInput::Image { bytes, mime_type } = page {
                validate_input(&input.file_name, bytes.len(), mime_type)?;
            }
        }
        let selected = selection.resolve(input.pages.len())?;

        let total = selected.len();
        let mut pages = Vec::with_capacity(total);
        for (done, &page_number) in selected.iter().enumerate() {
            let page_input = &input.pages[page_number as usize - 1];
            pages.push(self.process_page(page_number, page_input).await?);
            progress(done + 1, total);
        }

        let classification = classify_pages(&pages);
        let document = ProcessedDocument {
            file_name: input.file_name.clone(),
            overall_confidence: overall_confidence(&pages),
            total_pages: pages.len(),
            processed_at: Utc::now(),
            processing_time: started.elapsed(),
            document_type: classification.as_ref().map(|(info, _)| info.clone()),
            detected_language: classification.map(|(_, language)| language),
            summary: Some(summarize(&pages)),
            exports: None,
            pages,
        };

        log::info!(
            "processed '{}': {} pages, confidence {}",
            document.file_name,
            document.total_pages,
            document.overall_confidence
        );
        Ok(document)
    }

    /// Process a single page: OCR, correction, tables, quality, entities.
    async fn process_page(&self, page_number: u32, input: &PageInput) -> Result<PageResult> {
        let provider_page = self
            .provider
            .recognize_page(input)
            .await
            .map_err(|e| ScandocError::ProviderError(e.to_string()))?;

        if provider_page.text.trim().is_empty() {
            log::warn!("page {page_number}: provider returned no text");
            let mut page = PageResult::new(page_number, String::new(), 0.0);
            page.status = PageStatus::Error;
            return Ok(page);
        }

        let confidence = match provider_page.confidence {
            Some(raw) => normalize_confidence(raw),
            None => f64::from(deterministic_confidence(&provider_page.text)),
        };

        let text = match &self.corrector {
            Some(corrector) => match corrector.correct_text(&provider_page.text).await {
                Ok(corrected) => corrected,
                Err(e) => {
                    log::warn!("page {page_number}: correction failed, keeping raw text: {e}");
                    provider_page.text.clone()
                }
            },
            None => provider_page.text.clone(),
        };

        let mut page = PageResult::new(page_number, text, confidence);

        // Provider-reported tables win over the text heuristics.
        let table = provider_page
            .tables
            .first()
            .filter(|table| !table.rows.is_empty())
            .map(|table| table.rows.clone())
            .or_else(|| detect_table(&page.text).then(|| extract_table_data(&page.text)));
        page.set_table(table);

        page.quality_hints =
            detect_quality_hints(&provider_page.transforms, provider_page.quality_score);
        page.status = status_for_hints(&page.quality_hints);
        // Per-page provider payloads reference their own page as index 0.
        page.entities = extract_entities(&provider_page.entities, 0);
        page.language = Some(detect_language(&page.text));

        Ok(page)
    }
}
