//! Order pipeline — drives the raw text → correction → extraction flow.
//!
//! # Pipeline flow
//!
//! ```text
//! process_audio(stt, samples)
//!   └─▶ spawn_blocking(stt.transcribe) ──▶ raw text ─┐
//!                                                     │
//! process_transcript(raw) ◀───────────────────────────┘
//!   └─▶ corrector.correct (async)
//!         ├─ Ok  → extract from corrected text
//!         └─ Err → warn + extract from raw text (fail-open)
//! ```
//!
//! Correction is a soft dependency: any corrector error falls back to the raw
//! transcript, and the extractor is required to handle uncorrected text.
//! Extraction itself is synchronous and touches no shared mutable state, so
//! one [`OrderPipeline`] can serve concurrent requests behind an `Arc`
//! without locking.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::llm::TextCorrector;
use crate::order::{Order, OrderExtractor};
use crate::stt::{SttEngine, SttError};

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that can surface from the audio entry point.  The text entry point
/// never fails: extraction has no error path and correction fails open.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// STT engine failed or rejected the audio.
    #[error("transcription failed: {0}")]
    Stt(#[from] SttError),

    /// Internal / unexpected error (e.g. tokio join failure).
    #[error("internal pipeline error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// OrderOutcome
// ---------------------------------------------------------------------------

/// Result of one pipeline run: both text stages plus the extracted order,
/// mirroring what the serving layer presents to the cashier screen.
#[derive(Debug, Clone, Serialize)]
pub struct OrderOutcome {
    /// The transcript as it entered the pipeline.
    pub original_text: String,
    /// The transcript after correction (equal to `original_text` when
    /// correction was skipped or failed).
    pub corrected_text: String,
    /// The extracted order; empty means "order not understood".
    pub order: Order,
}

// ---------------------------------------------------------------------------
// OrderPipeline
// ---------------------------------------------------------------------------

/// Drives correction and extraction for one utterance at a time.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use voice_order::llm::PassthroughCorrector;
/// use voice_order::menu::MenuCatalog;
/// use voice_order::order::OrderExtractor;
/// use voice_order::pipeline::OrderPipeline;
///
/// # #[tokio::main]
/// # async fn main() {
/// let catalog = MenuCatalog::default();
/// let extractor = OrderExtractor::new(&catalog).unwrap();
/// let pipeline = OrderPipeline::new(Arc::new(PassthroughCorrector), extractor);
///
/// let outcome = pipeline.process_transcript("섞어 5개").await;
/// assert_eq!(outcome.order.quantity_of("섞어국밥"), Some(5));
/// # }
/// ```
pub struct OrderPipeline {
    corrector: Arc<dyn TextCorrector>,
    extractor: OrderExtractor,
}

impl OrderPipeline {
    /// Create a pipeline from a corrector and a prepared extractor.
    pub fn new(corrector: Arc<dyn TextCorrector>, extractor: OrderExtractor) -> Self {
        Self {
            corrector,
            extractor,
        }
    }

    /// Correct `raw` (fail-open) and extract an order from the result.
    ///
    /// Never fails: a corrector error falls back to the raw transcript, and
    /// fully-unmatched text produces an empty order for the caller to turn
    /// into a "please repeat" prompt.
    pub async fn process_transcript(&self, raw: &str) -> OrderOutcome {
        let corrected = match self.corrector.correct(raw).await {
            Ok(corrected) => {
                log::debug!("corrected transcript: {corrected:?}");
                corrected
            }
            Err(e) => {
                log::warn!("correction failed ({e}), extracting from raw transcript");
                raw.to_string()
            }
        };

        let order = self.extractor.extract(&corrected);
        log::debug!("extracted {} line(s)", order.lines().len());

        OrderOutcome {
            original_text: raw.to_string(),
            corrected_text: corrected,
            order,
        }
    }

    /// Transcribe `audio` via the caller-supplied engine, then run
    /// [`process_transcript`](Self::process_transcript).
    ///
    /// Recognition may be compute-heavy, so it runs on the blocking thread
    /// pool.  Only the STT step can fail.
    pub async fn process_audio(
        &self,
        stt: Arc<dyn SttEngine>,
        audio: Vec<f32>,
    ) -> Result<OrderOutcome, PipelineError> {
        if audio.is_empty() {
            return Err(PipelineError::Stt(SttError::EmptyAudio));
        }

        let raw = tokio::task::spawn_blocking(move || stt.transcribe(&audio))
            .await
            .map_err(|e| PipelineError::Internal(e.to_string()))??;

        log::debug!("raw transcript: {raw:?}");
        Ok(self.process_transcript(&raw).await)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LlmError, PassthroughCorrector};
    use crate::menu::MenuCatalog;
    use crate::stt::MockSttEngine;
    use async_trait::async_trait;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Corrector that always succeeds with a fixed string.
    struct OkCorrector(String);

    #[async_trait]
    impl TextCorrector for OkCorrector {
        async fn correct(&self, _raw: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    /// Corrector that always fails.
    struct FailCorrector;

    #[async_trait]
    impl TextCorrector for FailCorrector {
        async fn correct(&self, _raw: &str) -> Result<String, LlmError> {
            Err(LlmError::Timeout)
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn make_pipeline(corrector: Arc<dyn TextCorrector>) -> OrderPipeline {
        let extractor =
            OrderExtractor::new(&MenuCatalog::default()).expect("patterns compile");
        OrderPipeline::new(corrector, extractor)
    }

    fn one_second_of_silence() -> Vec<f32> {
        vec![0.0f32; 16_000]
    }

    // -----------------------------------------------------------------------
    // process_transcript
    // -----------------------------------------------------------------------

    /// A successful correction feeds the corrected text to the extractor.
    #[tokio::test]
    async fn corrected_text_drives_extraction() {
        let pipeline = make_pipeline(Arc::new(OkCorrector("돼지국밥 2개".into())));

        let outcome = pipeline.process_transcript("돼지 둘").await;

        assert_eq!(outcome.original_text, "돼지 둘");
        assert_eq!(outcome.corrected_text, "돼지국밥 2개");
        assert_eq!(outcome.order.quantity_of("돼지국밥"), Some(2));
    }

    /// When the corrector fails the pipeline must extract from the raw
    /// transcript, NOT error out.
    #[tokio::test]
    async fn corrector_failure_falls_back_to_raw_text() {
        let pipeline = make_pipeline(Arc::new(FailCorrector));

        let outcome = pipeline.process_transcript("내장 세 그릇").await;

        assert_eq!(outcome.corrected_text, "내장 세 그릇");
        assert_eq!(outcome.order.quantity_of("내장국밥"), Some(3));
    }

    /// Passthrough (correction disabled) must still extract correctly from
    /// colloquial, uncorrected phrasing.
    #[tokio::test]
    async fn passthrough_handles_uncorrected_text() {
        let pipeline = make_pipeline(Arc::new(PassthroughCorrector));

        let outcome = pipeline.process_transcript("수육 반 두 개").await;

        assert_eq!(outcome.order.quantity_of("수육 반접시"), Some(2));
    }

    /// Unrelated input yields an empty order, never an error.
    #[tokio::test]
    async fn unrelated_text_yields_empty_order() {
        let pipeline = make_pipeline(Arc::new(PassthroughCorrector));

        let outcome = pipeline.process_transcript("오늘 날씨 좋네요").await;

        assert!(outcome.order.is_empty());
    }

    // -----------------------------------------------------------------------
    // process_audio
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn audio_path_runs_full_flow() {
        let pipeline = make_pipeline(Arc::new(PassthroughCorrector));
        let stt: Arc<dyn SttEngine> = Arc::new(MockSttEngine::ok("순대 하나"));

        let outcome = pipeline
            .process_audio(stt, one_second_of_silence())
            .await
            .expect("pipeline run");

        assert_eq!(outcome.original_text, "순대 하나");
        assert_eq!(outcome.order.quantity_of("순대국밥"), Some(1));
    }

    #[tokio::test]
    async fn empty_audio_is_rejected_before_transcription() {
        let pipeline = make_pipeline(Arc::new(PassthroughCorrector));
        let stt: Arc<dyn SttEngine> = Arc::new(MockSttEngine::ok("순대 하나"));

        let err = pipeline.process_audio(stt, Vec::new()).await.unwrap_err();
        assert!(matches!(err, PipelineError::Stt(SttError::EmptyAudio)));
    }

    #[tokio::test]
    async fn stt_failure_propagates() {
        let pipeline = make_pipeline(Arc::new(PassthroughCorrector));
        let stt: Arc<dyn SttEngine> =
            Arc::new(MockSttEngine::err(SttError::Transcription("boom".into())));

        let err = pipeline
            .process_audio(stt, one_second_of_silence())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Stt(SttError::Transcription(_))
        ));
    }
}
