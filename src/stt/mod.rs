//! STT (Speech-to-Text) seam.
//!
//! The extraction core treats speech recognition as an external black box: it
//! only needs `audio samples → raw text`.  [`SttEngine`] is the object-safe,
//! thread-safe interface the pipeline consumes; production engines (a local
//! Whisper runner, a cloud ASR client, …) are supplied by the embedding
//! application.  [`MockSttEngine`] (available under `#[cfg(test)]`) returns a
//! pre-configured response for pipeline tests.

use thiserror::Error;

// ---------------------------------------------------------------------------
// SttError
// ---------------------------------------------------------------------------

/// All errors that can arise from the STT seam.
#[derive(Debug, Clone, Error)]
pub enum SttError {
    /// The supplied audio buffer contained no samples.
    #[error("audio buffer is empty")]
    EmptyAudio,

    /// The engine failed during the recognition pass.
    #[error("transcription error: {0}")]
    Transcription(String),
}

// ---------------------------------------------------------------------------
// SttEngine trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for speech-to-text engines.
///
/// Implementations must be `Send + Sync` so that they can be held behind an
/// `Arc<dyn SttEngine>` and called from any thread.
///
/// # Contract
///
/// - `audio` must be **16 kHz, mono, f32** PCM samples.
/// - Returns `Err(SttError::EmptyAudio)` when `audio` is empty.
pub trait SttEngine: Send + Sync {
    /// Transcribe `audio` and return the raw text transcript.
    fn transcribe(&self, audio: &[f32]) -> Result<String, SttError>;
}

// Compile-time assertion: Box<dyn SttEngine> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SttEngine>) {}
};

// ---------------------------------------------------------------------------
// MockSttEngine (test-only)
// ---------------------------------------------------------------------------

/// Test stub that returns a pre-configured response.
///
/// Only compiled for tests — lets the pipeline be exercised without a real
/// recognition model.
#[cfg(test)]
pub struct MockSttEngine {
    response: Result<String, SttError>,
}

#[cfg(test)]
impl MockSttEngine {
    /// Create a mock that always returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: SttError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[cfg(test)]
impl SttEngine for MockSttEngine {
    fn transcribe(&self, audio: &[f32]) -> Result<String, SttError> {
        // Enforce the audio contract even in the mock so that callers are
        // tested against it.
        if audio.is_empty() {
            return Err(SttError::EmptyAudio);
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ok_returns_configured_text() {
        let engine = MockSttEngine::ok("돼지국밥 두 개");
        let audio = vec![0.0f32; 16_000];
        assert_eq!(engine.transcribe(&audio).unwrap(), "돼지국밥 두 개");
    }

    #[test]
    fn mock_err_returns_configured_error() {
        let engine = MockSttEngine::err(SttError::Transcription("boom".into()));
        let audio = vec![0.0f32; 16_000];
        let err = engine.transcribe(&audio).unwrap_err();
        assert!(matches!(err, SttError::Transcription(_)));
    }

    #[test]
    fn mock_empty_audio_returns_empty_audio_error() {
        let engine = MockSttEngine::ok("text");
        let err = engine.transcribe(&[]).unwrap_err();
        assert!(matches!(err, SttError::EmptyAudio));
    }

    #[test]
    fn box_dyn_stt_engine_compiles() {
        // If this test compiles, the trait is object-safe.
        let engine: Box<dyn SttEngine> = Box::new(MockSttEngine::ok("ok"));
        let audio = vec![0.0f32; 16_000];
        let _ = engine.transcribe(&audio);
    }

    #[test]
    fn stt_error_display_mentions_cause() {
        let e = SttError::Transcription("model exploded".into());
        assert!(e.to_string().contains("model exploded"));
        assert!(SttError::EmptyAudio.to_string().contains("empty"));
    }
}
