//! Correctors that never fail.
//!
//! [`FallbackCorrector`] wraps any [`TextCorrector`] and returns the raw text
//! when the underlying LLM call fails for any reason (`Request`, `Timeout`,
//! `Parse`, `EmptyResponse`).  This keeps the order pipeline functional even
//! when the API is unreachable — correction is a soft dependency, never a
//! hard one.
//!
//! [`PassthroughCorrector`] is the identity corrector used when correction
//! is disabled in config; extraction must be correct on uncorrected text.

use async_trait::async_trait;

use crate::llm::corrector::{LlmError, TextCorrector};

// ---------------------------------------------------------------------------
// FallbackCorrector
// ---------------------------------------------------------------------------

/// A transparent wrapper around any [`TextCorrector`] that never returns an
/// error — on failure it returns `raw` unchanged.
///
/// # Example
/// ```rust
/// use voice_order::config::LlmConfig;
/// use voice_order::llm::{ApiCorrector, FallbackCorrector};
/// use voice_order::menu::MenuCatalog;
///
/// let inner = ApiCorrector::from_config(&LlmConfig::default(), &MenuCatalog::default());
/// let corrector = FallbackCorrector::new(inner);
/// // `corrector` now implements TextCorrector and is safe to use even when
/// // the LLM backend is unavailable.
/// ```
pub struct FallbackCorrector<C: TextCorrector> {
    inner: C,
}

impl<C: TextCorrector> FallbackCorrector<C> {
    /// Wrap `inner` with fail-open behaviour.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Return a reference to the wrapped corrector.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: TextCorrector + Send + Sync> TextCorrector for FallbackCorrector<C> {
    /// Attempt LLM correction; return `raw` unchanged if any error occurs.
    ///
    /// This implementation **never** returns `Err(_)`.
    async fn correct(&self, raw: &str) -> Result<String, LlmError> {
        match self.inner.correct(raw).await {
            Ok(corrected) => Ok(corrected),
            Err(_err) => {
                log::warn!(
                    "LLM correction failed — using raw transcript (len={})",
                    raw.len()
                );
                Ok(raw.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PassthroughCorrector
// ---------------------------------------------------------------------------

/// Identity corrector: returns the input unchanged.  Used when LLM correction
/// is disabled.
pub struct PassthroughCorrector;

#[async_trait]
impl TextCorrector for PassthroughCorrector {
    async fn correct(&self, raw: &str) -> Result<String, LlmError> {
        Ok(raw.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Always succeeds with a fixed corrected string.
    struct AlwaysOk(String);

    #[async_trait]
    impl TextCorrector for AlwaysOk {
        async fn correct(&self, _raw: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    /// Always returns the given error.
    struct AlwaysFails(LlmErrorKind);

    enum LlmErrorKind {
        Request,
        Timeout,
        Parse,
        Empty,
    }

    #[async_trait]
    impl TextCorrector for AlwaysFails {
        async fn correct(&self, _raw: &str) -> Result<String, LlmError> {
            let err = match self.0 {
                LlmErrorKind::Request => LlmError::Request("connection refused".into()),
                LlmErrorKind::Timeout => LlmError::Timeout,
                LlmErrorKind::Parse => LlmError::Parse("bad json".into()),
                LlmErrorKind::Empty => LlmError::EmptyResponse,
            };
            Err(err)
        }
    }

    // -----------------------------------------------------------------------
    // FallbackCorrector
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn passes_through_success() {
        let corrector = FallbackCorrector::new(AlwaysOk("돼지국밥 2개".into()));
        let result = corrector.correct("돼지 둘").await.unwrap();
        assert_eq!(result, "돼지국밥 2개");
    }

    #[tokio::test]
    async fn returns_raw_on_request_error() {
        let corrector = FallbackCorrector::new(AlwaysFails(LlmErrorKind::Request));
        let result = corrector.correct("돼지 둘").await.unwrap();
        assert_eq!(result, "돼지 둘");
    }

    #[tokio::test]
    async fn returns_raw_on_timeout() {
        let corrector = FallbackCorrector::new(AlwaysFails(LlmErrorKind::Timeout));
        let result = corrector.correct("돼지 둘").await.unwrap();
        assert_eq!(result, "돼지 둘");
    }

    #[tokio::test]
    async fn returns_raw_on_parse_error() {
        let corrector = FallbackCorrector::new(AlwaysFails(LlmErrorKind::Parse));
        let result = corrector.correct("돼지 둘").await.unwrap();
        assert_eq!(result, "돼지 둘");
    }

    #[tokio::test]
    async fn returns_raw_on_empty_response() {
        let corrector = FallbackCorrector::new(AlwaysFails(LlmErrorKind::Empty));
        let result = corrector.correct("돼지 둘").await.unwrap();
        assert_eq!(result, "돼지 둘");
    }

    #[tokio::test]
    async fn never_returns_err() {
        let corrector = FallbackCorrector::new(AlwaysFails(LlmErrorKind::Timeout));
        // Must always be Ok(_), even on failure
        assert!(corrector.correct("test").await.is_ok());
    }

    /// FallbackCorrector<C> must itself be a valid TextCorrector (object-safe).
    #[test]
    fn fallback_is_object_safe() {
        let inner = AlwaysOk("ok".into());
        let _: Box<dyn TextCorrector> = Box::new(FallbackCorrector::new(inner));
    }

    // -----------------------------------------------------------------------
    // PassthroughCorrector
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn passthrough_returns_input_verbatim() {
        let corrector = PassthroughCorrector;
        let raw = "수육 반 두 개";
        assert_eq!(corrector.correct(raw).await.unwrap(), raw);
    }
}
