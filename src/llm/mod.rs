//! LLM transcript-correction module.
//!
//! This module provides:
//! * [`TextCorrector`] — async trait implemented by all corrector backends.
//! * [`ApiCorrector`] — OpenAI-compatible REST API corrector.
//! * [`FallbackCorrector`] — wraps any corrector; returns raw text on failure.
//! * [`PassthroughCorrector`] — identity corrector for the disabled case.
//! * [`PromptBuilder`] — builds the Korean menu-correction prompt from a
//!   menu catalog.
//! * [`LlmError`] — error variants for LLM operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use voice_order::config::AppConfig;
//! use voice_order::llm::{ApiCorrector, FallbackCorrector, TextCorrector};
//! use voice_order::menu::MenuCatalog;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let catalog = MenuCatalog::default();
//!
//!     // Build a corrector that never fails (falls back to raw text).
//!     let corrector =
//!         FallbackCorrector::new(ApiCorrector::from_config(&config.llm, &catalog));
//!
//!     let corrected = corrector.correct("내장 세 그릇이요").await.unwrap();
//!     println!("{}", corrected);
//! }
//! ```

pub mod corrector;
pub mod fallback;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use corrector::{ApiCorrector, LlmError, TextCorrector};
pub use fallback::{FallbackCorrector, PassthroughCorrector};
pub use prompt::PromptBuilder;
