//! Korean Voice-Order — turns a speech-recognized Korean utterance into a
//! structured restaurant order.
//!
//! # Architecture
//!
//! ```text
//! audio ──▶ SttEngine ──▶ raw text ──▶ TextCorrector ──▶ corrected text
//!           (external)                 (LLM, fail-open)        │
//!                                                              ▼
//!                                                       OrderExtractor
//!                                                              │
//!                                                              ▼
//!                                              Order (menu name → quantity)
//! ```
//!
//! The core is [`order::OrderExtractor`]: a rule-based pass that matches menu
//! alias keywords against the text, searches a fixed-precedence family of
//! quantity patterns around each matched alias, resolves Korean numeral words
//! and digit strings via [`order::NumeralResolver`], and accumulates
//! quantities per canonical menu name. Speech recognition and LLM correction
//! are external collaborators behind trait seams ([`stt::SttEngine`],
//! [`llm::TextCorrector`]); the extractor must produce correct orders whether
//! or not correction happened.
//!
//! # Quick start
//!
//! ```rust
//! use voice_order::menu::MenuCatalog;
//! use voice_order::order::OrderExtractor;
//!
//! let catalog = MenuCatalog::default();
//! let extractor = OrderExtractor::new(&catalog).unwrap();
//!
//! let order = extractor.extract("내장 세 그릇하고 순대 하나요");
//! assert_eq!(order.quantity_of("내장국밥"), Some(3));
//! assert_eq!(order.quantity_of("순대국밥"), Some(1));
//! ```

pub mod config;
pub mod llm;
pub mod menu;
pub mod order;
pub mod pipeline;
pub mod stt;
