//! Configuration module for the voice-order service.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the LLM and
//! menu subsystems, `AppPaths` for cross-platform config directories, and
//! TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, LlmConfig, MenuSettings};
