//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings + menu catalog):
//!   Windows: %APPDATA%\voice-order\
//!   macOS:   ~/Library/Application Support/voice-order/
//!   Linux:   ~/.config/voice-order/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `menu.toml`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to `menu.toml` (optional substitute menu catalog).
    pub menu_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "voice-order";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let menu_file = config_dir.join("menu.toml");

        Self {
            config_dir,
            settings_file,
            menu_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
