//! Shared API client constructor for all platforms.
//!
//! Returns a [`api::CharacterApi`] configured for the current platform:
//! - **Web** (WASM): the public service, no configuration file
//! - **Desktop** (native): `<config_dir>/character-explorer/characters.toml`
//!   if present, otherwise the public service

use api::{ApiConfig, CharacterApi};
use dioxus::prelude::*;

/// Create a platform-appropriate API client.
///
/// Platform packages call this once and provide the result as context:
/// `use_context_provider(ui::make_api)`.
pub fn make_api() -> CharacterApi {
    CharacterApi::new(&load_config())
}

/// Get the API client provided by the platform package.
pub fn use_api() -> CharacterApi {
    use_context::<CharacterApi>()
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> ApiConfig {
    ApiConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> ApiConfig {
    match config_path() {
        Some(path) => config_from_file(&path),
        None => ApiConfig::default(),
    }
}

/// Location of `characters.toml` on native platforms.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("character-explorer").join(ApiConfig::filename()))
}

/// Read a config file, falling back to defaults when it is missing or invalid.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_from_file(path: &std::path::Path) -> ApiConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ApiConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return ApiConfig::default();
        }
    };
    match ApiConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Using character service at {}", config.base_url());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            ApiConfig::default()
        }
    }
}
