//! # Client configuration — `characters.toml`
//!
//! Optional TOML file that points the client at a different character
//! service (a local mirror, a staging deployment, a mock server in tests).
//!
//! ```toml
//! [api]
//! base_url = "https://rickandmortyapi.com/api"
//! ```
//!
//! All structs derive `Default` so that a missing or empty file is equivalent
//! to talking to the public service.

use serde::{Deserialize, Serialize};

/// Base URL of the public character service.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Top-level configuration stored in `characters.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub api: EndpointConfig,
}

/// Where the character service lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL without trailing slash; `/character` is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: EndpointConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "characters.toml"
    }

    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
