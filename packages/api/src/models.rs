//! # Domain models for characters and paginated listings
//!
//! Mirrors the JSON returned by the character service. These types are
//! `Serialize + Deserialize` and `Clone` so they can be held in Dioxus signals
//! and resources without extra wrapping.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Character`] | A single character. Immutable on the client; fetched fresh per request. |
//! | [`CharacterStatus`] | `Alive`, `Dead` or `unknown`. Anything else the service sends maps to `unknown`. |
//! | [`LocationRef`] | A named reference to a location resource (used for `origin` and `location`). |
//! | [`CharacterPage`] | One page of the listing: `info` metadata plus ordered `results`. |
//! | [`PageInfo`] | Pagination metadata: total `count`, total `pages`, `next`/`prev` URLs. |
//! | [`PageNumber`] | The `page` query parameter of the list route. Defaults to 1. |

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A character as returned by `GET /character/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// Subspecies or variant, frequently empty.
    #[serde(default)]
    pub r#type: String,
    pub gender: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    /// Avatar URL.
    pub image: String,
    /// URLs of the episodes the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
    /// Canonical URL of this character resource.
    #[serde(default)]
    pub url: String,
    /// Creation timestamp as sent by the service (RFC 3339).
    #[serde(default)]
    pub created: String,
}

/// Life status of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl CharacterStatus {
    /// The label used by the service, e.g. `"Alive"` or `"unknown"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name plus resource URL of a location. The URL is empty when the service
/// does not know the location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /character?page={n}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Pagination metadata of a [`CharacterPage`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters across all pages.
    #[serde(default)]
    pub count: u32,
    /// Total number of pages.
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Page number carried in the `?page=` query parameter.
///
/// Missing or unparseable values become page 1. Out-of-range values are kept
/// as-is and passed to the service unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageNumber(pub u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn get(self) -> u32 {
        self.0
    }

    /// The previous page. Not clamped; callers disable navigation at page 1.
    pub fn prev(self) -> PageNumber {
        PageNumber(self.0.saturating_sub(1))
    }

    pub fn next(self) -> PageNumber {
        PageNumber(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for PageNumber {
    fn from(page: u32) -> Self {
        PageNumber(page)
    }
}

impl FromStr for PageNumber {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim().parse().map(PageNumber).unwrap_or_default())
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
