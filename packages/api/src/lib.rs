//! # API crate — character service client for Character Explorer
//!
//! Everything the web and desktop frontends need to talk to the public
//! character service: the HTTP client, the JSON models and the small
//! configuration file that can point the client somewhere else.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`CharacterApi`]: `GET /character?page={n}` and `GET /character/{id}` |
//! | [`config`] | [`ApiConfig`], parsed from `characters.toml` |
//! | [`error`] | [`ApiError`], the single error type both calls return |
//! | [`models`] | [`Character`], [`CharacterPage`] and the `page` route parameter [`PageNumber`] |
//!
//! Errors are never caught or translated here; callers decide how to show
//! them.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::CharacterApi;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{Character, CharacterPage, CharacterStatus, LocationRef, PageInfo, PageNumber};
