//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{load_config, make_api, use_api};
#[cfg(not(target_arch = "wasm32"))]
pub use client::{config_from_file, config_path};

pub mod views;

mod fetch_state;
pub use fetch_state::FetchState;

mod pagination;
pub use pagination::{Pagination, PaginationControls};

mod character_table;
pub use character_table::{CharacterTable, Column, COLUMNS};

mod character_card;
pub use character_card::{CharacterCard, CharacterGrid};

mod character_profile;
pub use character_profile::CharacterProfile;
