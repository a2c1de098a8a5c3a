use dioxus::prelude::*;

use crate::{use_api, CharacterProfile, FetchState};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared character detail view.
///
/// Fetches a single character by the id taken from the route. The back action
/// is delegated to the platform package, which decides where to go.
#[component]
pub fn CharacterDetailView(
    /// String-encoded character id from the `/character/:id` route.
    id: String,
    /// Called when the user asks to go back to the list.
    on_back: EventHandler<()>,
) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let api = use_api();

    let character = use_resource(move || {
        let api = api.clone();
        let id = id_signal();
        async move {
            api.fetch_character(&id).await.inspect_err(|e| {
                tracing::warn!("Failed to load character {id}: {e}");
            })
        }
    });

    let body = match FetchState::from_resource(&character) {
        FetchState::Loading => rsx! {
            div { class: "character-detail__loading", "Loading..." }
        },
        FetchState::Error(e) => rsx! {
            div { class: "character-detail__error", "Error loading character: {e}" }
        },
        FetchState::Loaded(data) => rsx! {
            CharacterProfile { character: data, on_back }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "character-detail__container",
            {body}
        }
    }
}
