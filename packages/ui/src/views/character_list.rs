use api::{ApiError, CharacterPage, PageNumber};
use dioxus::prelude::*;

use crate::icons::{FaArrowsRotate, FaGrip, FaTable};
use crate::{use_api, CharacterGrid, CharacterTable, FetchState, Icon, Pagination, PaginationControls};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// How a loaded page is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListLayout {
    #[default]
    Table,
    Cards,
}

/// Fetch of one page of characters, keyed by `page`.
///
/// Re-runs when `page` changes; `restart()` re-issues the request for the
/// same page. A superseded request is dropped, never rendered.
pub fn use_character_page(page: Signal<PageNumber>) -> Resource<Result<CharacterPage, ApiError>> {
    let api = use_api();
    use_resource(move || {
        let api = api.clone();
        let page = page();
        async move {
            api.fetch_characters(page).await.inspect_err(|e| {
                tracing::warn!("Failed to load page {page}: {e}");
            })
        }
    })
}

/// Shared character list view.
///
/// Fetches one page of characters and shows it as a table (or card grid) with
/// pagination controls. Platform packages own the route and provide the
/// navigation callbacks.
#[component]
pub fn CharacterListView(
    /// Page from the `?page=` query parameter.
    page: PageNumber,
    /// Called by Prev/Next with the page to navigate to.
    on_navigate_page: EventHandler<PageNumber>,
    /// Called with a character id when its name (or card) is clicked.
    on_select_character: EventHandler<i64>,
    /// Layout shown until the user toggles it.
    #[props(default)]
    initial_layout: ListLayout,
) -> Element {
    // Track the page in a signal so use_resource re-runs on route param change
    let mut page_signal = use_signal(|| page);
    if *page_signal.peek() != page {
        page_signal.set(page);
    }

    let mut layout = use_signal(|| initial_layout);
    let mut characters = use_character_page(page_signal);

    let current = page_signal();

    let body = match FetchState::from_resource(&characters) {
        FetchState::Loading => rsx! {
            div { class: "character-list__loading", "Loading..." }
        },
        FetchState::Error(e) => rsx! {
            div { class: "character-list__error", "Error loading characters: {e}" }
        },
        FetchState::Loaded(data) => {
            let pagination = Pagination::new(current, data.info.pages);
            let results = data.results;
            rsx! {
                if layout() == ListLayout::Cards {
                    CharacterGrid { characters: results.clone(), on_select: on_select_character }
                } else {
                    CharacterTable { characters: results.clone(), on_select: on_select_character }
                }
                PaginationControls { pagination, on_navigate: on_navigate_page }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "character-list",

            div {
                class: "character-list__header",
                h1 { class: "character-list__heading", "Rick & Morty Characters (Page {current})" }
                div {
                    class: "character-list__actions",
                    button {
                        class: "character-list__layout-button",
                        title: "Table",
                        disabled: layout() == ListLayout::Table,
                        onclick: move |_| layout.set(ListLayout::Table),
                        Icon { icon: FaTable, width: 14, height: 14 }
                    }
                    button {
                        class: "character-list__layout-button",
                        title: "Cards",
                        disabled: layout() == ListLayout::Cards,
                        onclick: move |_| layout.set(ListLayout::Cards),
                        Icon { icon: FaGrip, width: 14, height: 14 }
                    }
                    button {
                        class: "character-list__refresh-button",
                        onclick: move |_| characters.restart(),
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        " Refresh"
                    }
                }
            }

            {body}
        }
    }
}
