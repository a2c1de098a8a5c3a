use api::PageNumber;
use dioxus::prelude::*;
use ui::views::CharacterDetailView;

use crate::Route;

#[component]
pub fn CharacterDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        CharacterDetailView {
            id,
            // Always back to the first page, not the page the user came from
            on_back: move |_| {
                nav.push(Route::CharacterList { page: PageNumber::FIRST });
            },
        }
    }
}
