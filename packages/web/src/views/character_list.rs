use api::PageNumber;
use dioxus::prelude::*;
use ui::views::CharacterListView;

use crate::Route;

#[component]
pub fn CharacterList(page: PageNumber) -> Element {
    let nav = use_navigator();

    rsx! {
        CharacterListView {
            page,
            on_navigate_page: move |page: PageNumber| {
                nav.push(Route::CharacterList { page });
            },
            on_select_character: move |id: i64| {
                nav.push(Route::CharacterDetail { id: id.to_string() });
            },
        }
    }
}
