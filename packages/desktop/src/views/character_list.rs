use api::PageNumber;
use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn CharacterList(page: PageNumber) -> Element {
    let nav = use_navigator();

    let navigate_page = move |page: PageNumber| {
        nav.push(Route::CharacterList { page });
    };

    let select_character = move |id: i64| {
        nav.push(Route::CharacterDetail { id: id.to_string() });
    };

    rsx! {
        ui::views::CharacterListView {
            page,
            on_navigate_page: navigate_page,
            on_select_character: select_character,
        }
    }
}
