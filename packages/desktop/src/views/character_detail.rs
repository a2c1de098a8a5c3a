use api::PageNumber;
use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn CharacterDetail(id: String) -> Element {
    let nav = use_navigator();

    let navigate_list = move |_: ()| {
        nav.push(Route::CharacterList { page: PageNumber::FIRST });
    };

    rsx! {
        ui::views::CharacterDetailView {
            id,
            on_back: navigate_list,
        }
    }
}
