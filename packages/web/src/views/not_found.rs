use api::PageNumber;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::CharacterList { page: PageNumber::FIRST }, "Back to the characters" }
        }
    }
}
