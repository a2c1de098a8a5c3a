use api::Character;
use dioxus::prelude::*;

use crate::icons::FaArrowLeft;
use crate::Icon;

/// Detail card for one character with a back button.
#[component]
pub fn CharacterProfile(character: Character, on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "character-detail__card",
            img {
                class: "character-detail__image",
                src: "{character.image}",
                alt: "{character.name}",
            }
            div {
                class: "character-detail__info",
                h1 { class: "character-detail__name", "{character.name}" }
                p { strong { "Status:" } " {character.status}" }
                p { strong { "Species:" } " {character.species}" }
                p { strong { "Gender:" } " {character.gender}" }
                p { strong { "Origin:" } " {character.origin.name}" }
                button {
                    class: "character-detail__back-button",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    " Go Back to Table"
                }
            }
        }
    }
}
