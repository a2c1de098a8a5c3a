use api::Character;
use dioxus::prelude::*;

/// Compact card: avatar, name and "species - status". Clicking selects it.
#[component]
pub fn CharacterCard(character: Character, on_select: EventHandler<i64>) -> Element {
    let id = character.id;

    rsx! {
        div {
            class: "character-card",
            onclick: move |_| on_select.call(id),
            img {
                class: "character-card__image",
                src: "{character.image}",
                alt: "{character.name}",
                width: 100,
            }
            h3 { class: "character-card__name", "{character.name}" }
            p { class: "character-card__meta", "{character.species} - {character.status}" }
        }
    }
}

/// Grid of [`CharacterCard`]s.
#[component]
pub fn CharacterGrid(characters: Vec<Character>, on_select: EventHandler<i64>) -> Element {
    rsx! {
        div {
            class: "character-grid",
            for character in characters {
                CharacterCard { key: "{character.id}", character: character.clone(), on_select }
            }
        }
    }
}
