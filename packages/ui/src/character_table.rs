//! Table of characters with a fixed column set.

use api::Character;
use dioxus::prelude::*;

/// A column of the character table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Image,
    Name,
    Status,
    Species,
    Gender,
    Origin,
    Location,
}

/// Columns in display order.
pub const COLUMNS: [Column; 7] = [
    Column::Image,
    Column::Name,
    Column::Status,
    Column::Species,
    Column::Gender,
    Column::Origin,
    Column::Location,
];

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Image => "Image",
            Column::Name => "Name",
            Column::Status => "Status",
            Column::Species => "Species",
            Column::Gender => "Gender",
            Column::Origin => "Origin",
            Column::Location => "Location",
        }
    }

    /// Cell value; for [`Column::Image`] this is the image URL.
    pub fn value(&self, character: &Character) -> String {
        match self {
            Column::Image => character.image.clone(),
            Column::Name => character.name.clone(),
            Column::Status => character.status.to_string(),
            Column::Species => character.species.clone(),
            Column::Gender => character.gender.clone(),
            Column::Origin => character.origin.name.clone(),
            Column::Location => character.location.name.clone(),
        }
    }
}

/// One row per character. Clicking a name calls `on_select` with its id.
#[component]
pub fn CharacterTable(characters: Vec<Character>, on_select: EventHandler<i64>) -> Element {
    rsx! {
        div {
            class: "character-table__wrapper",
            table {
                class: "character-table",
                thead {
                    tr {
                        for column in COLUMNS {
                            th { key: "{column.header()}", "{column.header()}" }
                        }
                    }
                }
                tbody {
                    for character in characters {
                        tr {
                            key: "{character.id}",
                            for column in COLUMNS {
                                td {
                                    key: "{column.header()}",
                                    {cell(column, &character, on_select)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cell(column: Column, character: &Character, on_select: EventHandler<i64>) -> Element {
    let value = column.value(character);
    match column {
        Column::Image => rsx! {
            img { class: "character-table__image", src: "{value}", alt: "character" }
        },
        Column::Name => {
            let id = character.id;
            rsx! {
                span {
                    class: "character-table__link",
                    onclick: move |_| on_select.call(id),
                    "{value}"
                }
            }
        }
        _ => rsx! { "{value}" },
    }
}
