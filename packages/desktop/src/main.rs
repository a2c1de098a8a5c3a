use api::PageNumber;
use dioxus::prelude::*;
use views::{CharacterDetail, CharacterList, PageNotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/?:page")]
    CharacterList { page: PageNumber },
    #[route("/character/:id")]
    CharacterDetail { id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Reads <config_dir>/character-explorer/characters.toml when present
    let api = use_context_provider(ui::make_api);
    use_hook(|| tracing::info!("Character service: {}", api.base_url()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
