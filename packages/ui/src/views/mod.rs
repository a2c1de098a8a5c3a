mod character_list;
pub use character_list::{use_character_page, CharacterListView, ListLayout};

mod character_detail;
pub use character_detail::CharacterDetailView;
