mod character_list;
pub use character_list::CharacterList;

mod character_detail;
pub use character_detail::CharacterDetail;

mod not_found;
pub use not_found::PageNotFound;
