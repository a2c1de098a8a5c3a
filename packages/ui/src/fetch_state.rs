//! Three-state projection of a fetch resource.

use std::fmt::Display;

use dioxus::prelude::*;

/// What a view shows for a keyed fetch: the request is in flight, it failed,
/// or it produced data.
///
/// A resource that is restarted (new key or manual refresh) goes back to
/// [`FetchState::Loading`] until the new request settles.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    /// Stringified error, shown inline.
    Error(String),
    Loaded(T),
}

impl<T: Clone> FetchState<T> {
    /// Project a resource's scheduling state and last value.
    pub fn from_parts<E: Display>(state: UseResourceState, value: Option<&Result<T, E>>) -> Self {
        match (state, value) {
            (UseResourceState::Pending, _) | (_, None) => FetchState::Loading,
            (_, Some(Ok(data))) => FetchState::Loaded(data.clone()),
            (_, Some(Err(e))) => FetchState::Error(e.to_string()),
        }
    }

    /// Read a `use_resource` handle. Subscribes the calling component to it.
    pub fn from_resource<E: Display + 'static>(resource: &Resource<Result<T, E>>) -> Self
    where
        T: 'static,
    {
        let state = resource.state().cloned();
        let value = resource.read();
        Self::from_parts(state, Option::as_ref(&*value))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}
