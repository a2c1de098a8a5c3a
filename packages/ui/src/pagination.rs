use api::PageNumber;
use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaArrowRight};
use crate::Icon;

/// Position within the listing as reported by the last successful fetch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pagination {
    pub page: PageNumber,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: PageNumber, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    pub fn prev_disabled(&self) -> bool {
        self.page == PageNumber::FIRST
    }

    pub fn next_disabled(&self) -> bool {
        self.page.get() == self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Prev / Next buttons around a "Page n of m" label.
#[component]
pub fn PaginationControls(pagination: Pagination, on_navigate: EventHandler<PageNumber>) -> Element {
    let page = pagination.page;

    rsx! {
        div {
            class: "pagination",
            button {
                class: "pagination__button",
                disabled: pagination.prev_disabled(),
                onclick: move |_| on_navigate.call(page.prev()),
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                " Prev"
            }
            span { class: "pagination__info", "{pagination.label()}" }
            button {
                class: "pagination__button",
                disabled: pagination.next_disabled(),
                onclick: move |_| on_navigate.call(page.next()),
                "Next "
                Icon { icon: FaArrowRight, width: 12, height: 12 }
            }
        }
    }
}
