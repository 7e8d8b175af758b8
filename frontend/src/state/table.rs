use crate::utils::{
    pagination::{clamp_page, paginate, Page},
    search::{filter_items, Searchable},
};
use leptos::*;

/// Search box plus client-side pagination over a fetched list.
#[derive(Clone, Copy)]
pub struct TableState {
    page: RwSignal<usize>,
    page_size: RwSignal<usize>,
    query: RwSignal<String>,
}

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: create_rw_signal(1),
            page_size: create_rw_signal(page_size.max(1)),
            query: create_rw_signal(String::new()),
        }
    }

    pub fn with_default_page_size() -> Self {
        Self::new(crate::config::runtime().page_size())
    }

    pub fn page(&self) -> Signal<usize> {
        self.page.into()
    }

    pub fn page_size(&self) -> Signal<usize> {
        self.page_size.into()
    }

    pub fn query(&self) -> Signal<String> {
        self.query.into()
    }

    pub fn set_page(&self, page: usize) {
        self.page.set(page.max(1));
    }

    /// Steps from the page actually shown, which is lower than the stored one
    /// after a reload shrank the list to `total_pages`.
    pub fn next_page(&self, total_pages: usize) {
        self.page
            .update(|page| *page = clamp_page(*page + 1, total_pages));
    }

    pub fn prev_page(&self, total_pages: usize) {
        self.page.update(|page| {
            *page = clamp_page(*page, total_pages).saturating_sub(1).max(1);
        });
    }

    /// A new page size always starts over at page 1.
    pub fn set_page_size(&self, page_size: usize) {
        self.page_size.set(page_size.max(1));
        self.page.set(1);
    }

    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.page.set(1);
    }

    /// Filtered rows before pagination.
    pub fn filtered<T>(&self, items: Signal<Vec<T>>) -> Signal<Vec<T>>
    where
        T: Searchable + Clone + 'static,
    {
        let query = self.query;
        Signal::derive(move || items.with(|items| query.with(|q| filter_items(items, q))))
    }

    /// The page currently on screen.
    pub fn visible<T>(&self, items: Signal<Vec<T>>) -> Signal<Page<T>>
    where
        T: Searchable + Clone + 'static,
    {
        let filtered = self.filtered(items);
        let page = self.page;
        let page_size = self.page_size;
        Signal::derive(move || filtered.with(|rows| paginate(rows, page.get(), page_size.get())))
    }
}
