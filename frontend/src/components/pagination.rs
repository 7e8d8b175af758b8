use crate::state::table::{TableState, PAGE_SIZE_OPTIONS};
use crate::utils::pagination::Page;
use leptos::*;

fn summary(range: Option<(usize, usize)>, total: usize) -> String {
    match range {
        Some((first, last)) => format!("{}-{} of {}", first, last, total),
        None => "0 of 0".to_string(),
    }
}

/// Prev/next buttons plus the items-per-page selector for a [`TableState`].
#[component]
pub fn Pagination<T: Clone + 'static>(table: TableState, page: Signal<Page<T>>) -> impl IntoView {
    let has_prev = Signal::derive(move || page.with(Page::has_prev));
    let has_next = Signal::derive(move || page.with(Page::has_next));
    let page_size = table.page_size();

    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 py-3 text-sm text-fg-muted">
            <span>{move || page.with(|p| summary(p.range(), p.total_items))}</span>
            <div class="flex items-center gap-2">
                <label class="flex items-center gap-1">
                    "Rows per page"
                    <select
                        class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-1"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                table.set_page_size(size);
                            }
                        }
                    >
                        {PAGE_SIZE_OPTIONS
                            .iter()
                            .map(|size| {
                                let size = *size;
                                view! {
                                    <option value=size.to_string() selected=move || page_size.get() == size>
                                        {size}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button
                    type="button"
                    class="px-3 py-1 rounded-md border border-border disabled:opacity-50"
                    disabled=move || !has_prev.get()
                    on:click=move |_| table.prev_page(page.with_untracked(|p| p.total_pages))
                >
                    "Prev"
                </button>
                <span>{move || page.with(|p| format!("Page {} of {}", p.page, p.total_pages.max(1)))}</span>
                <button
                    type="button"
                    class="px-3 py-1 rounded-md border border-border disabled:opacity-50"
                    disabled=move || !has_next.get()
                    on:click=move |_| table.next_page(page.with_untracked(|p| p.total_pages))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::summary;

    #[test]
    fn summary_shows_visible_range() {
        assert_eq!(summary(Some((21, 25)), 25), "21-25 of 25");
        assert_eq!(summary(None, 0), "0 of 0");
    }
}
