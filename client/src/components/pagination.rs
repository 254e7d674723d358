//! Page selector with Previous/Next controls.

use leptos::prelude::*;

use crate::util::pagination::{PageEntry, is_selectable, page_window};

/// Page selector for `total_pages` pages.
///
/// `on_page_change` only ever receives pages inside `[1, total_pages]`.
#[component]
pub fn Pagination(
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] current_page: Signal<u32>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let select = move |page: i64| {
        if is_selectable(page, total_pages.get_untracked()) {
            if let Ok(page) = u32::try_from(page) {
                on_page_change.run(page);
            }
        }
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="pagination__step"
                disabled=move || current_page.get() <= 1
                on:click=move |_| select(i64::from(current_page.get_untracked()) - 1)
            >
                "← Previous"
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .into_iter()
                    .map(|entry| match entry {
                        PageEntry::Page(page) => {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--active=page == current
                                    on:click=move |_| select(i64::from(page))
                                >
                                    {page}
                                </button>
                            }
                                .into_any()
                        }
                        PageEntry::Ellipsis => {
                            view! { <span class="pagination__ellipsis">{entry.to_string()}</span> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="pagination__step"
                disabled=move || current_page.get() >= total_pages.get()
                on:click=move |_| select(i64::from(current_page.get_untracked()) + 1)
            >
                "Next →"
            </button>
        </nav>
    }
}
