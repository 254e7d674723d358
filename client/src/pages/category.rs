//! Category results: listings filtered by the search store.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use leptos::prelude::*;

use super::listing::{ListingState, load_page};
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::category_filter::CategoryFilter;
use crate::components::pagination::Pagination;
use crate::components::product_card::ProductCard;
use crate::config::LISTING_PAGE_SIZE;
use crate::state::search::SearchState;
use crate::util::breadcrumbs::segment_label;
use crate::util::listing::filter_listings;

/// Heading for the current filters.
fn results_heading(search: &SearchState) -> String {
    let terms = search.search_terms.trim();
    let category = search.category.trim();
    match (terms.is_empty(), category.is_empty()) {
        (true, true) => "All Categories".to_owned(),
        (true, false) => segment_label(category),
        (false, true) => format!("Results for \"{terms}\""),
        (false, false) => format!("Results for \"{terms}\" in {}", segment_label(category)),
    }
}

#[component]
pub fn CategoryResultPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let listing = RwSignal::new(ListingState::default());
    load_page(listing, 1, LISTING_PAGE_SIZE);

    let on_page_change = Callback::new(move |page: u32| load_page(listing, page, LISTING_PAGE_SIZE));
    let results = move || filter_listings(&listing.get().items, &search.get());

    view! {
        <div class="formatter category-page">
            <Breadcrumbs/>
            <div class="category-page__layout">
                <CategoryFilter/>
                <div class="category-page__main">
                    <h1 class="category-page__title">{move || results_heading(&search.get())}</h1>
                    <Show
                        when=move || !listing.get().loading
                        fallback=|| view! { <p>"Loading auctions..."</p> }
                    >
                        <Show
                            when=move || !results().is_empty()
                            fallback=|| view! { <p class="category-page__empty">"No items match your search."</p> }
                        >
                            <div class="listing-grid">
                                {move || {
                                    results()
                                        .into_iter()
                                        .map(|auction| view! { <ProductCard auction=auction/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
            <Pagination
                total_pages=Signal::derive(move || listing.get().total_pages)
                current_page=Signal::derive(move || listing.get().page)
                on_page_change=on_page_change
            />
        </div>
    }
}
