//! "Ongoing Auctions" listing with sort control and pagination.

use leptos::prelude::*;

use super::listing::{ListingState, load_page};
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::category_filter::CategoryFilter;
use crate::components::pagination::Pagination;
use crate::components::product_card::ProductCard;
use crate::config::LISTING_PAGE_SIZE;
use crate::util::listing::{SortOrder, sort_listings};

#[component]
pub fn ViewAllPage() -> impl IntoView {
    let listing = RwSignal::new(ListingState::default());
    let sort = RwSignal::new(SortOrder::default());
    let sort_menu_open = RwSignal::new(false);
    let filter_open = RwSignal::new(false);

    load_page(listing, 1, LISTING_PAGE_SIZE);

    let on_page_change = Callback::new(move |page: u32| load_page(listing, page, LISTING_PAGE_SIZE));
    let total_pages = Signal::derive(move || listing.get().total_pages);
    let current_page = Signal::derive(move || listing.get().page);

    let sorted = move || {
        let mut items = listing.get().items;
        sort_listings(&mut items, sort.get());
        items
    };

    view! {
        <div class="formatter view-all-page">
            <Breadcrumbs/>
            <div class="view-all-page__layout">
                <div class="view-all-page__filter">
                    <CategoryFilter/>
                </div>
                <div class="view-all-page__main">
                    <div class="view-all-page__header">
                        <h1 class="view-all-page__title">"Ongoing Auctions"</h1>
                        <button class="btn view-all-page__filter-toggle" on:click=move |_| filter_open.update(|o| *o = !*o)>
                            "Filter"
                        </button>
                        <div class="view-all-page__sort">
                            <span class="view-all-page__sort-label">"Sorted by: "</span>
                            <button
                                class="view-all-page__sort-current"
                                on:click=move |_| sort_menu_open.update(|o| *o = !*o)
                            >
                                {move || sort.get().label()}
                                " ▾"
                            </button>
                            <Show when=move || sort_menu_open.get()>
                                <ul class="view-all-page__sort-menu">
                                    {SortOrder::ALL
                                        .into_iter()
                                        .map(|order| {
                                            view! {
                                                <li
                                                    on:click=move |_| {
                                                        sort.set(order);
                                                        sort_menu_open.set(false);
                                                    }
                                                >
                                                    {order.label()}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </Show>
                        </div>
                    </div>
                    <Show when=move || filter_open.get()>
                        <div class="view-all-page__filter-modal" on:click=move |_| filter_open.set(false)>
                            <CategoryFilter/>
                        </div>
                    </Show>
                    <Show
                        when=move || !listing.get().loading
                        fallback=|| view! { <p>"Loading auctions..."</p> }
                    >
                        <div class="listing-grid">
                            {move || {
                                sorted()
                                    .into_iter()
                                    .map(|auction| view! { <ProductCard auction=auction/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </div>
            </div>
            <Pagination total_pages=total_pages current_page=current_page on_page_change=on_page_change/>
        </div>
    }
}
