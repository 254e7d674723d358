//! Landing page: category grid and a preview of ongoing auctions.

use leptos::prelude::*;

use super::listing::{ListingState, load_page};
use crate::components::category_card::{CategoryCard, FEATURED_CATEGORIES};
use crate::components::product_card::ProductCard;
use crate::config::LISTING_PAGE_SIZE;

#[component]
pub fn HomePage() -> impl IntoView {
    let listing = RwSignal::new(ListingState::default());
    load_page(listing, 1, LISTING_PAGE_SIZE);

    view! {
        <div class="formatter home-page">
            <section class="home-page__categories">
                <h1 class="home-page__heading">"Browse Categories"</h1>
                <div class="home-page__category-grid">
                    {FEATURED_CATEGORIES
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
            <section class="home-page__auctions">
                <div class="home-page__auctions-header">
                    <h2 class="home-page__heading">"Ongoing Auctions"</h2>
                    <a class="home-page__view-all" href="/list">"View all"</a>
                </div>
                <Show
                    when=move || !listing.get().loading
                    fallback=|| view! { <p>"Loading auctions..."</p> }
                >
                    <div class="listing-grid">
                        {move || {
                            listing
                                .get()
                                .items
                                .into_iter()
                                .map(|auction| view! { <ProductCard auction=auction/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
        </div>
    }
}
