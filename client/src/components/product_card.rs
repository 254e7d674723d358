//! Listing card for an auction in grids and result lists.

use leptos::prelude::*;

use crate::net::types::Auction;
use crate::util::countdown::countdown_label;
use crate::util::format::{bid_count_label, format_naira};

#[component]
pub fn ProductCard(auction: Auction) -> impl IntoView {
    let href = format!("/category/{}", auction.id);
    let title = auction.title();
    let price = format_naira(auction.display_price());
    let bids = bid_count_label(auction.bid_count);
    let countdown = countdown_label(&auction.end_date);
    let image = auction.image_url().unwrap_or_default();

    view! {
        <a class="product-card" href=href>
            <img class="product-card__image" src=image alt=title.clone()/>
            <span class="product-card__title">{title}</span>
            <span class="product-card__price">{price}</span>
            <span class="product-card__bids">{bids}</span>
            <span class="product-card__countdown">{countdown}</span>
        </a>
    }
}
