//! Bidding panel on the item detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the live countdown, current price and bid count, and owns the bid
//! modal. The countdown ticks once per second in the browser and stops when
//! the panel unmounts.

use leptos::prelude::*;

use super::bid_modal::BidModal;
use crate::net::types::Auction;
use crate::util::countdown::countdown_label;
use crate::util::format::{bid_count_label, format_naira};

#[component]
pub fn ItemBid(auction: Auction) -> impl IntoView {
    let modal_open = RwSignal::new(false);
    let countdown = RwSignal::new(countdown_label(&auction.end_date));

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let end_date = auction.end_date.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                countdown.set(countdown_label(&end_date));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let title = auction.title();
    let description = auction.items.as_ref().map(|item| item.description.clone()).unwrap_or_default();
    let price = auction.display_price();
    let bids = bid_count_label(auction.bid_count);
    let auction_id = auction.id.clone();
    let on_close = Callback::new(move |()| modal_open.set(false));

    view! {
        <div class="item-bid">
            <div class="item-bid__title">{title}</div>
            <div class="item-bid__countdown">{move || countdown.get()} " Remaining"</div>
            <div class="item-bid__price-row">
                <span class="item-bid__price">{format_naira(price)}</span>
                <span class="item-bid__bids">{bids}</span>
            </div>
            <div class="item-bid__description">{description}</div>
            <div class="item-bid__actions">
                <button class="btn btn--primary item-bid__bid" on:click=move |_| modal_open.set(true)>
                    "Bid Now"
                </button>
                <button class="btn item-bid__watch" aria-label="Add to watchlist">"♥"</button>
            </div>
            <Show when=move || modal_open.get()>
                <BidModal auction_id=auction_id.clone() current_price=price on_close=on_close/>
            </Show>
        </div>
    }
}
