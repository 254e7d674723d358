//! Item detail page for `/category/:slug`, where the slug is the auction id.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::item_bid::ItemBid;
use crate::net::types::Auction;
use crate::util::format::format_naira;

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let auction = RwSignal::new(None::<Auction>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(slug) = params.read().get("slug") else {
            loading.set(false);
            return;
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_auction(&slug).await {
                Ok(found) => auction.set(Some(found)),
                Err(e) => log::error!("fetch auction {slug} failed: {e}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = slug;
            loading.set(false);
        }
    });

    view! {
        <div class="formatter detail-page">
            <Breadcrumbs/>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading item..."</p> }
            >
                {move || match auction.get() {
                    Some(found) => view! { <AuctionDetail auction=found/> }.into_any(),
                    None => view! { <p class="detail-page__missing">"This item could not be found."</p> }.into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
fn AuctionDetail(auction: Auction) -> impl IntoView {
    let image = auction.image_url().unwrap_or_default();
    let title = auction.title();
    let starting = format_naira(auction.start_price);
    let buy_now = auction.buy_now_price.filter(|_| auction.buy_now).map(format_naira);

    view! {
        <div class="detail-page__top">
            <div class="item-image">
                <img class="item-image__main" src=image alt=title/>
            </div>
            <ItemBid auction=auction/>
        </div>
        <section class="item-detail">
            <h2>"Details"</h2>
            <dl class="item-detail__facts">
                <dt>"Starting price"</dt>
                <dd>{starting}</dd>
                {buy_now.map(|price| view! { <dt>"Buy now"</dt> <dd>{price}</dd> })}
            </dl>
        </section>
    }
}
