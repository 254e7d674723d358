//! Modal for entering and submitting a bid.

#[cfg(test)]
#[path = "bid_modal_test.rs"]
mod bid_modal_test;

use leptos::prelude::*;

use crate::net::types::CreateBidRequest;
use crate::util::format::format_naira;

/// Parse a bid amount and require it to exceed the current price.
fn validate_bid_amount(input: &str, current_price: f64) -> Result<f64, &'static str> {
    let cleaned: String = input.chars().filter(|c| !matches!(c, ',' | ' ' | '₦')).collect();
    let amount: f64 = cleaned.parse().map_err(|_| "Enter a valid amount.")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Enter a valid amount.");
    }
    if amount <= current_price {
        return Err("Bid must be higher than the current price.");
    }
    Ok(amount)
}

/// Send `request`, closing the modal on success. `busy` is cleared once the
/// attempt settles, including when no request can be made.
fn dispatch_bid(request: CreateBidRequest, busy: RwSignal<bool>, on_close: Callback<()>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::place_bid(&request).await {
            Ok(bid) => {
                log::info!("bid {} placed on auction {}", bid.id, bid.auction_id);
                on_close.run(());
            }
            Err(e) => log::error!("place bid failed: {e}"),
        }
        busy.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, on_close);
        busy.set(false);
    }
}

#[component]
pub fn BidModal(auction_id: String, current_price: f64, on_close: Callback<()>) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let auction_id = StoredValue::new(auction_id);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_bid_amount(&amount.get(), current_price) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        dispatch_bid(
            CreateBidRequest {
                auction_id: auction_id.get_value(),
                amount: value,
            },
            busy,
            on_close,
        );
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--bid" on:click=move |ev| ev.stop_propagation()>
                <h2>"Place a Bid"</h2>
                <p class="dialog__hint">"Current price: " {format_naira(current_price)}</p>
                <form class="dialog__form" on:submit=on_submit>
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        placeholder="Your bid"
                        required=true
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <Show when=move || !info.get().is_empty()>
                        <p class="dialog__message">{move || info.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Bid"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
