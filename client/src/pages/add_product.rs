//! Seller form for listing a new item.
//!
//! DESIGN
//! ======
//! Field capture is synchronous into signals; `build_item_request` turns the
//! raw strings into the wire body. The seller id comes from the mirrored
//! profile, so the page needs a successful profile load before it can submit.

#[cfg(test)]
#[path = "add_product_test.rs"]
mod add_product_test;

use leptos::prelude::*;

use super::dashboard::load_profile;
use crate::components::auth_input::AuthInput;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::net::types::{CreateItemRequest, ImageLink, User};

/// Assemble a `CreateItemRequest` from raw form values.
///
/// # Errors
///
/// Returns a short reason when the seller is unknown or the price is not a
/// positive number.
pub fn build_item_request(
    sellers_id: &str,
    name: &str,
    description: &str,
    price_input: &str,
    image_link: &str,
) -> Result<CreateItemRequest, &'static str> {
    let sellers_id = sellers_id.trim();
    if sellers_id.is_empty() {
        return Err("profile not loaded");
    }
    let starting_price: f64 = price_input
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| "starting price must be a number")?;
    if !starting_price.is_finite() || starting_price <= 0.0 {
        return Err("starting price must be greater than zero");
    }

    Ok(CreateItemRequest {
        sellers_id: sellers_id.to_owned(),
        name: name.trim().to_owned(),
        description: description.trim().to_owned(),
        starting_price,
        image_link: ImageLink {
            link: image_link.trim().to_owned(),
            public_id: String::new(),
        },
    })
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    let user = RwSignal::new(None::<User>);
    let loading = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let created = RwSignal::new(None::<String>);

    load_profile(user, loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let sellers_id = user.get_untracked().map(|u| u.id).unwrap_or_default();
        let request = match build_item_request(
            &sellers_id,
            &name.get_untracked(),
            &description.get_untracked(),
            &price.get_untracked(),
            &image.get_untracked(),
        ) {
            Ok(request) => request,
            Err(reason) => {
                #[cfg(feature = "hydrate")]
                log::error!("add product rejected: {reason}");
                #[cfg(not(feature = "hydrate"))]
                let _ = reason;
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_item(&request).await {
                    Ok(item) => {
                        created.set(Some(item.name));
                        name.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
                        image.set(String::new());
                    }
                    Err(e) => log::error!("create item failed: {e}"),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, submitting, created);
    };

    view! {
        <div class="add-product-page">
            <Breadcrumbs/>
            <h1>"Add Product"</h1>
            <form class="add-product-page__form" on:submit=on_submit>
                <AuthInput id="product-name" title="Product name" value=name required=true/>
                <label for="product-description">"Description"</label>
                <textarea
                    id="product-description"
                    required
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <AuthInput id="product-price" title="Starting price (₦)" input_type="number" value=price required=true/>
                <AuthInput id="product-image" title="Image link" input_type="url" value=image required=true/>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get() || loading.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Add Product" }}
                </button>
            </form>
            <Show when=move || created.get().is_some()>
                <p class="add-product-page__created">
                    {move || format!("Listed \"{}\".", created.get().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
