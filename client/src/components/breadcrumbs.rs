//! Breadcrumb trail for the current route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::breadcrumbs::breadcrumbs;

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();
    let trail = move || breadcrumbs(&location.pathname.get());

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            {move || {
                let crumbs = trail();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        if i == last {
                            view! { <span class="breadcrumbs__current">{crumb.label}</span> }.into_any()
                        } else {
                            view! {
                                <a class="breadcrumbs__link" href=crumb.href>{crumb.label}</a>
                                <span class="breadcrumbs__sep">"/"</span>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
