//! Top navigation bar with the marketplace search box.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::search::SearchState;

#[component]
pub fn Nav() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate("/category", NavigateOptions::default());
    };

    view! {
        <header class="nav">
            <a class="nav__logo" href="/">
                <img src="/assets/icons/Auctora_logo.png" alt="Auctora"/>
            </a>
            <form class="nav__search" on:submit=on_submit>
                <input
                    class="nav__search-input"
                    type="search"
                    placeholder="Search for items"
                    prop:value=move || search.get().search_terms
                    on:input=move |ev| search.update(|s| s.set_search_terms(event_target_value(&ev)))
                />
                <button class="nav__search-button" type="submit" aria-label="Search">
                    <img src="/assets/icons/search_glass.png" alt=""/>
                </button>
            </form>
            <nav class="nav__links">
                <a href="/Ongoing-Auction">"Ongoing Auctions"</a>
                <a href="/dashboard">"Dashboard"</a>
                <a class="nav__sign-in" href="/sign-in">"Sign In"</a>
            </nav>
        </header>
    }
}
