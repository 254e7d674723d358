//! Seller/buyer dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Reads the profile through the session
//! mirror (network only on a miss) and owns the logout flow, which is the
//! mirror's invalidation trigger.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::protected_route::SIGN_IN_PATH;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::session_cache::ProfileCache;
use crate::util::storage::KeyValueStore;
use crate::util::token::TokenStore;

/// Drop every piece of client-held session state: token, profile mirror and
/// auth flag.
pub fn end_local_session<T: KeyValueStore, P: KeyValueStore>(
    tokens: &TokenStore<T>,
    profile: &ProfileCache<P>,
    auth: &mut AuthState,
) {
    tokens.clear();
    profile.invalidate();
    auth.logout();
}

/// Load the profile via the session mirror into `user`.
pub(crate) fn load_profile(user: RwSignal<Option<User>>, loading: RwSignal<bool>) {
    loading.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let cache = ProfileCache::browser();
        match cache.get_or_fetch(crate::net::api::fetch_profile).await {
            Ok(profile) => user.set(Some(profile)),
            Err(e) => log::error!("fetch profile failed: {e}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        user.set(ProfileCache::browser().cached());
        loading.set(false);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let user = RwSignal::new(None::<User>);
    let loading = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    load_profile(user, loading);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        let finish = move || {
            auth.update(|a| end_local_session(&TokenStore::browser(), &ProfileCache::browser(), a));
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::error!("logout request failed: {e}");
            }
            finish();
        });
        #[cfg(not(feature = "hydrate"))]
        finish();
    };

    let greeting = move || {
        user.get()
            .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.display_name()))
    };

    view! {
        <div class="dashboard-page">
            <aside class="dashboard-page__menu" class:dashboard-page__menu--open=move || menu_open.get()>
                <button class="dashboard-page__menu-toggle" on:click=move |_| menu_open.update(|o| *o = !*o)>
                    "☰"
                </button>
                <ul>
                    <li><a href="/dashboard/profile">"Profile"</a></li>
                    <li><a href="/dashboard/add-product">"Add Product"</a></li>
                    <li>
                        <button class="btn dashboard-page__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </li>
                </ul>
            </aside>
            <div class="dashboard-page__panel">
                <Breadcrumbs/>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <h1 class="dashboard-page__greeting">{greeting}</h1>
                    {move || {
                        user.get()
                            .map(|u| {
                                view! {
                                    <p class="dashboard-page__email">{u.email}</p>
                                    <p class="dashboard-page__role">{u.role.unwrap_or_default()}</p>
                                }
                            })
                    }}
                </Show>
            </div>
        </div>
    }
}
