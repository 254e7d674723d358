//! Sign-in form: posts credentials, stores the bearer token, and returns to
//! the home page.
//!
//! ERROR HANDLING
//! ==============
//! A rejected login is written to the console log only; the form keeps its
//! values and shows no message.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_input::AuthInput;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::session_cache::ProfileCache;
use crate::util::storage::KeyValueStore;
use crate::util::token::TokenStore;

/// Route the form navigates to after a successful login.
pub const AFTER_SIGN_IN_PATH: &str = "/";

/// Trim the identifier; passwords are sent verbatim.
fn login_payload(identifier: &str, password: &str) -> (String, String) {
    (identifier.trim().to_owned(), password.to_owned())
}

/// Store a freshly issued token and drop any profile mirrored for the
/// previous token.
pub fn begin_local_session<T: KeyValueStore, P: KeyValueStore>(
    tokens: &TokenStore<T>,
    profile: &ProfileCache<P>,
    token: &str,
) {
    tokens.set(token);
    profile.invalidate();
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identifier, secret) = login_payload(&email.get(), &password.get());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&identifier, &secret).await {
                    Ok(token) => {
                        begin_local_session(&TokenStore::browser(), &ProfileCache::browser(), &token.token);
                        auth.update(AuthState::login);
                        navigate(AFTER_SIGN_IN_PATH, NavigateOptions::default());
                    }
                    Err(e) => log::error!("login failed: {e}"),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, secret, auth, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-form">
                <form on:submit=on_submit>
                    <fieldset class="auth-form__fields">
                        <legend class="auth-form__heading">"Sign In"</legend>
                        <Show when=move || ui.get().is_mobile>
                            <div class="auth-form__switch">
                                <p>"Don't have an account? "</p>
                                <a href="/sign-up">"Sign Up"</a>
                            </div>
                        </Show>
                        <AuthInput id="email" title="Email" input_type="email" value=email required=true/>
                        <AuthInput id="password" title="Password" input_type="password" value=password required=true/>
                        <label class="auth-form__check">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| remember.set(event_target_checked(&ev))
                            />
                            "Remember Me"
                        </label>
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            "Login"
                        </button>
                    </fieldset>
                </form>
            </div>
            <Show when=move || !ui.get().is_mobile>
                <div class="auth-side">
                    <h2>"New here?"</h2>
                    <a class="btn" href="/sign-up">"Sign Up"</a>
                </div>
            </Show>
        </div>
    }
}
