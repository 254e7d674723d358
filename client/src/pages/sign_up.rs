//! Registration form. On success the backend emails a verification code and
//! the user is sent to sign in.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_input::AuthInput;
use crate::net::types::RegisterRequest;
use crate::state::ui::UiState;

/// Route the form navigates to after registering.
pub const AFTER_SIGN_UP_PATH: &str = "/sign-in";

/// Raw form values.
#[derive(Clone, Debug, Default)]
struct SignUpForm {
    username: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    email: String,
    password: String,
}

impl SignUpForm {
    /// Registration payload with text fields trimmed and the password as typed.
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            phone_number: self.phone_number.trim().to_owned(),
        }
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let accepted = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = SignUpForm {
            username: username.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone_number: phone_number.get(),
            email: email.get(),
            password: password.get(),
        }
        .to_request();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(()) => navigate(AFTER_SIGN_UP_PATH, NavigateOptions::default()),
                    Err(e) => log::error!("register failed: {e}"),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-form">
                <form on:submit=on_submit>
                    <fieldset class="auth-form__fields">
                        <legend class="auth-form__heading">"Sign Up"</legend>
                        <Show when=move || ui.get().is_mobile>
                            <div class="auth-form__switch">
                                <p>"Already have an account? "</p>
                                <a href="/sign-in">"Sign In"</a>
                            </div>
                        </Show>
                        <AuthInput id="username" title="Username" value=username required=true/>
                        <AuthInput id="first_name" title="First Name" value=first_name required=true/>
                        <AuthInput id="last_name" title="Last Name" value=last_name required=true/>
                        <AuthInput id="phone_number" title="Phone" input_type="tel" value=phone_number required=true/>
                        <AuthInput id="email" title="Email" input_type="email" value=email required=true/>
                        <AuthInput id="password" title="Password" input_type="password" value=password required=true/>
                        <label class="auth-form__check">
                            <input
                                type="checkbox"
                                required=true
                                prop:checked=move || accepted.get()
                                on:change=move |ev| accepted.set(event_target_checked(&ev))
                            />
                            "I accept terms and conditions"
                        </label>
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </fieldset>
                </form>
            </div>
            <Show when=move || !ui.get().is_mobile>
                <div class="auth-side">
                    <h2>"Already registered?"</h2>
                    <a class="btn" href="/sign-in">"Sign In"</a>
                </div>
            </Show>
        </div>
    }
}
