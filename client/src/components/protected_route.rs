//! Route guard for pages that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the auth flag store. Because `AuthState::login` never sets the flag,
//! guarded routes currently always redirect to sign-in.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

/// Path unauthenticated visitors are sent to.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Render `children` only when the auth flag is set, else redirect.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || auth.get().is_authenticated
            fallback=|| view! { <Redirect path=SIGN_IN_PATH/> }
        >
            {children()}
        </Show>
    }
}
