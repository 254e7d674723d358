//! Profile details under the dashboard.

use leptos::prelude::*;

use super::dashboard::load_profile;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::net::types::User;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let user = RwSignal::new(None::<User>);
    let loading = RwSignal::new(false);

    load_profile(user, loading);

    view! {
        <div class="profile-page">
            <Breadcrumbs/>
            <h1>"Profile"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                {move || match user.get() {
                    Some(u) => view! {
                        <dl class="profile-page__fields">
                            <dt>"Name"</dt>
                            <dd>{u.display_name()}</dd>
                            <dt>"Email"</dt>
                            <dd>{u.email}</dd>
                            <dt>"Phone"</dt>
                            <dd>{u.phone_number}</dd>
                        </dl>
                    }
                    .into_any(),
                    None => view! { <p class="profile-page__empty">"No profile loaded."</p> }.into_any(),
                }}
            </Show>
        </div>
    }
}
