//! Labelled form input used by the auth and profile forms.

use leptos::prelude::*;

#[component]
pub fn AuthInput(
    id: &'static str,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("auth-input {class}")>
            {title.map(|t| view! { <label class="auth-input__label" for=id>{t}</label> })}
            <input
                class="auth-input__field"
                id=id
                name=id
                type=input_type
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
