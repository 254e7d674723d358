//! Side panel for narrowing listings by category.
//!
//! Starts from the featured categories and swaps in the backend's category
//! list once it loads.

#[cfg(test)]
#[path = "category_filter_test.rs"]
mod category_filter_test;

use leptos::prelude::*;

use super::category_card::FEATURED_CATEGORIES;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Category;
use crate::state::search::SearchState;

/// A selectable option: value stored in `SearchState::category`, and label.
type FilterOption = (String, String);

fn featured_options() -> Vec<FilterOption> {
    FEATURED_CATEGORIES
        .iter()
        .map(|c| (c.slug.to_owned(), c.label.to_owned()))
        .collect()
}

/// Options for backend categories; keeps the featured list when empty.
#[cfg(any(test, feature = "hydrate"))]
fn options_from_categories(categories: Vec<Category>) -> Vec<FilterOption> {
    if categories.is_empty() {
        return featured_options();
    }
    categories
        .into_iter()
        .map(|c| (c.name.trim().to_lowercase(), c.name))
        .collect()
}

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let options = RwSignal::new(featured_options());
    let selected = move || search.get().category;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_categories().await {
            Ok(categories) => options.set(options_from_categories(categories)),
            Err(e) => log::warn!("fetch categories failed: {e}"),
        }
    });

    view! {
        <aside class="category-filter">
            <h2 class="category-filter__title">"Categories"</h2>
            <button
                class="category-filter__option"
                class:category-filter__option--active=move || selected().is_empty()
                on:click=move |_| search.update(|s| s.set_category(""))
            >
                "All"
            </button>
            <For
                each=move || options.get()
                key=|(value, _)| value.clone()
                children=move |(value, label)| {
                    let active_value = value.clone();
                    view! {
                        <button
                            class="category-filter__option"
                            class:category-filter__option--active=move || selected() == active_value
                            on:click=move |_| search.update(|s| s.set_category(value.clone()))
                        >
                            {label}
                        </button>
                    }
                }
            />
        </aside>
    }
}
