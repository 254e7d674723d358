//! Category tiles for the home page grid.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::search::SearchState;

/// A featured category: store value, display label, icon asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedCategory {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Categories shown on the home grid and in the filter panel.
pub const FEATURED_CATEGORIES: [FeaturedCategory; 6] = [
    FeaturedCategory { slug: "headphones", label: "Headphones", icon: "/assets/svg/headphone.svg" },
    FeaturedCategory { slug: "phones", label: "Phones", icon: "/assets/svg/phones.svg" },
    FeaturedCategory { slug: "computers", label: "Computers", icon: "/assets/svg/computers.svg" },
    FeaturedCategory { slug: "camera", label: "Camera", icon: "/assets/svg/camera.svg" },
    FeaturedCategory { slug: "gaming", label: "Gaming", icon: "/assets/svg/gaming.svg" },
    FeaturedCategory { slug: "smartwatch", label: "Smart Watch", icon: "/assets/svg/smartWatch.svg" },
];

/// Clickable tile that selects its category and opens the results page.
#[component]
pub fn CategoryCard(category: FeaturedCategory) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let navigate = use_navigate();

    let on_click = move |_| {
        search.update(|s| s.set_category(category.slug));
        navigate("/category", NavigateOptions::default());
    };

    view! {
        <button class="category-card" on:click=on_click>
            <img class="category-card__icon" src=category.icon alt=""/>
            <span class="category-card__label">{category.label}</span>
        </button>
    }
}
