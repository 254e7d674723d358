//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    add_product::AddProductPage, category::CategoryResultPage, dashboard::DashboardPage,
    detail::DetailPage, home::HomePage, profile::ProfilePage, sign_in::SignInPage,
    sign_up::SignUpPage, view_all::ViewAllPage,
};
use crate::state::{auth::AuthState, search::SearchState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, search and UI stores and sets up client-side routing.
/// Dashboard routes sit behind `ProtectedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(SearchState::default()));
    provide_context(RwSignal::new(UiState::detect()));

    view! {
        <Stylesheet id="leptos" href="/pkg/auctora.css"/>
        <Title text="Auctora"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("list") view=ViewAllPage/>
                    <Route path=StaticSegment("Ongoing-Auction") view=ViewAllPage/>
                    <Route path=StaticSegment("category") view=CategoryResultPage/>
                    <Route path=(StaticSegment("category"), ParamSegment("slug")) view=DetailPage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("profile"))
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("add-product"))
                        view=|| view! { <ProtectedRoute><AddProductPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
