//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_boundary::ErrorBoundary;
use crate::components::route_guard::{PageLoads, RouteGuard};
use crate::components::theme_provider::{ThemeProvider, provide_theme};
use crate::config::AppConfig;
use crate::error::RenderError;
use crate::routes;

/// Root application component.
///
/// Provides shared contexts, then nests the outer error boundary, the theme
/// root, and the router. Every route mounts its page through a
/// [`RouteGuard`]; unmatched paths get the 404 error page.
#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    provide_context(config.clone());
    provide_context(PageLoads::new());
    provide_theme(&config.theme_storage_key);

    let shell = move || -> Result<AnyView, RenderError> {
        Ok(view! {
            <ThemeProvider>
                <Router>
                    <Routes fallback=|| view! { <RouteGuard page=routes::NOT_FOUND/> }>
                        <Route
                            path=StaticSegment(routes::HOME.segment())
                            view=|| view! { <RouteGuard page=routes::HOME.page/> }
                        />
                        <Route
                            path=StaticSegment(routes::ABOUT.segment())
                            view=|| view! { <RouteGuard page=routes::ABOUT.page/> }
                        />
                        <Route
                            path=StaticSegment(routes::ERROR_DEMO.segment())
                            view=|| view! { <RouteGuard page=routes::ERROR_DEMO.page/> }
                        />
                    </Routes>
                </Router>
            </ThemeProvider>
        }
        .into_any())
    };

    view! {
        <Title text=config.title/>
        <ErrorBoundary label="App" render=shell/>
    }
}
