//! Top bar with page title, navigation links, and the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::theme_toggle::ThemeToggle;
use crate::routes;

#[component]
pub fn AppBar(title: String) -> impl IntoView {
    view! {
        <header class="app-bar">
            <span class="app-bar__title">{title}</span>
            <nav class="app-bar__nav">
                <A href=routes::HOME.path>"Home"</A>
                <A href=routes::ABOUT.path>"About"</A>
                <A href=routes::ERROR_DEMO.path>"Error Demo"</A>
            </nav>
            <ThemeToggle/>
        </header>
    }
}
