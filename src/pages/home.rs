//! Landing page showing the active theme and sample controls.

use leptos::prelude::*;

use super::{PageModule, PageRef, PageFuture, ready};
use crate::components::app_bar::AppBar;
use crate::components::theme_provider::use_theme;
use crate::config::AppConfig;
use crate::error::RenderError;
use crate::state::theme::ThemeState;

pub const PAGE: PageRef = PageRef { name: "HomePage", load };

fn load() -> PageFuture {
    ready(PageModule { name: PAGE.name, render })
}

fn render() -> Result<AnyView, RenderError> {
    Ok(view! { <HomePage/> }.into_any())
}

const FEATURES: [&str; 5] = [
    "Persistent theme preference (localStorage)",
    "System color scheme detection",
    "Smooth transitions between light and dark modes",
    "CSS variables for every theme token",
    "Error boundaries around every route",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let title = use_context::<AppConfig>().unwrap_or_default().title;
    let theme = use_theme();
    let mode = move || theme.with(ThemeState::read).as_str();

    view! {
        <div class="page">
            <AppBar title=title.clone()/>
            <main class="container">
                <section class="paper paper--raised">
                    <h1 class="heading heading--h2">{format!("Welcome to {title}")}</h1>
                    <p class="text-secondary">"Current theme mode: " <strong>{mode}</strong></p>
                    <p>
                        "This template ships light/dark mode support. The theme saves your "
                        "preference to localStorage and respects your system's color scheme."
                    </p>
                    <div class="stack stack--row">
                        <button class="btn btn--contained btn--primary">"Primary Button"</button>
                        <button class="btn btn--outlined btn--secondary">"Secondary Button"</button>
                        <button class="btn btn--text">"Text Button"</button>
                    </div>
                </section>
                <section class="paper">
                    <h2 class="heading heading--h5">"Theme Features"</h2>
                    <ul class="text-secondary">
                        {FEATURES.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
                    </ul>
                </section>
            </main>
        </div>
    }
}
