//! Icon button flipping between light and dark mode.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::state::theme::{ThemeMode, ThemeState};

/// Sun while dark (switch to light), moon while light.
pub fn toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "\u{2600}",
        ThemeMode::Light => "\u{263E}",
    }
}

pub fn toggle_title(mode: ThemeMode) -> String {
    format!("Switch to {} mode", mode.toggled())
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let mode = move || theme.with(ThemeState::read);

    let on_toggle = move |_| {
        theme.update(|t| {
            t.toggle();
        });
    };

    view! {
        <button
            class="icon-button theme-toggle"
            aria-label="toggle theme"
            title=move || toggle_title(mode())
            on:click=on_toggle
        >
            {move || toggle_icon(mode())}
        </button>
    }
}
