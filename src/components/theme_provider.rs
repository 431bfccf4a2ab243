//! Theme context: one `ThemeState` per app, applied to the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_theme` runs once in `App`, outside every error boundary, so a
//! boundary reset never re-runs theme initialization. `ThemeProvider`
//! resolves the current mode into CSS custom properties on the root element.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::theme::resolve;
use crate::util::dark_mode::{self, MediaQueryPreference};
use crate::util::storage::LocalStorage;

/// Load the theme state from browser storage and share it through context.
pub fn provide_theme(storage_key: &str) -> RwSignal<ThemeState> {
    let mut state = ThemeState::load(Box::new(LocalStorage), storage_key, &MediaQueryPreference);
    dark_mode::apply(state.read());
    state.subscribe(dark_mode::apply);

    let theme = RwSignal::new(state);
    provide_context(theme);
    theme
}

/// The theme state provided by [`provide_theme`].
pub fn use_theme() -> RwSignal<ThemeState> {
    expect_context::<RwSignal<ThemeState>>()
}

/// Root element carrying the resolved theme tokens.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = use_theme();
    let mode = move || theme.with(ThemeState::read);
    let style = move || resolve(mode()).css_variables();

    view! {
        <div class="app-root" data-theme=move || mode().as_str() style=style>
            {children()}
        </div>
    }
}
