//! Placeholder shown while a page module is loading.

use leptos::prelude::*;

#[component]
pub fn LoadingFallback() -> impl IntoView {
    view! {
        <div class="loading-fallback" role="status" aria-live="polite">
            <span class="loading-fallback__spinner" aria-hidden="true"></span>
            <p class="loading-fallback__text">"Loading..."</p>
        </div>
    }
}
