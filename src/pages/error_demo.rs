//! Error boundary demonstration page.
//!
//! Two failure scopes: a widget wrapped in its own boundary with a custom
//! fallback, and a trigger that fails the whole page so the route guard's
//! boundary takes over.

#[cfg(test)]
#[path = "error_demo_test.rs"]
mod error_demo_test;

use leptos::prelude::*;

use super::{PageModule, PageRef, PageFuture, ready};
use crate::components::error_boundary::{BoundaryFallback, ErrorBoundary, use_error_reporter};
use crate::components::theme_toggle::ThemeToggle;
use crate::error::RenderError;

pub const PAGE: PageRef = PageRef { name: "ErrorDemoPage", load };

fn load() -> PageFuture {
    ready(PageModule { name: PAGE.name, render })
}

fn render() -> Result<AnyView, RenderError> {
    Ok(view! { <ErrorDemoPage/> }.into_any())
}

pub const DEMO_ERROR_MESSAGE: &str = "This is a demo error to show the error boundary in action!";
pub const WORKING_TEXT: &str = "\u{2705} Component working correctly";

const FEATURES: [&str; 7] = [
    "Catches render failures in the component tree",
    "Displays user-friendly error messages",
    "Provides error details for debugging",
    "Offers reset functionality",
    "Custom fallback components",
    "Error logging and reporting",
    "Theme integration",
];

/// The demo widget: fails on request, otherwise reports healthy.
pub fn demo_widget(should_fail: bool) -> Result<&'static str, RenderError> {
    if should_fail {
        return Err(RenderError::component(DEMO_ERROR_MESSAGE));
    }
    Ok(WORKING_TEXT)
}

pub fn break_button_label(broken: bool) -> &'static str {
    if broken { "Fix Component" } else { "Break Component" }
}

#[component]
pub fn ErrorDemoPage() -> impl IntoView {
    let broken = RwSignal::new(false);
    let report = use_error_reporter();

    let local_fallback = BoundaryFallback::new(move |error, _info, reset| {
        let message = error.to_string();
        view! {
            <div class="demo-box demo-box--warning">
                <h3 class="heading heading--h6 text-warning">"Component Error Caught"</h3>
                <p class="text-body2">{message}</p>
                <button
                    class="btn btn--outlined btn--small"
                    on:click=move |_| {
                        broken.set(false);
                        reset.run(());
                    }
                >
                    "Reset Component"
                </button>
            </div>
        }
        .into_any()
    });

    let trigger_global = move |_| {
        if let Err(error) = demo_widget(true) {
            report(error);
        }
    };

    view! {
        <div class="page">
            <header class="app-bar">
                <span class="app-bar__title">"Error Boundary Demo"</span>
                <ThemeToggle/>
            </header>
            <main class="container">
                <h1 class="heading heading--h3">"Error Boundary Demo"</h1>
                <p>
                    "This page demonstrates the error boundary functionality. You can trigger "
                    "errors at different levels to see how they are handled gracefully."
                </p>

                <section class="paper">
                    <h2 class="heading heading--h5">"Component-Level Error Boundary"</h2>
                    <p class="text-secondary">
                        "This error is caught by a local error boundary around just this component."
                    </p>
                    <ErrorBoundary
                        label="DemoWidget"
                        fallback=local_fallback
                        render=move || {
                            demo_widget(broken.get())
                                .map(|text| view! { <div class="demo-box"><p class="text-success">{text}</p></div> }.into_any())
                        }
                    />
                    <button
                        class="btn btn--contained btn--warning"
                        on:click=move |_| broken.update(|b| *b = !*b)
                    >
                        {move || break_button_label(broken.get())}
                    </button>
                </section>

                <section class="paper">
                    <h2 class="heading heading--h5">"Global Error Boundary"</h2>
                    <p class="text-secondary">
                        "This error will be caught by the page's error boundary (affects the whole page)."
                    </p>
                    <div class="demo-box">
                        <p class="text-success">{WORKING_TEXT}</p>
                    </div>
                    <button class="btn btn--contained btn--error" on:click=trigger_global>
                        "Trigger Global Error"
                    </button>
                </section>

                <section class="paper">
                    <h2 class="heading heading--h5">"Error Boundary Features"</h2>
                    <ul>
                        {FEATURES.iter().map(|f| view! { <li>{format!("\u{2705} {f}")}</li> }).collect::<Vec<_>>()}
                    </ul>
                </section>
            </main>
        </div>
    }
}
