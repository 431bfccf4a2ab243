//! Generic error screen; the router's catch-all renders it as a 404.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use leptos::prelude::*;

use super::{PageModule, PageRef, PageFuture, ready};
use crate::error::RenderError;

pub const NOT_FOUND_CODE: u16 = 404;
pub const NOT_FOUND_MESSAGE: &str = "Page Not Found";
pub const HINT_TEXT: &str = "The page you are looking for does not exist or has been moved.";

pub const PAGE: PageRef = PageRef { name: "ErrorPage", load };

fn load() -> PageFuture {
    ready(PageModule { name: PAGE.name, render })
}

fn render() -> Result<AnyView, RenderError> {
    Ok(view! { <ErrorPage/> }.into_any())
}

/// Code and message shown, with unset parameters falling back to the 404 text.
pub fn error_summary(error_code: Option<u16>, error_message: Option<String>) -> (u16, String) {
    (
        error_code.unwrap_or(NOT_FOUND_CODE),
        error_message.unwrap_or_else(|| NOT_FOUND_MESSAGE.to_owned()),
    )
}

#[component]
pub fn ErrorPage(
    #[prop(optional)] error_code: Option<u16>,
    #[prop(optional, into)] error_message: Option<String>,
) -> impl IntoView {
    let (code, message) = error_summary(error_code, error_message);

    view! {
        <main class="container container--centered">
            <div class="paper paper--raised error-page">
                <h1 class="heading heading--h1 text-error">{code}</h1>
                <h2 class="heading heading--h5">{message}</h2>
                <p class="text-secondary">{HINT_TEXT}</p>
                <button class="btn btn--contained btn--primary" on:click=move |_| go_back()>
                    "Go Back"
                </button>
            </div>
        </main>
    }
}

/// Step one entry back in the browser history.
fn go_back() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.history() {
            Ok(history) => {
                if let Err(err) = history.back() {
                    log::warn!("history.back failed: {err:?}");
                }
            }
            Err(err) => log::warn!("history unavailable: {err:?}"),
        }
    }
}
