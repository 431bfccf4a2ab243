//! Static about page.

use leptos::prelude::*;

use super::{PageModule, PageRef, PageFuture, ready};
use crate::error::RenderError;

pub const PAGE: PageRef = PageRef { name: "AboutPage", load };

fn load() -> PageFuture {
    ready(PageModule { name: PAGE.name, render })
}

fn render() -> Result<AnyView, RenderError> {
    Ok(view! { <AboutPage/> }.into_any())
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="container">
            <h1 class="heading heading--h1">"About"</h1>
            <p>
                "This is the About page of the Leptos starter. Pages are loaded lazily "
                "behind a route guard and styled from a shared light/dark theme."
            </p>
        </main>
    }
}
