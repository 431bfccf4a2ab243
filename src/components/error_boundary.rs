//! Error boundary component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a fallible render closure. While the boundary is clean the closure's
//! view is shown; once it, or anything rendered beneath it, yields an `Err`
//! (or a descendant reports one via [`BoundaryReporter`]) the boundary shows
//! a fallback until reset. The transitions themselves live in
//! [`crate::state::boundary`].
//!
//! DESIGN
//! ======
//! Failures are caught through Leptos's own error hook: the guarded subtree
//! is mounted inside `leptos::error::ErrorBoundary`, whose fallback moves
//! the state machine into `Failed`. A clean render never writes state.
//!
//! Each boundary owns a child reactive owner. Its [`DiagnosticInfo`] and
//! reporter are provided there, so only its own descendants see them and
//! sibling boundaries never extend each other's component stack.

#[cfg(test)]
#[path = "error_boundary_test.rs"]
mod error_boundary_test;

use std::sync::Arc;

use leptos::error::{ErrorBoundary as CaughtErrors, Errors};
use leptos::prelude::*;

use crate::error::RenderError;
use crate::state::boundary::{CapturedFailure, DiagnosticInfo, ErrorBoundaryState, ErrorObserver, details_toggle_label};

pub const FALLBACK_TITLE: &str = "Oops! Something went wrong";
const DEFAULT_LABEL: &str = "ErrorBoundary";

/// Caller-supplied fallback: `(failure, diagnostic, reset) -> view`.
#[derive(Clone)]
pub struct BoundaryFallback(Arc<dyn Fn(&RenderError, &DiagnosticInfo, Callback<()>) -> AnyView + Send + Sync>);

impl BoundaryFallback {
    pub fn new(render: impl Fn(&RenderError, &DiagnosticInfo, Callback<()>) -> AnyView + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    fn render(&self, failure: &CapturedFailure, reset: Callback<()>) -> AnyView {
        (self.0)(&failure.error, &failure.info, reset)
    }
}

/// Handle to the nearest enclosing boundary, provided through context.
///
/// Descendants that detect a failure outside their own render closure use
/// it to fail the boundary, like an uncaught error bubbling up.
#[derive(Clone, Copy)]
pub struct BoundaryReporter {
    state: RwSignal<ErrorBoundaryState>,
    info: StoredValue<DiagnosticInfo>,
    observer: StoredValue<Option<ErrorObserver>>,
}

impl BoundaryReporter {
    fn new(info: DiagnosticInfo, observer: Option<ErrorObserver>) -> Self {
        Self {
            state: RwSignal::new(ErrorBoundaryState::default()),
            info: StoredValue::new(info),
            observer: StoredValue::new(observer),
        }
    }

    /// Fail the boundary with `error`.
    pub fn report(&self, error: RenderError) {
        let info = self.info.get_value();
        let observer = self.observer.get_value();
        self.state.update(|s| {
            s.handle_failure(error, info, observer.as_ref());
        });
    }

    /// Return the boundary to its clean state, re-rendering its children.
    pub fn reset(&self) {
        self.state.update(ErrorBoundaryState::reset);
    }

    /// Current failure, without subscribing.
    pub fn failure(&self) -> Option<CapturedFailure> {
        self.state.with_untracked(|s| s.failure().cloned())
    }
}

/// Reporter for the nearest boundary in context.
///
/// Resolve it while building a component; event handlers run without an
/// owner and cannot look the boundary up themselves.
pub fn use_error_reporter() -> impl Fn(RenderError) + Clone + Copy + Send + Sync + 'static {
    let reporter = use_context::<BoundaryReporter>();
    move |error| match reporter {
        Some(reporter) => reporter.report(error),
        None => log::error!("render failure outside any error boundary: {error}"),
    }
}

/// Render guard for a fallible subtree.
#[component]
pub fn ErrorBoundary<F>(
    /// Name recorded in the diagnostic component stack.
    #[prop(optional)]
    label: Option<&'static str>,
    /// Custom fallback; the built-in view is used when absent.
    #[prop(optional)]
    fallback: Option<BoundaryFallback>,
    /// Called once each time the boundary fails.
    #[prop(optional)]
    on_error: Option<ErrorObserver>,
    /// Renders the guarded subtree.
    render: F,
) -> impl IntoView
where
    F: Fn() -> Result<AnyView, RenderError> + Send + Sync + 'static,
{
    let label = label.unwrap_or(DEFAULT_LABEL);
    let owner = Owner::new();

    let (reporter, failure) = owner.with(|| {
        let info = use_context::<DiagnosticInfo>()
            .map_or_else(|| DiagnosticInfo::root(label), |parent| parent.child(label));
        provide_context(info.clone());

        let reporter = BoundaryReporter::new(info, on_error);
        provide_context(reporter);

        let state = reporter.state;
        (reporter, Memo::new(move |_| state.with(|s| s.failure().cloned())))
    });
    let render = Arc::new(render);

    move || owner.with(|| guarded_view(failure.get(), reporter, fallback.clone(), Arc::clone(&render)))
}

/// The fallback while `failure` is set, otherwise the subtree under a hook
/// that fails `reporter` on the first `Err` rendered anywhere inside it.
fn guarded_view<F>(
    failure: Option<CapturedFailure>,
    reporter: BoundaryReporter,
    fallback: Option<BoundaryFallback>,
    render: Arc<F>,
) -> AnyView
where
    F: Fn() -> Result<AnyView, RenderError> + Send + Sync + 'static,
{
    if let Some(failure) = failure {
        return fallback_view(failure, reporter, fallback);
    }

    let on_caught = move |errors: ArcRwSignal<Errors>| {
        if let Some(error) = errors.with_untracked(|errors| errors.iter().next().map(|(_, e)| caught_error(e))) {
            reporter.report(error);
        }
        match reporter.failure() {
            Some(failure) => fallback_view(failure, reporter, fallback.clone()),
            None => ().into_any(),
        }
    };

    view! {
        <CaughtErrors fallback=on_caught>
            {move || render()}
        </CaughtErrors>
    }
    .into_any()
}

/// Recover the typed error behind a thrown one.
fn caught_error(error: &leptos::error::Error) -> RenderError {
    error
        .downcast_ref::<RenderError>()
        .cloned()
        .unwrap_or_else(|| RenderError::component(error.to_string()))
}

fn fallback_view(failure: CapturedFailure, reporter: BoundaryReporter, fallback: Option<BoundaryFallback>) -> AnyView {
    let reset = Callback::new(move |()| reporter.reset());
    match fallback {
        Some(custom) => custom.render(&failure, reset),
        None => view! { <DefaultFallback failure state=reporter.state reset/> }.into_any(),
    }
}

/// Built-in fallback: summary, retry, and a collapsible technical trace.
#[component]
fn DefaultFallback(failure: CapturedFailure, state: RwSignal<ErrorBoundaryState>, reset: Callback<()>) -> impl IntoView {
    let message = failure.message();
    let details = failure.details();
    let show_details = move || state.with(ErrorBoundaryState::show_details);

    view! {
        <div class="error-boundary" role="alert">
            <div class="error-boundary__alert">
                <h2 class="error-boundary__title">{FALLBACK_TITLE}</h2>
                <p class="error-boundary__message">{message}</p>
                <div class="error-boundary__actions">
                    <button class="btn btn--contained btn--error" on:click=move |_| reset.run(())>
                        "Try Again"
                    </button>
                    <button
                        class="btn btn--outlined btn--error"
                        on:click=move |_| {
                            state.update(|s| {
                                s.toggle_details();
                            });
                        }
                    >
                        {move || details_toggle_label(show_details())}
                    </button>
                </div>
                <Show when=show_details>
                    <pre class="error-boundary__details">{details.clone()}</pre>
                </Show>
            </div>
        </div>
    }
}
