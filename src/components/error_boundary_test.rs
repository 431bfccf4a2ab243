use std::sync::Mutex;

use leptos::tachys::view::RenderHtml;

use super::*;
use crate::error::LoadError;

/// Render `view` to HTML under a fresh reactive owner.
fn render_html(view: impl FnOnce() -> AnyView) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

fn subtree(view: AnyView) -> Result<AnyView, RenderError> {
    Ok(view)
}

fn healthy(text: &'static str) -> Result<AnyView, RenderError> {
    subtree(view! { <p>{text}</p> }.into_any())
}

fn failing(message: &'static str) -> Result<AnyView, RenderError> {
    Err(RenderError::component(message))
}

fn recording_observer() -> (ErrorObserver, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let observer = ErrorObserver::new(move |error, info| {
        sink.lock().unwrap().push(format!("{error}|{}", info.component_stack().join(">")));
    });
    (observer, calls)
}

// =============================================================================
// use_error_reporter
// =============================================================================

#[test]
fn report_without_enclosing_boundary_does_not_panic() {
    let report = use_error_reporter();
    report(RenderError::component("orphan"));
}

#[test]
fn fallback_title_is_not_empty() {
    assert!(!FALLBACK_TITLE.trim().is_empty());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn clean_subtree_renders_children() {
    let html = render_html(|| {
        view! { <ErrorBoundary label="Widget" render=|| healthy("all good")/> }.into_any()
    });
    assert!(html.contains("all good"));
    assert!(!html.contains(FALLBACK_TITLE));
}

#[test]
fn err_from_nested_descendant_shows_fallback() {
    let (observer, calls) = recording_observer();
    let html = render_html(move || {
        view! {
            <ErrorBoundary
                label="Root"
                on_error=observer
                render=|| {
                    subtree(
                        view! {
                            <div class="healthy">
                                {move || Err::<String, _>(RenderError::component("deep child failed"))}
                            </div>
                        }
                            .into_any(),
                    )
                }
            />
        }
        .into_any()
    });

    assert!(html.contains(FALLBACK_TITLE), "{html}");
    assert!(html.contains("deep child failed"), "{html}");
    assert!(!html.contains("healthy"), "{html}");
    assert_eq!(*calls.lock().unwrap(), ["deep child failed|Root"]);
}

#[test]
fn err_returned_by_render_shows_fallback() {
    let html = render_html(|| {
        view! { <ErrorBoundary label="Widget" render=|| failing("top level failed")/> }.into_any()
    });
    assert!(html.contains(FALLBACK_TITLE));
    assert!(html.contains("top level failed"));
}

#[test]
fn failing_subtree_is_contained() {
    let (outer, outer_calls) = recording_observer();
    let html = render_html(move || {
        view! {
            <ErrorBoundary
                label="Root"
                on_error=outer
                render=|| {
                    subtree(
                        view! {
                            <p class="sibling">"still here"</p>
                            <ErrorBoundary label="Widget" render=|| failing("widget failed")/>
                        }
                            .into_any(),
                    )
                }
            />
        }
        .into_any()
    });

    assert!(html.contains("still here"), "{html}");
    assert!(html.contains("widget failed"), "{html}");
    assert!(outer_calls.lock().unwrap().is_empty());
}

#[test]
fn sibling_boundaries_do_not_share_component_stack() {
    let (observer, calls) = recording_observer();
    let html = render_html(move || {
        view! {
            <ErrorBoundary
                label="Root"
                render=move || {
                    let observer = observer.clone();
                    subtree(
                        view! {
                            <ErrorBoundary label="First" render=|| healthy("first ok")/>
                            <ErrorBoundary
                                label="Second"
                                on_error=observer
                                render=|| failing("second failed")
                            />
                        }
                            .into_any(),
                    )
                }
            />
        }
        .into_any()
    });

    assert!(html.contains("first ok"), "{html}");
    assert_eq!(*calls.lock().unwrap(), ["second failed|Root>Second"]);
}

#[test]
fn custom_fallback_receives_error_and_stack() {
    let fallback = BoundaryFallback::new(|error, info, _reset| {
        let text = format!("custom: {error} at {}", info.component_stack().join("/"));
        view! { <p class="custom">{text}</p> }.into_any()
    });
    let html = render_html(move || {
        view! {
            <ErrorBoundary label="Outer" render=move || {
                let fallback = fallback.clone();
                subtree(
                    view! {
                        <ErrorBoundary label="Inner" fallback=fallback render=|| failing("bad input")/>
                    }
                        .into_any(),
                )
            }/>
        }
        .into_any()
    });

    assert!(html.contains("custom: bad input at Outer/Inner"), "{html}");
    assert!(!html.contains(FALLBACK_TITLE));
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn reset_renders_children_again() {
    let owner = Owner::new();
    owner.set();

    let broken = RwSignal::new(true);
    let reporter = BoundaryReporter::new(DiagnosticInfo::root("Widget"), None);
    let render = Arc::new(move || -> Result<AnyView, RenderError> {
        if broken.get_untracked() {
            Err(RenderError::component("widget broke"))
        } else {
            Ok(view! { <p>"widget healthy"</p> }.into_any())
        }
    });

    let html = guarded_view(reporter.failure(), reporter, None, Arc::clone(&render)).to_html();
    assert!(html.contains("widget broke"), "{html}");
    assert!(reporter.failure().is_some());

    // A subtree that would now succeed stays hidden until reset.
    broken.set(false);
    let html = guarded_view(reporter.failure(), reporter, None, Arc::clone(&render)).to_html();
    assert!(html.contains(FALLBACK_TITLE), "{html}");

    reporter.reset();
    assert!(reporter.failure().is_none());
    let html = guarded_view(reporter.failure(), reporter, None, render).to_html();
    assert!(html.contains("widget healthy"), "{html}");
    assert!(!html.contains(FALLBACK_TITLE));
}

#[test]
fn descendant_report_fails_the_nearest_boundary() {
    let owner = Owner::new();
    owner.set();

    let captured = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&captured);
    let html = view! {
        <ErrorBoundary label="Widget" render=move || {
            *slot.lock().unwrap() = use_context::<BoundaryReporter>();
            healthy("widget")
        }/>
    }
    .to_html();
    assert!(html.contains("widget"));

    let reporter = captured.lock().unwrap().take().unwrap();
    assert!(reporter.failure().is_none());
    reporter.report(RenderError::component("reported later"));
    let failure = reporter.failure().unwrap();
    assert_eq!(failure.message(), "reported later");
    assert_eq!(failure.info.component_stack(), ["Widget"]);
}

// =============================================================================
// caught_error
// =============================================================================

#[test]
fn caught_error_keeps_render_error_variant() {
    let load = RenderError::from(LoadError { module: "AboutPage", reason: "offline".into() });
    let thrown = leptos::error::Error::from(load.clone());
    assert_eq!(caught_error(&thrown), load);
}

#[test]
fn caught_error_wraps_foreign_errors() {
    let thrown = leptos::error::Error::from(std::fmt::Error);
    assert_eq!(caught_error(&thrown), RenderError::component(std::fmt::Error.to_string()));
}
