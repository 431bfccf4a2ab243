use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::components::error_boundary::FALLBACK_TITLE;
use crate::pages::{about, home};

fn owned<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.set();
    f()
}

fn loaded_name(outcome: PageLoad) -> Result<&'static str, LoadError> {
    outcome.map(|module| module.name)
}

// =============================================================================
// PageLoads
// =============================================================================

#[test]
fn later_request_waits_for_earlier_one() {
    owned(|| {
        let loads = PageLoads::new();
        let first = loads.request(home::PAGE);
        let second = loads.request(about::PAGE);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        spawner
            .spawn_local(async move { log.borrow_mut().push(loaded_name(second.outcome().await)) })
            .unwrap();
        pool.run_until_stalled();
        assert!(seen.borrow().is_empty(), "second page delivered before the first");

        let log = Rc::clone(&seen);
        spawner
            .spawn_local(async move { log.borrow_mut().push(loaded_name(first.outcome().await)) })
            .unwrap();
        pool.run_until_stalled();
        let expected: [Result<&str, LoadError>; 2] = [Ok("HomePage"), Ok("AboutPage")];
        assert_eq!(*seen.borrow(), expected);
    });
}

#[test]
fn abandoned_request_resolves_to_load_error_and_releases_later_ones() {
    owned(|| {
        let loads = PageLoads::new();
        let first = loads.request(home::PAGE);
        let second = loads.request(about::PAGE);

        loads.abandon(first.ticket().unwrap());

        let err = block_on(first.outcome()).unwrap_err();
        assert_eq!(err.module, "HomePage");
        assert_eq!(loaded_name(block_on(second.outcome())), Ok("AboutPage"));
    });
}

#[test]
fn disposed_loader_resolves_to_load_error() {
    let owner = Owner::new();
    let loads = owner.with(PageLoads::new);
    owner.cleanup();

    let request = loads.request(about::PAGE);
    assert!(request.ticket().is_none());
    let err = block_on(request.outcome()).unwrap_err();
    assert_eq!(err.module, "AboutPage");
}

// =============================================================================
// outcome_view
// =============================================================================

#[test]
fn load_error_becomes_render_error() {
    owned(|| {
        let load = LoadError { module: "AboutPage", reason: "chunk missing".into() };
        let Err(err) = outcome_view(Err(load.clone())) else {
            panic!("expected a render error");
        };
        assert_eq!(err, RenderError::Load(load));
    });
}

#[test]
fn load_error_shows_route_fallback() {
    let html = owned(|| {
        let load = LoadError { module: "AboutPage", reason: "chunk missing".into() };
        view! { <ErrorBoundary label="AboutPage" render=move || outcome_view(Err(load.clone()))/> }.to_html()
    });
    assert!(html.contains(FALLBACK_TITLE), "{html}");
    assert!(html.contains("page module `AboutPage` failed to load: chunk missing"), "{html}");
}

#[test]
fn resolved_module_renders_page() {
    let html = owned(|| {
        let module = block_on(about::PAGE.load()).unwrap();
        view! { <ErrorBoundary label="AboutPage" render=move || outcome_view(Ok(module))/> }.to_html()
    });
    assert!(html.contains("About"), "{html}");
    assert!(!html.contains(FALLBACK_TITLE));
}

// =============================================================================
// RouteGuard
// =============================================================================

#[test]
fn guard_shows_loading_placeholder_first() {
    // Resources spawn their loaders; none of them is driven here.
    let _ = any_spawner::Executor::init_futures_executor();

    let html = owned(|| {
        provide_context(PageLoads::new());
        view! { <RouteGuard page=about::PAGE/> }.to_html()
    });
    assert!(html.contains("Loading..."), "{html}");
    assert!(!html.contains("About"), "{html}");
}

#[test]
fn guard_takes_its_ticket_on_mount() {
    let _ = any_spawner::Executor::init_futures_executor();

    owned(|| {
        let loads = PageLoads::new();
        provide_context(loads);
        let _view = view! { <RouteGuard page=home::PAGE/> };

        assert_eq!(loads.0.with_value(LoadSequencer::pending), 1);
    });
}
