//! Suspense guard around a lazily loaded page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page mounts through `RouteGuard`: a `LocalResource` loads the
//! page module while `<Suspense>` shows the loading placeholder, then the
//! page renders inside an `ErrorBoundary` so a load failure or a page render
//! failure stays local to the route. Nothing is retried automatically; the
//! boundary's reset re-renders the already resolved outcome.
//!
//! Load completions are released through the shared [`PageLoads`] sequencer
//! in request order. A guard takes its ticket when it mounts, and its
//! resource resolves only once the sequencer hands the outcome over.
//! Unmounting abandons the ticket, so a late completion is dropped.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::Shared;
use leptos::prelude::*;

use crate::components::error_boundary::ErrorBoundary;
use crate::components::loading_fallback::LoadingFallback;
use crate::error::{LoadError, RenderError};
use crate::pages::{PageLoad, PageRef};
use crate::state::loader::{Delivery, LoadSequencer, Ticket, resolve_in_order};

/// App-wide page load sequencer, provided through context.
#[derive(Clone, Copy)]
pub struct PageLoads(StoredValue<LoadSequencer<PageLoad>>);

impl PageLoads {
    pub fn new() -> Self {
        Self(StoredValue::new(LoadSequencer::new()))
    }

    /// Take the next ticket for `page`.
    pub fn request(&self, page: PageRef) -> PageRequest {
        let (tx, rx) = oneshot::channel();
        let ticket = self.0.try_update_value(|seq| {
            seq.begin(move |outcome| {
                if tx.send(outcome).is_err() {
                    log::debug!("page load finished after its guard was disposed");
                }
            })
        });
        if ticket.is_none() {
            log::warn!("page loader unavailable, `{}` not loaded", page.name);
        }
        PageRequest { loads: *self, page, ticket, delivered: rx.shared() }
    }

    fn complete(&self, ticket: Ticket, outcome: PageLoad) -> Vec<Delivery<PageLoad>> {
        self.0.try_update_value(|seq| seq.complete(ticket, outcome)).unwrap_or_default()
    }

    /// Drop `ticket`, delivering whatever it was holding back.
    pub fn abandon(&self, ticket: Ticket) {
        let released = self.0.try_update_value(|seq| seq.abandon(ticket)).unwrap_or_default();
        for delivery in released {
            delivery.deliver();
        }
    }
}

impl Default for PageLoads {
    fn default() -> Self {
        Self::new()
    }
}

/// One page load, in request order.
#[derive(Clone)]
pub struct PageRequest {
    loads: PageLoads,
    page: PageRef,
    ticket: Option<Ticket>,
    delivered: Shared<oneshot::Receiver<PageLoad>>,
}

impl PageRequest {
    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    /// Run the page factory and wait for the sequencer to release its
    /// outcome. Resolves to a [`LoadError`] when the ticket was abandoned
    /// or never issued.
    pub async fn outcome(self) -> PageLoad {
        let Self { loads, page, ticket, delivered } = self;
        if let Some(ticket) = ticket {
            resolve_in_order(ticket, page.load(), move |t, outcome| loads.complete(t, outcome)).await;
        }
        delivered.await.unwrap_or_else(|_| {
            Err(LoadError { module: page.name, reason: "load was abandoned before it was delivered".into() })
        })
    }
}

/// The resolved page, or the load failure to raise in the boundary.
pub(crate) fn outcome_view(outcome: PageLoad) -> Result<AnyView, RenderError> {
    (outcome?.render)()
}

#[component]
pub fn RouteGuard(page: PageRef) -> impl IntoView {
    let loads = expect_context::<PageLoads>();
    let request = loads.request(page);

    if let Some(ticket) = request.ticket() {
        on_cleanup(move || loads.abandon(ticket));
    }

    let module = LocalResource::new(move || request.clone().outcome());

    let render = move || -> Result<AnyView, RenderError> {
        Ok(view! {
            <Suspense fallback=move || view! { <LoadingFallback/> }>
                {move || module.get().map(outcome_view)}
            </Suspense>
        }
        .into_any())
    };

    view! { <ErrorBoundary label=page.name render=render/> }
}
