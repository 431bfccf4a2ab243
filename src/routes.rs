//! Route entries: URL paths to lazily loaded pages.
//!
//! DESIGN
//! ======
//! Matching belongs to `leptos_router`. This module only names the entries
//! that `App` declares as `<Route>`s, so the router and the navigation bar
//! share one set of paths. Unmatched paths fall through to [`NOT_FOUND`],
//! which `<Routes fallback>` mounts.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::pages::{self, PageRef};

/// One routed page.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    /// Absolute path, `/` for the root.
    pub path: &'static str,
    pub page: PageRef,
}

impl RouteEntry {
    /// The path as a single `StaticSegment`.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

pub const HOME: RouteEntry = RouteEntry { path: "/", page: pages::home::PAGE };
pub const ABOUT: RouteEntry = RouteEntry { path: "/about", page: pages::about::PAGE };
pub const ERROR_DEMO: RouteEntry = RouteEntry { path: "/error-demo", page: pages::error_demo::PAGE };

/// Declaration order.
pub const ROUTES: [RouteEntry; 3] = [HOME, ABOUT, ERROR_DEMO];

/// Catch-all: the error page with its 404 defaults.
pub const NOT_FOUND: PageRef = pages::error::PAGE;
