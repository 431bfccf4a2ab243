//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are reached through a [`PageRef`]: a name plus an async factory that
//! resolves to a [`PageModule`]. The route guard awaits the factory, so a
//! page is only built once its route is visited, and a factory can fail
//! without taking the rest of the app down.
//!
//! TRADE-OFFS
//! ==========
//! The split is nominal: every page is compiled into the one WASM bundle
//! and each factory resolves immediately. The loading placeholder and the
//! ordered delivery still run on every navigation, so moving a page behind
//! a real code-split boundary only changes its factory.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::error::{LoadError, RenderError};

pub mod about;
pub mod error;
pub mod error_demo;
pub mod home;

/// Outcome of resolving a page factory.
pub type PageLoad = Result<PageModule, LoadError>;

pub type PageFuture = LocalBoxFuture<'static, PageLoad>;

/// A resolved page: its render entry point.
#[derive(Clone, Copy, Debug)]
pub struct PageModule {
    pub name: &'static str,
    pub render: fn() -> Result<AnyView, RenderError>,
}

/// Lazily loaded reference to a page.
#[derive(Clone, Copy, Debug)]
pub struct PageRef {
    pub name: &'static str,
    pub load: fn() -> PageFuture,
}

impl PageRef {
    pub fn load(&self) -> PageFuture {
        (self.load)()
    }
}

/// Factory future resolving immediately to `module`.
fn ready(module: PageModule) -> PageFuture {
    Box::pin(futures::future::ready(Ok(module)))
}
