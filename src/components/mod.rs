//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and failure surfaces while reading shared
//! state (theme, boundary reporters, page loads) from Leptos context.

pub mod app_bar;
pub mod error_boundary;
pub mod loading_fallback;
pub mod route_guard;
pub mod theme_provider;
pub mod theme_toggle;
