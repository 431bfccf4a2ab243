//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types are plain Rust with no reactive or browser dependencies.
//! Components wrap them in `RwSignal`/`StoredValue` and provide them through
//! context, so every transition is testable without a DOM.

pub mod boundary;
pub mod loader;
pub mod theme;
