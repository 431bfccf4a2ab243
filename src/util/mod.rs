//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, media queries, the
//! document element) from state and component logic.

pub mod dark_mode;
pub mod storage;
