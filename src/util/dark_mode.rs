//! Host colour-scheme detection and document theming.
//!
//! Reads the system `prefers-color-scheme` media query and mirrors the active
//! mode onto a `data-theme` attribute of the `<html>` element. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Both operations are best-effort: outside the `csr` feature detection
//! reports "no dark preference" and applying the mode is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;

/// Source of the host's colour-scheme preference.
pub trait SystemPreference {
    /// `true` when the host asks for dark presentation.
    fn prefers_dark(&self) -> bool;
}

/// The browser's `prefers-color-scheme` media query.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryPreference;

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

/// A fixed answer, for tests and non-browser builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedPreference(pub bool);

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(e) = el.set_attribute("data-theme", mode.as_str()) {
                log::warn!("failed to apply theme to document: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}
