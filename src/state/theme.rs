//! Theme mode state backed by a persisted preference.
//!
//! DESIGN
//! ======
//! `ThemeState` is an explicit container rather than a global: the app root
//! builds it once, wraps it in an `RwSignal`, and shares it through context.
//! Every read/write goes through this type, so the first-load policy runs
//! exactly once per application lifetime.
//!
//! Initialization policy, in order:
//! 1. a stored record that decodes to a [`ThemeMode`];
//! 2. the host colour-scheme preference (`dark` iff the host prefers dark);
//! 3. `light`.
//!
//! The computed default is not written back; the record is created on the
//! first explicit write.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::dark_mode::SystemPreference;
use crate::util::storage::{PersistedCell, PreferenceStore};

/// Presentation mode. Serialized as `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Mode implied by the host preference when nothing is stored.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned by [`ThemeState::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(ThemeMode) + Send + Sync>;

/// Shared theme mode with persistence and change notification.
pub struct ThemeState {
    mode: ThemeMode,
    cell: PersistedCell<ThemeMode>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemeState {
    /// Resolve the initial mode from `store` under `key`, falling back to
    /// `system` when the record is absent or malformed.
    pub fn load(store: Box<dyn PreferenceStore>, key: &str, system: &dyn SystemPreference) -> Self {
        let cell = PersistedCell::new(key, store);
        let mode = if let Some(stored) = cell.get() {
            log::debug!("theme mode restored from `{key}`: {stored}");
            stored
        } else {
            let mode = ThemeMode::from_system(system.prefers_dark());
            log::debug!("no stored theme mode, using system default: {mode}");
            mode
        };
        Self { mode, cell, subscribers: Vec::new(), next_subscription: 0 }
    }

    pub fn read(&self) -> ThemeMode {
        self.mode
    }

    /// Set the mode, notify subscribers, then persist.
    ///
    /// Subscribers only hear about actual changes; the record is rewritten on
    /// every call. A failed write is logged and the in-memory mode still
    /// changes.
    pub fn write(&mut self, mode: ThemeMode) {
        let changed = self.mode != mode;
        self.mode = mode;
        if changed {
            for (_, subscriber) in &self.subscribers {
                subscriber(mode);
            }
        }
        if let Err(e) = self.cell.set(&mode) {
            log::warn!("theme mode not persisted: {e}");
        }
    }

    /// Flip between light and dark. Returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.write(next);
        next
    }

    /// Register `observer` for every subsequent mode change.
    pub fn subscribe(&mut self, observer: impl Fn(ThemeMode) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn storage_key(&self) -> &str {
        self.cell.key()
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .field("key", &self.cell.key())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
