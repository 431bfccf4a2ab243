//! Error types shared across the application.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in this crate surfaces a raw error to the user. Storage and
//! configuration errors degrade to defaults with a logged warning; render and
//! load errors are converted into an error boundary fallback view.

/// Failure talking to the client-side preference storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The host has no usable storage (private mode, SSR, disabled by policy).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// Reading the key failed inside the storage backend.
    #[error("failed to read preference `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// Writing the key failed inside the storage backend (quota, policy).
    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// The value could not be JSON-encoded.
    #[error("failed to encode preference `{key}`: {reason}")]
    Encode { key: String, reason: String },
}

/// A lazily loaded page module could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("page module `{module}` failed to load: {reason}")]
pub struct LoadError {
    pub module: &'static str,
    pub reason: String,
}

/// A failure raised while rendering a subtree.
///
/// The message of `Component` may be empty; fallback views substitute a
/// generic message in that case.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A component refused to render.
    #[error("{0}")]
    Component(String),
    /// The page module behind a route guard failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl RenderError {
    /// Build a component failure from any message.
    pub fn component(message: impl Into<String>) -> Self {
        Self::Component(message.into())
    }
}

/// A build-time configuration value could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level: {0}")]
    LogLevel(String),
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}
