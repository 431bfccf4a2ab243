//! Error boundary state machine.
//!
//! DESIGN
//! ======
//! Two phases: `Clean` renders children, `Failed` renders a fallback. The
//! only way back to `Clean` is [`ErrorBoundaryState::reset`]; re-rendering a
//! failed boundary never retries its children, so a child that fails on
//! every render cannot loop.
//!
//! The captured failure and its diagnostic chain live inside the `Failed`
//! phase, so "has an error" and "error is present" cannot disagree.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::error::RenderError;

/// Substituted when a failure carries an empty message.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Chain of boundary labels from the application root down to a subtree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticInfo {
    component_stack: Vec<&'static str>,
}

impl DiagnosticInfo {
    pub fn root(label: &'static str) -> Self {
        Self { component_stack: vec![label] }
    }

    /// This chain extended by one nested component.
    #[must_use]
    pub fn child(&self, label: &'static str) -> Self {
        let mut component_stack = self.component_stack.clone();
        component_stack.push(label);
        Self { component_stack }
    }

    /// Labels ordered outermost first.
    pub fn component_stack(&self) -> &[&'static str] {
        &self.component_stack
    }
}

/// Innermost component first, one `in <label>` line each.
impl fmt::Display for DiagnosticInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.component_stack.iter().rev() {
            write!(f, "\n    in {label}")?;
        }
        Ok(())
    }
}

/// A failure as recorded by a boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedFailure {
    pub error: RenderError,
    pub info: DiagnosticInfo,
}

impl CapturedFailure {
    /// Human-readable summary; never empty.
    pub fn message(&self) -> String {
        let message = self.error.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_owned()
        } else {
            message
        }
    }

    /// Technical trace for the details panel.
    pub fn details(&self) -> String {
        let mut details = format!("{:?}", self.error);
        if !self.info.component_stack().is_empty() {
            details.push_str("\n\nComponent Stack:");
            details.push_str(&self.info.to_string());
        }
        details
    }
}

/// Caller hook invoked once per `Clean → Failed` transition.
///
/// A panicking observer is caught and logged; the boundary still fails over
/// to its fallback with the original error.
#[derive(Clone)]
pub struct ErrorObserver(Arc<dyn Fn(&RenderError, &DiagnosticInfo) + Send + Sync>);

impl ErrorObserver {
    pub fn new(observer: impl Fn(&RenderError, &DiagnosticInfo) + Send + Sync + 'static) -> Self {
        Self(Arc::new(observer))
    }

    /// Run the observer. Returns `false` if it panicked.
    fn notify(&self, failure: &CapturedFailure) -> bool {
        let outcome = catch_unwind(AssertUnwindSafe(|| (self.0)(&failure.error, &failure.info)));
        match outcome {
            Ok(()) => true,
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_owned())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_owned());
                log::warn!("error boundary observer failed, ignoring: {reason}");
                false
            }
        }
    }
}

impl fmt::Debug for ErrorObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorObserver(..)")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPhase {
    #[default]
    Clean,
    Failed(CapturedFailure),
}

/// What a boundary shows for its current state.
#[derive(Debug, PartialEq, Eq)]
pub enum BoundaryView<V> {
    Children(V),
    Fallback(CapturedFailure),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBoundaryState {
    phase: BoundaryPhase,
    show_details: bool,
}

impl ErrorBoundaryState {
    pub fn has_error(&self) -> bool {
        matches!(self.phase, BoundaryPhase::Failed(_))
    }

    pub fn phase(&self) -> &BoundaryPhase {
        &self.phase
    }

    pub fn failure(&self) -> Option<&CapturedFailure> {
        match &self.phase {
            BoundaryPhase::Clean => None,
            BoundaryPhase::Failed(failure) => Some(failure),
        }
    }

    pub fn error(&self) -> Option<&RenderError> {
        self.failure().map(|f| &f.error)
    }

    pub fn error_info(&self) -> Option<&DiagnosticInfo> {
        self.failure().map(|f| &f.info)
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    /// Move `Clean → Failed`, then notify `observer`.
    ///
    /// Returns `false` when already failed; the first failure is kept and the
    /// observer is not called again.
    pub fn handle_failure(
        &mut self,
        error: RenderError,
        info: DiagnosticInfo,
        observer: Option<&ErrorObserver>,
    ) -> bool {
        if self.has_error() {
            log::debug!("error boundary already failed, dropping: {error}");
            return false;
        }
        self.enter_failed(CapturedFailure { error, info }, observer);
        true
    }

    fn enter_failed(&mut self, failure: CapturedFailure, observer: Option<&ErrorObserver>) {
        log::error!("error boundary caught a render failure: {}{}", failure.error, failure.info);
        self.phase = BoundaryPhase::Failed(failure.clone());
        self.show_details = false;
        if let Some(observer) = observer {
            observer.notify(&failure);
        }
    }

    /// Return to `Clean` and hide the details panel.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flip the details panel. No-op while clean. Returns the new visibility.
    pub fn toggle_details(&mut self) -> bool {
        if self.has_error() {
            self.show_details = !self.show_details;
        }
        self.show_details
    }

    /// Render children through the boundary.
    ///
    /// `render` runs only while clean; an error it returns is captured as if
    /// passed to [`handle_failure`](Self::handle_failure).
    pub fn render<V>(
        &mut self,
        info: &DiagnosticInfo,
        observer: Option<&ErrorObserver>,
        render: impl FnOnce() -> Result<V, RenderError>,
    ) -> BoundaryView<V> {
        if let BoundaryPhase::Failed(failure) = &self.phase {
            return BoundaryView::Fallback(failure.clone());
        }
        match render() {
            Ok(view) => BoundaryView::Children(view),
            Err(error) => {
                let failure = CapturedFailure { error, info: info.clone() };
                self.enter_failed(failure.clone(), observer);
                BoundaryView::Fallback(failure)
            }
        }
    }
}

/// Label for the default fallback's details button.
pub fn details_toggle_label(show_details: bool) -> &'static str {
    if show_details { "Hide Details" } else { "Show Details" }
}
