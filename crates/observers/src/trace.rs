use std::fmt::Debug;

use riesz_core::Observer;
use tracing::trace;

/// Logs every solver event at `trace` level and never intervenes.
///
/// Pass `&mut TraceObserver` to keep access to [`TraceObserver::events`]
/// after the solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceObserver {
    label: &'static str,
    events: usize,
}

impl TraceObserver {
    /// Creates an observer that tags its log lines with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label, events: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E: Debug, A> Observer<E, A> for TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        trace!(label = self.label, index = self.events, ?event, "solver event");
        None
    }
}

impl<E: Debug, A> Observer<E, A> for &mut TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
