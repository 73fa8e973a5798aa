/// Watches a selection run and can cut it short.
///
/// The DP solver reports each filled table layer, and the brute-force solver
/// reports each evaluated candidate. Each solver defines its own event type
/// `E` and action type `A`. Returning `Some(action)` asks the solver to act,
/// for example to stop at a deadline, and `None` lets the run continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never intervenes.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
