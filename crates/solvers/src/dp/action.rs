/// Actions an observer can take while the DP table is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the run.
    ///
    /// The table is discarded and the solver returns
    /// [`Error::StoppedByObserver`](super::Error::StoppedByObserver).
    StopEarly,
}
