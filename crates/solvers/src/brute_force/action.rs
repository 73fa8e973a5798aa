/// Actions an observer can take during exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop enumerating and return the best subset found so far.
    StopEarly,
}
