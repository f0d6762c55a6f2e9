use thiserror::Error;

/// Faults raised by the search bookkeeping.
///
/// Running out of frontier inside a search is *not* reported here: that is
/// the ordinary "no route" outcome and surfaces as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `extract_best` was called with nothing open.
    #[error("extract_best called on an empty open frontier")]
    EmptyFrontier,
}
