use std::fmt;

use skirmish_core::Point;

/// Misuse reported by [`Pathfinder`](crate::Pathfinder) searches.
///
/// An unreachable goal is not an error: [`find_path`](crate::Pathfinder::find_path)
/// returns `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A start or goal tile lies outside the search range.
    OutOfBounds(Point),
    /// The movement budget is negative.
    InvalidBudget(i32),
    /// The search expanded more nodes than the configured step limit.
    StepLimit(usize),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "search endpoint {p} is out of bounds"),
            Self::InvalidBudget(b) => write!(f, "invalid movement budget {b}"),
            Self::StepLimit(n) => write!(f, "search aborted after {n} expansions"),
        }
    }
}

impl std::error::Error for SearchError {}
