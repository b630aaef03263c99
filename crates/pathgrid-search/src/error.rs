//! Error types for search runs.

use std::fmt;

use pathgrid_core::Point;

/// Errors surfaced by the queue, the reconstructor and the [`Driver`](crate::Driver).
///
/// An unreachable goal is not an error: it is reported as
/// [`SearchResult::NoPath`](crate::SearchResult::NoPath).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `dequeue` was called on an empty [`PriorityQueue`](crate::PriorityQueue).
    EmptyQueue,
    /// Following predecessor links from `goal` never reached `start`. The
    /// visited map is corrupt (missing link or cycle).
    NoPathRecorded { start: Point, goal: Point },
    /// A search endpoint lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQueue => write!(f, "dequeue from an empty priority queue"),
            Self::NoPathRecorded { start, goal } => {
                write!(f, "no predecessor chain recorded from {goal} back to {start}")
            }
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
        }
    }
}

impl std::error::Error for SearchError {}
