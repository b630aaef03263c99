//! Path reconstruction from a predecessor map, and the terminal result types.

use std::collections::HashMap;

use pathgrid_core::Point;

use crate::distance::edge_cost;
use crate::error::SearchError;
use crate::traits::Grid;

/// A reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Cells from the goal back to the start, both included.
    pub cells: Vec<Point>,
    /// Cumulated cost at the goal for Dijkstra and A*; number of moves for
    /// breadth-first search.
    pub cost: u64,
}

impl Path {
    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn goal(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn start(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Cells in travel order, start first.
    pub fn forward(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().rev().copied()
    }
}

/// Terminal outcome of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// The goal was reached.
    Found(Path),
    /// The frontier emptied before the goal was reached.
    NoPath,
}

impl SearchResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Walk predecessor links from `goal` back to `start`.
///
/// Returns the cells goal-first, start-last. `visited[start]` is expected to
/// be `None`; every other cell on the chain must map to its predecessor.
/// Fails with [`SearchError::NoPathRecorded`] if a link is missing or the
/// start is not reached within `bound` links (a cycle).
pub fn reconstruct(
    visited: &HashMap<Point, Option<Point>>,
    start: Point,
    goal: Point,
    bound: usize,
) -> Result<Vec<Point>, SearchError> {
    let not_recorded = SearchError::NoPathRecorded { start, goal };
    let mut cells = Vec::new();
    let mut current = goal;
    while current != start {
        if cells.len() >= bound {
            return Err(not_recorded);
        }
        cells.push(current);
        current = match visited.get(&current) {
            Some(Some(prev)) => *prev,
            _ => return Err(not_recorded),
        };
    }
    cells.push(start);
    Ok(cells)
}

/// Sum of entry weights along `cells`, excluding the last cell (the start,
/// for a goal-first path).
pub fn path_cost<G: Grid + ?Sized>(grid: &G, cells: &[Point]) -> u64 {
    match cells.split_last() {
        Some((_, entered)) => entered.iter().map(|&p| edge_cost(grid, p)).sum(),
        None => 0,
    }
}
