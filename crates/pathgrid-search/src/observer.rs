//! Notifications a [`Driver`](crate::Driver) sends while it runs a search.

use pathgrid_core::Point;

use crate::path::SearchResult;

/// Receives search progress. All methods default to doing nothing.
///
/// Start and goal cells are never reported through
/// [`cell_visited`](Self::cell_visited) or [`path_cell`](Self::path_cell);
/// they are endpoints, not frontier or path visuals.
pub trait Observer {
    /// A cell was popped from the frontier.
    fn cell_visited(&mut self, _p: Point) {}

    /// A cell of the final path, reported goal-to-start.
    fn path_cell(&mut self, _p: Point) {}

    /// The run finished. Called exactly once per run.
    fn finished(&mut self, _result: &SearchResult) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn cell_visited(&mut self, p: Point) {
        (**self).cell_visited(p);
    }

    fn path_cell(&mut self, p: Point) {
        (**self).path_cell(p);
    }

    fn finished(&mut self, result: &SearchResult) {
        (**self).finished(result);
    }
}

/// Ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// One recorded notification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    Visited(Point),
    PathCell(Point),
    Finished(SearchResult),
}

/// Keeps every notification in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recorder {
    pub events: Vec<SearchEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells reported as visited, in order.
    pub fn visited(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::Visited(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Cells reported as part of the path, in order.
    pub fn path_cells(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::PathCell(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// The terminal result, if the run has finished.
    pub fn result(&self) -> Option<&SearchResult> {
        self.events.iter().find_map(|e| match e {
            SearchEvent::Finished(r) => Some(r),
            _ => None,
        })
    }
}

impl Observer for Recorder {
    fn cell_visited(&mut self, p: Point) {
        self.events.push(SearchEvent::Visited(p));
    }

    fn path_cell(&mut self, p: Point) {
        self.events.push(SearchEvent::PathCell(p));
    }

    fn finished(&mut self, result: &SearchResult) {
        self.events.push(SearchEvent::Finished(result.clone()));
    }
}
