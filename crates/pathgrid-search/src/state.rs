//! The incremental search state machine shared by all three algorithms.

use std::collections::{HashMap, HashSet, VecDeque};

use pathgrid_core::Point;

use crate::config::Algorithm;
use crate::distance::{edge_cost, manhattan};
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::queue::PriorityQueue;
use crate::traits::Grid;

/// Where a search run stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Running,
    /// The goal was popped from the frontier.
    Found,
    /// The frontier emptied first.
    Exhausted,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Running)
    }
}

/// What a single [`SearchState::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// `cell` was popped and expanded.
    Expanded(Point),
    /// `cell` was popped and is the goal. The run is now [`Status::Found`].
    ReachedGoal(Point),
    /// The frontier was empty. The run is now [`Status::Exhausted`].
    Exhausted,
    /// The run had already finished; nothing happened.
    Idle,
}

/// Counters for one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Pops processed (goal included). A* can count a cell more than once
    /// when zero-weight cells let it find a cheaper route after closing it.
    pub expanded: usize,
    /// Frontier insertions, the seeded start cell included.
    pub enqueued: usize,
    /// Largest frontier length observed, stale duplicates included.
    pub max_frontier: usize,
}

enum Frontier {
    Fifo(VecDeque<Point>),
    Priority(PriorityQueue<Point>),
}

impl Frontier {
    fn len(&self) -> usize {
        match self {
            Frontier::Fifo(q) => q.len(),
            Frontier::Priority(q) => q.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            Frontier::Fifo(q) => q.clear(),
            Frontier::Priority(q) => q.clear(),
        }
    }
}

/// One in-flight search from `start` to `goal` over a borrowed grid.
///
/// Frontier, visited map and cost map are created by [`new`](Self::new) and
/// dropped with the state; a state is never reused for another run.
pub struct SearchState<'g, G: Grid + ?Sized> {
    grid: &'g G,
    algorithm: Algorithm,
    start: Point,
    goal: Point,
    status: Status,
    frontier: Frontier,
    /// Cell → predecessor. The start maps to `None`.
    visited: HashMap<Point, Option<Point>>,
    /// Lowest known cost from the start. Dijkstra and A* only.
    cost: HashMap<Point, u64>,
    /// Cells expanded at their current cost. Dijkstra and A* only.
    closed: HashSet<Point>,
    neighbors: Neighbors,
    stats: SearchStats,
}

impl<'g, G: Grid + ?Sized> SearchState<'g, G> {
    /// Seed a new run: the frontier holds `start` alone.
    pub fn new(grid: &'g G, algorithm: Algorithm, start: Point, goal: Point) -> Self {
        let frontier = if algorithm.is_weighted() {
            let mut q = PriorityQueue::new();
            q.enqueue(start, 0.0);
            Frontier::Priority(q)
        } else {
            Frontier::Fifo(VecDeque::from([start]))
        };
        let mut visited = HashMap::new();
        visited.insert(start, None);
        let mut cost = HashMap::new();
        if algorithm.is_weighted() {
            cost.insert(start, 0);
        }
        Self {
            grid,
            algorithm,
            start,
            goal,
            status: Status::Running,
            frontier,
            visited,
            cost,
            closed: HashSet::new(),
            neighbors: Neighbors::new(),
            stats: SearchStats {
                expanded: 0,
                enqueued: 1,
                max_frontier: 1,
            },
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn grid(&self) -> &'g G {
        self.grid
    }

    /// The predecessor map built so far.
    pub fn visited(&self) -> &HashMap<Point, Option<Point>> {
        &self.visited
    }

    /// Lowest known cost from the start to `p`, for weighted algorithms.
    pub fn cost_at(&self, p: Point) -> Option<u64> {
        self.cost.get(&p).copied()
    }

    /// Number of entries left in the frontier, stale duplicates included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Perform one pop-and-expand cycle.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        if self.status.is_terminal() {
            return Ok(Step::Idle);
        }

        let Some(current) = self.pop()? else {
            self.status = Status::Exhausted;
            return Ok(Step::Exhausted);
        };
        self.stats.expanded += 1;
        log::trace!("{}: expanding {current}", self.algorithm);

        if current == self.goal {
            self.status = Status::Found;
            self.frontier.clear();
            return Ok(Step::ReachedGoal(current));
        }

        match self.algorithm {
            Algorithm::Bfs => self.expand_unweighted(current),
            Algorithm::Dijkstra | Algorithm::Astar => self.expand_weighted(current),
        }
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        Ok(Step::Expanded(current))
    }

    /// Next cell to expand, or `None` if the frontier is empty. Stale
    /// priority entries for closed cells are dropped on the way.
    fn pop(&mut self) -> Result<Option<Point>, SearchError> {
        match &mut self.frontier {
            Frontier::Fifo(q) => Ok(q.pop_front()),
            Frontier::Priority(q) => {
                while !q.is_empty() {
                    let p = q.dequeue()?;
                    if self.closed.insert(p) {
                        return Ok(Some(p));
                    }
                }
                Ok(None)
            }
        }
    }

    fn expand_unweighted(&mut self, current: Point) {
        let Frontier::Fifo(queue) = &mut self.frontier else {
            return;
        };
        for &n in self.neighbors.unvisited(self.grid, current, &self.visited) {
            self.visited.insert(n, Some(current));
            queue.push_back(n);
            self.stats.enqueued += 1;
        }
    }

    fn expand_weighted(&mut self, current: Point) {
        let Frontier::Priority(queue) = &mut self.frontier else {
            return;
        };
        let base = self.cost.get(&current).copied().unwrap_or_default();
        for &n in self.neighbors.cardinal(self.grid, current, |_| true) {
            let new_cost = base + edge_cost(self.grid, n);
            if self.cost.get(&n).is_some_and(|&known| new_cost >= known) {
                continue;
            }
            self.cost.insert(n, new_cost);
            self.visited.insert(n, Some(current));
            // reopen: cells reached through `n` must be relaxed again
            self.closed.remove(&n);
            let priority = match self.algorithm {
                Algorithm::Astar => new_cost + manhattan(self.goal, n),
                _ => new_cost,
            };
            queue.enqueue(n, priority as f64);
            self.stats.enqueued += 1;
        }
    }
}
