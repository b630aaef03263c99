//! [`Driver`]: runs one [`SearchState`] to its end and reports to an
//! [`Observer`].
//!
//! The driver never schedules itself. A host either calls
//! [`run_to_completion`](Driver::run_to_completion) (batch mode) or calls
//! [`tick`](Driver::tick) from its own timer (animated mode). Both produce the
//! same notifications in the same order.

use pathgrid_core::Point;

use crate::config::{Algorithm, SearchConfig};
use crate::error::SearchError;
use crate::observer::{NullObserver, Observer};
use crate::path::{Path, SearchResult, reconstruct};
use crate::state::{SearchState, SearchStats, Status, Step};
use crate::traits::Grid;

/// Owns the state of one search run and the observer watching it.
pub struct Driver<'g, G: Grid + ?Sized, O: Observer = NullObserver> {
    state: SearchState<'g, G>,
    config: SearchConfig,
    observer: O,
    result: Option<SearchResult>,
}

impl<'g, G: Grid + ?Sized, O: Observer> Driver<'g, G, O> {
    /// Prepare a run from `start` to `goal`.
    ///
    /// Both endpoints must lie inside `grid.bounds()`. They do not have to be
    /// passable: an impassable goal simply ends in [`SearchResult::NoPath`].
    pub fn new(
        grid: &'g G,
        config: SearchConfig,
        start: Point,
        goal: Point,
        observer: O,
    ) -> Result<Self, SearchError> {
        let bounds = grid.bounds();
        for p in [start, goal] {
            if !bounds.contains(p) {
                return Err(SearchError::OutOfBounds(p));
            }
        }
        log::debug!(
            "{}: searching from {start} to {goal} on {bounds}",
            config.algorithm
        );
        Ok(Self {
            state: SearchState::new(grid, config.algorithm, start, goal),
            config,
            observer,
            result: None,
        })
    }

    /// Advance the search by one step.
    ///
    /// On the step that ends the run, the path is reconstructed, each interior
    /// path cell is reported goal-to-start, and
    /// [`Observer::finished`] is called. Later calls do nothing and return the
    /// terminal status.
    pub fn step(&mut self) -> Result<Status, SearchError> {
        if self.result.is_some() {
            return Ok(self.state.status());
        }
        match self.state.step()? {
            Step::Expanded(p) | Step::ReachedGoal(p) => {
                if !self.is_endpoint(p) {
                    self.observer.cell_visited(p);
                }
            }
            Step::Exhausted | Step::Idle => {}
        }
        let status = self.state.status();
        if status.is_terminal() {
            self.finish(status)?;
        }
        Ok(status)
    }

    /// Advance by up to [`SearchConfig::steps_per_tick`] steps, stopping early
    /// when the run ends.
    pub fn tick(&mut self) -> Result<Status, SearchError> {
        let mut status = self.state.status();
        for _ in 0..self.config.steps_per_tick.max(1) {
            status = self.step()?;
            if status.is_terminal() {
                break;
            }
        }
        Ok(status)
    }

    /// Step until the run ends and return its result.
    pub fn run_to_completion(&mut self) -> Result<SearchResult, SearchError> {
        loop {
            self.step()?;
            if let Some(result) = &self.result {
                return Ok(result.clone());
            }
        }
    }

    fn is_endpoint(&self, p: Point) -> bool {
        p == self.state.start() || p == self.state.goal()
    }

    fn finish(&mut self, status: Status) -> Result<(), SearchError> {
        let result = match status {
            Status::Running => return Ok(()),
            Status::Exhausted => SearchResult::NoPath,
            Status::Found => {
                let (start, goal) = (self.state.start(), self.state.goal());
                let bound = self.state.grid().bounds().len();
                let cells = reconstruct(self.state.visited(), start, goal, bound)
                    .inspect_err(|e| log::warn!("{}: {e}", self.config.algorithm))?;
                let cost = if self.config.algorithm.is_weighted() {
                    self.state.cost_at(goal).unwrap_or_default()
                } else {
                    (cells.len() - 1) as u64
                };
                for &p in &cells {
                    if !self.is_endpoint(p) {
                        self.observer.path_cell(p);
                    }
                }
                SearchResult::Found(Path { cells, cost })
            }
        };
        let stats = self.state.stats();
        match &result {
            SearchResult::Found(path) => log::debug!(
                "{}: path of {} cells, cost {}, {} cells expanded",
                self.config.algorithm,
                path.len(),
                path.cost,
                stats.expanded
            ),
            SearchResult::NoPath => log::debug!(
                "{}: no path, {} cells expanded",
                self.config.algorithm,
                stats.expanded
            ),
        }
        self.observer.finished(&result);
        self.result = Some(result);
        Ok(())
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// The terminal result, once the run has ended.
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn stats(&self) -> SearchStats {
        self.state.stats()
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Read access to the underlying state machine.
    pub fn state(&self) -> &SearchState<'g, G> {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Run a full search without observation.
pub fn find_path<G: Grid + ?Sized>(
    grid: &G,
    algorithm: Algorithm,
    start: Point,
    goal: Point,
) -> Result<SearchResult, SearchError> {
    Driver::new(grid, algorithm.into(), start, goal, NullObserver)?.run_to_completion()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{Recorder, SearchEvent};
    use pathgrid_core::TerrainGrid;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn bfs_three_by_three() {
        let g = TerrainGrid::new(3, 3);
        let result = find_path(&g, Algorithm::Bfs, p(0, 0), p(2, 2)).unwrap();
        let path = result.into_path().unwrap();
        assert_eq!(
            path.cells,
            vec![p(2, 2), p(1, 2), p(1, 1), p(0, 1), p(0, 0)]
        );
        assert_eq!(path.cost, 4);
    }

    #[test]
    fn weighted_three_by_three_costs_four() {
        let g = TerrainGrid::new(3, 3);
        for alg in [Algorithm::Dijkstra, Algorithm::Astar] {
            let path = find_path(&g, alg, p(0, 0), p(2, 2))
                .unwrap()
                .into_path()
                .unwrap();
            assert_eq!(path.len(), 5, "{alg}");
            assert_eq!(path.cost, 4, "{alg}");
        }
    }

    #[test]
    fn observer_skips_endpoints() {
        let g = TerrainGrid::new(3, 3);
        let start = p(0, 0);
        let goal = p(2, 2);
        let mut driver =
            Driver::new(&g, Algorithm::Bfs.into(), start, goal, Recorder::new()).unwrap();
        let result = driver.run_to_completion().unwrap();
        let rec = driver.into_observer();

        let visited = rec.visited();
        assert!(!visited.contains(&start));
        assert!(!visited.contains(&goal));
        assert_eq!(rec.path_cells(), vec![p(1, 2), p(1, 1), p(0, 1)]);
        assert_eq!(rec.events.last(), Some(&SearchEvent::Finished(result)));
        // path notifications come after every visit
        let first_path = rec
            .events
            .iter()
            .position(|e| matches!(e, SearchEvent::PathCell(_)))
            .unwrap();
        assert!(rec.events[first_path..]
            .iter()
            .all(|e| !matches!(e, SearchEvent::Visited(_))));
    }

    #[test]
    fn start_equals_goal_gives_single_cell() {
        let g = TerrainGrid::new(4, 4);
        for alg in Algorithm::ALL {
            let mut driver =
                Driver::new(&g, alg.into(), p(2, 1), p(2, 1), Recorder::new()).unwrap();
            let path = driver.run_to_completion().unwrap().into_path().unwrap();
            assert_eq!(path.cells, vec![p(2, 1)]);
            assert_eq!(path.cost, 0);
            let rec = driver.into_observer();
            assert_eq!(rec.events.len(), 1, "{alg}: only the finish event");
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let g = TerrainGrid::new(3, 3);
        let err = find_path(&g, Algorithm::Astar, p(0, 0), p(3, 0)).unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(p(3, 0)));
        let err = find_path(&g, Algorithm::Bfs, p(-1, 0), p(1, 1)).unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(p(-1, 0)));
    }

    #[test]
    fn walled_goal_is_no_path() {
        let g = TerrainGrid::parse(
            "
S....
...#.
..#E#
...#.
",
        )
        .unwrap();
        for alg in Algorithm::ALL {
            let mut driver =
                Driver::new(&g, alg.into(), p(0, 0), p(3, 2), Recorder::new()).unwrap();
            assert_eq!(driver.run_to_completion(), Ok(SearchResult::NoPath), "{alg}");
            assert_eq!(driver.status(), Status::Exhausted);
            assert!(driver.observer().path_cells().is_empty());
        }
    }

    #[test]
    fn impassable_goal_is_no_path() {
        let mut g = TerrainGrid::new(3, 3);
        g.set_wall(p(2, 2));
        for alg in Algorithm::ALL {
            assert_eq!(find_path(&g, alg, p(0, 0), p(2, 2)), Ok(SearchResult::NoPath));
        }
    }

    #[test]
    fn steps_after_the_end_are_noops() {
        let g = TerrainGrid::new(2, 1);
        let mut driver =
            Driver::new(&g, Algorithm::Dijkstra.into(), p(0, 0), p(1, 0), Recorder::new())
                .unwrap();
        driver.run_to_completion().unwrap();
        let events = driver.observer().events.len();
        assert_eq!(driver.step(), Ok(Status::Found));
        assert_eq!(driver.tick(), Ok(Status::Found));
        assert_eq!(driver.observer().events.len(), events);
        assert!(driver.result().is_some_and(SearchResult::is_found));
    }

    #[test]
    fn tick_respects_steps_per_tick() {
        let g = TerrainGrid::new(6, 6);
        let cfg = SearchConfig::new(Algorithm::Bfs).with_steps_per_tick(3);
        let mut driver = Driver::new(&g, cfg, p(0, 0), p(5, 5), NullObserver).unwrap();
        assert_eq!(driver.tick(), Ok(Status::Running));
        assert_eq!(driver.stats().expanded, 3);
        assert_eq!(driver.tick(), Ok(Status::Running));
        assert_eq!(driver.stats().expanded, 6);
    }

    #[test]
    fn zero_steps_per_tick_still_progresses() {
        let g = TerrainGrid::new(3, 3);
        let cfg = SearchConfig::new(Algorithm::Astar).with_steps_per_tick(0);
        let mut driver = Driver::new(&g, cfg, p(0, 0), p(2, 2), NullObserver).unwrap();
        driver.tick().unwrap();
        assert_eq!(driver.stats().expanded, 1);
    }

    #[test]
    fn batch_and_animated_runs_agree() {
        let g = TerrainGrid::parse(
            "
S..3....
.#.##.9.
.#...#..
...7...E
",
        )
        .unwrap();
        let (start, goal) = (p(0, 0), p(7, 3));
        for alg in Algorithm::ALL {
            let mut batch = Driver::new(&g, alg.into(), start, goal, Recorder::new()).unwrap();
            let batch_result = batch.run_to_completion().unwrap();

            let cfg = SearchConfig::new(alg).with_steps_per_tick(2);
            let mut animated = Driver::new(&g, cfg, start, goal, Recorder::new()).unwrap();
            let mut ticks = 0;
            while !animated.tick().unwrap().is_terminal() {
                ticks += 1;
            }
            assert!(ticks > 1, "{alg}");
            assert_eq!(animated.result(), Some(&batch_result), "{alg}");
            assert_eq!(animated.stats(), batch.stats(), "{alg}");
            assert_eq!(animated.into_observer(), batch.into_observer(), "{alg}");
        }
    }
}
