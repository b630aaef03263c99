//! Incremental grid pathfinding.
//!
//! Three interchangeable strategies search a weighted 2D grid from a start
//! cell to a goal cell:
//!
//! - **Breadth-first search** ([`Algorithm::Bfs`]): ignores weights
//! - **Dijkstra** ([`Algorithm::Dijkstra`]): lowest cumulated entry cost
//! - **A\*** ([`Algorithm::Astar`]): Dijkstra guided by [`manhattan`] distance
//!
//! A run is an explicit state machine ([`SearchState`]) advanced one
//! pop-and-expand step at a time. [`Driver`] owns a run, forwards progress to
//! an [`Observer`] and reconstructs the final [`Path`]. The engine never owns
//! the map: it reads it through the [`Grid`] trait.
//!
//! ```
//! use pathgrid_core::{Point, TerrainGrid};
//! use pathgrid_search::{Algorithm, find_path};
//!
//! let grid = TerrainGrid::parse("S.#\n..E").unwrap();
//! let result = find_path(&grid, Algorithm::Astar, Point::new(0, 0), Point::new(2, 1)).unwrap();
//! assert_eq!(result.path().map(|p| p.cost), Some(3));
//! ```
//!
//! # Determinism
//!
//! Ties in the priority queue are broken by insertion order and neighbors are
//! emitted in an order that alternates with cell parity, so every run over the
//! same grid yields the same path and the same notifications, however the
//! host paces the steps.

mod config;
mod distance;
mod driver;
mod error;
mod neighbors;
mod observer;
mod path;
mod queue;
mod state;
mod traits;

pub use config::{Algorithm, SearchConfig, UnknownAlgorithm};
pub use distance::{edge_cost, manhattan};
pub use driver::{Driver, find_path};
pub use error::SearchError;
pub use neighbors::Neighbors;
pub use observer::{NullObserver, Observer, Recorder, SearchEvent};
pub use path::{Path, SearchResult, path_cost, reconstruct};
pub use queue::PriorityQueue;
pub use state::{SearchState, SearchStats, Status, Step};
pub use traits::Grid;
