//! Search configuration: which algorithm to run and how fast to animate it.

use std::fmt;
use std::str::FromStr;

/// The three interchangeable search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search. Ignores weights; FIFO frontier.
    Bfs,
    /// Dijkstra's algorithm. Frontier ordered by cumulated cost.
    Dijkstra,
    /// A*: cumulated cost plus Manhattan distance to the goal.
    #[default]
    Astar,
}

impl Algorithm {
    /// All algorithms, in the order they are usually compared.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::Astar];

    /// Whether the frontier is a [`PriorityQueue`](crate::PriorityQueue).
    #[inline]
    pub fn is_weighted(self) -> bool {
        !matches!(self, Algorithm::Bfs)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Returned by [`Algorithm::from_str`] for an unrecognised name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}` (expected bfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

/// Parameters for one search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// How many steps [`Driver::tick`](crate::Driver::tick) performs. Values
    /// below 1 are treated as 1.
    pub steps_per_tick: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            steps_per_tick: 1,
        }
    }
}

impl SearchConfig {
    /// Default configuration for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_steps_per_tick(mut self, steps: usize) -> Self {
        self.steps_per_tick = steps;
        self
    }
}

impl From<Algorithm> for SearchConfig {
    fn from(algorithm: Algorithm) -> Self {
        Self::new(algorithm)
    }
}
