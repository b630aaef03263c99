//! **pathgrid-core** — geometry and terrain types shared by the *pathgrid*
//! crates.
//!
//! This crate provides the coordinate primitives ([`Point`], [`Range`]) and a
//! reference weighted map ([`TerrainGrid`]) that the search engine in
//! `pathgrid-search` can run on.

pub mod geom;
pub mod terrain;

pub use geom::{Point, Range, RangeIter};
pub use terrain::{DEFAULT_WEIGHT, IMPASSABLE, TerrainError, TerrainGrid};
