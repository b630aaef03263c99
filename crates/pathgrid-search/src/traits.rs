use pathgrid_core::{Point, Range, TerrainGrid};

/// Read-only view of the map a search runs on.
///
/// The engine never mutates the grid. All methods take `&self`, so one grid
/// can back several independent searches at once.
pub trait Grid {
    /// Rectangle of cells that exist. Used for endpoint checks and to bound
    /// path reconstruction.
    fn bounds(&self) -> Range;

    /// `true` iff `p` is in bounds and can be entered.
    fn validate(&self, p: Point) -> bool;

    /// Cost of entering `p`. Only queried for cells that pass
    /// [`validate`](Self::validate). Ignored by breadth-first search.
    fn weight(&self, p: Point) -> u32;
}

impl Grid for TerrainGrid {
    fn bounds(&self) -> Range {
        TerrainGrid::bounds(self)
    }

    fn validate(&self, p: Point) -> bool {
        self.is_passable(p)
    }

    fn weight(&self, p: Point) -> u32 {
        TerrainGrid::weight(self, p)
    }
}

impl<G: Grid + ?Sized> Grid for &G {
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn validate(&self, p: Point) -> bool {
        (**self).validate(p)
    }

    fn weight(&self, p: Point) -> u32 {
        (**self).weight(p)
    }
}
