use pathgrid_core::Point;

use crate::traits::Grid;

/// Manhattan (L1) distance between two points.
///
/// Admissible for A* as long as every cell weight is at least 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    (a.x - b.x).unsigned_abs() as u64 + (a.y - b.y).unsigned_abs() as u64
}

/// Cost of stepping into `to`: its entry weight on `grid`.
#[inline]
pub fn edge_cost<G: Grid + ?Sized>(grid: &G, to: Point) -> u64 {
    grid.weight(to) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::TerrainGrid;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(2, 2)), 4);
        assert_eq!(manhattan(Point::new(3, -1), Point::new(-2, 4)), 10);
        assert_eq!(manhattan(Point::new(5, 5), Point::new(5, 5)), 0);
    }

    #[test]
    fn edge_cost_is_entry_weight() {
        let mut g = TerrainGrid::new(2, 2);
        g.set_weight(Point::new(1, 1), 10);
        assert_eq!(edge_cost(&g, Point::new(1, 1)), 10);
        assert_eq!(edge_cost(&g, Point::new(0, 1)), 1);
    }
}
