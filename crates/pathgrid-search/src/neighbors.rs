use std::collections::HashMap;

use pathgrid_core::Point;

use crate::traits::Grid;

/// Canonical expansion order: left, right, up, down.
const DIRS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// Cached 4-way neighbor computation.
///
/// Emission order alternates with the parity of `x + y`: odd cells use the
/// canonical order `[left, right, up, down]`, even cells the reverse. This
/// keeps equal-cost paths from degenerating into long straight runs followed
/// by a single turn.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Cardinal neighbors of `p` that are valid on `grid`, in parity order,
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal<G: Grid + ?Sized>(
        &mut self,
        grid: &G,
        p: Point,
        keep: impl Fn(Point) -> bool,
    ) -> &[Point] {
        self.buf.clear();
        let mut emit = |d: Point| {
            let n = p + d;
            if grid.validate(n) && keep(n) {
                self.buf.push(n);
            }
        };
        if p.is_even() {
            DIRS.iter().rev().copied().for_each(&mut emit);
        } else {
            DIRS.iter().copied().for_each(&mut emit);
        }
        &self.buf
    }

    /// Valid cardinal neighbors of `p` that have no entry in `visited`.
    pub fn unvisited<G: Grid + ?Sized, V>(
        &mut self,
        grid: &G,
        p: Point,
        visited: &HashMap<Point, V>,
    ) -> &[Point] {
        self.cardinal(grid, p, |n| !visited.contains_key(&n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::TerrainGrid;

    fn open(w: i32, h: i32) -> TerrainGrid {
        TerrainGrid::new(w, h)
    }

    #[test]
    fn odd_cell_uses_canonical_order() {
        let g = open(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(&g, Point::new(1, 2), |_| true).to_vec();
        // left, right, up (down is out of bounds)
        assert_eq!(
            got,
            vec![Point::new(0, 2), Point::new(2, 2), Point::new(1, 1)]
        );
    }

    #[test]
    fn even_cell_uses_reversed_order() {
        let g = open(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(&g, Point::new(1, 1), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn walls_and_bounds_are_skipped() {
        let mut g = open(2, 2);
        g.set_wall(Point::new(1, 0));
        let mut nb = Neighbors::new();
        let got = nb.cardinal(&g, Point::new(0, 0), |_| true).to_vec();
        assert_eq!(got, vec![Point::new(0, 1)]);
    }

    #[test]
    fn visited_cells_are_skipped() {
        let g = open(3, 3);
        let mut visited: HashMap<Point, Option<Point>> = HashMap::new();
        visited.insert(Point::new(1, 0), None);
        visited.insert(Point::new(0, 1), Some(Point::new(1, 0)));
        let mut nb = Neighbors::new();
        let got = nb.unvisited(&g, Point::new(1, 1), &visited).to_vec();
        assert_eq!(got, vec![Point::new(1, 2), Point::new(2, 1)]);
    }
}
