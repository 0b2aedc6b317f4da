//! Uniform grid line generation.

use delve_engine::coords::Vec2;

/// A square grid of `cells` x `cells` cells, each `cell_size` units wide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridSpec {
    pub cells: u32,
    pub cell_size: f32,
}

impl GridSpec {
    #[inline]
    pub const fn new(cells: u32, cell_size: f32) -> Self {
        Self { cells, cell_size }
    }

    /// Side length of the whole grid.
    #[inline]
    pub fn extent(&self) -> f32 {
        self.cells as f32 * self.cell_size
    }

    /// The `(column, row)` cell containing `p`, or `None` outside the grid.
    ///
    /// Cells are half-open; the far edge belongs to no cell.
    pub fn cell_at(&self, p: Vec2) -> Option<(u32, u32)> {
        if self.cells == 0 || self.cell_size <= 0.0 || !p.is_finite() {
            return None;
        }

        let extent = self.extent();
        if p.x < 0.0 || p.y < 0.0 || p.x >= extent || p.y >= extent {
            return None;
        }

        let col = ((p.x / self.cell_size) as u32).min(self.cells - 1);
        let row = ((p.y / self.cell_size) as u32).min(self.cells - 1);
        Some((col, row))
    }
}

/// One independent line segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Segments for the grid lines.
///
/// For each `i` in `0..=cells` the horizontal line at `i * cell_size` comes
/// first, then the vertical one. Yields `2 * (cells + 1)` segments.
pub fn grid_segments(spec: GridSpec) -> Vec<LineSegment> {
    let extent = spec.extent();
    let mut out = Vec::with_capacity(2 * (spec.cells as usize + 1));

    for i in 0..=spec.cells {
        let at = i as f32 * spec.cell_size;
        out.push(LineSegment::new(Vec2::new(0.0, at), Vec2::new(extent, at)));
        out.push(LineSegment::new(Vec2::new(at, 0.0), Vec2::new(at, extent)));
    }

    out
}

/// The grid segments flattened to `x, y` pairs, two vertices per segment.
pub fn grid_vertices(spec: GridSpec) -> Vec<f32> {
    grid_segments(spec)
        .iter()
        .flat_map(|s| [s.start.x, s.start.y, s.end.x, s.end.y])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLANNER: GridSpec = GridSpec::new(10, 72.0);

    #[test]
    fn planner_grid_counts() {
        assert_eq!(grid_segments(PLANNER).len(), 22);

        let v = grid_vertices(PLANNER);
        assert_eq!(v.len(), 88);
        assert_eq!(v.len() / 2, 44);
    }

    #[test]
    fn first_pair_is_horizontal_then_vertical() {
        let segs = grid_segments(PLANNER);
        assert_eq!(
            segs[0],
            LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(720.0, 0.0))
        );
        assert_eq!(
            segs[1],
            LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 720.0))
        );
        assert_eq!(&grid_vertices(PLANNER)[..8], &[0.0, 0.0, 720.0, 0.0, 0.0, 0.0, 0.0, 720.0]);
    }

    #[test]
    fn segments_follow_index_order() {
        let segs = grid_segments(PLANNER);
        for (i, pair) in segs.chunks(2).enumerate() {
            let at = i as f32 * 72.0;
            assert_eq!(pair[0].start.y, at);
            assert_eq!(pair[0].end.y, at);
            assert_eq!(pair[1].start.x, at);
            assert_eq!(pair[1].end.x, at);
        }
        assert_eq!(segs.last().map(|s| s.end), Some(Vec2::new(720.0, 720.0)));
    }

    #[test]
    fn empty_grid_is_a_single_point_pair() {
        let segs = grid_segments(GridSpec::new(0, 72.0));
        assert_eq!(segs.len(), 2);
        assert!(segs.iter().all(|s| s.start == s.end));
    }

    #[test]
    fn cell_lookup() {
        assert_eq!(PLANNER.cell_at(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(PLANNER.cell_at(Vec2::new(71.9, 72.0)), Some((0, 1)));
        assert_eq!(PLANNER.cell_at(Vec2::new(719.0, 719.0)), Some((9, 9)));
        assert_eq!(PLANNER.cell_at(Vec2::new(720.0, 10.0)), None);
        assert_eq!(PLANNER.cell_at(Vec2::new(-0.5, 10.0)), None);
        assert_eq!(GridSpec::new(0, 72.0).cell_at(Vec2::zero()), None);
    }
}
