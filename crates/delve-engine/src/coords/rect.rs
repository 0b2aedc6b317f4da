use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect spanning two corners given in any order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Rect::new(a.x, a.y, b.x - a.x, b.y - a.y).normalized()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Mirrors the rect vertically inside a space of the given height.
    ///
    /// A rect authored with a bottom-left origin becomes the same region in
    /// top-left coordinates (and vice versa).
    #[inline]
    pub fn flip_y(self, height: f32) -> Self {
        let r = self.normalized();
        Rect::new(r.origin.x, height - (r.origin.y + r.size.y), r.size.x, r.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    #[test]
    fn from_corners_any_order() {
        let a = Vec2::new(500.0, 375.0);
        let b = Vec2::new(300.0, 325.0);
        assert_eq!(Rect::from_corners(a, b), r(300.0, 325.0, 200.0, 50.0));
    }

    // ── flip_y ────────────────────────────────────────────────────────────

    #[test]
    fn flip_y_moves_bottom_left_rect_to_top_left_space() {
        // Menu start button: y 325..375 above the bottom of a 600px canvas.
        let flipped = r(300.0, 325.0, 200.0, 50.0).flip_y(600.0);
        assert_eq!(flipped, r(300.0, 225.0, 200.0, 50.0));
        assert_eq!(flipped.flip_y(600.0), r(300.0, 325.0, 200.0, 50.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
