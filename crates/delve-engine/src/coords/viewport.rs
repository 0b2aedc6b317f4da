/// Viewport size in logical pixels.
///
/// Renderers upload this to their viewport uniform and use it as the basis for
/// converting canvas positions to NDC. A viewport that differs from the window
/// size stretches the canvas over the whole surface.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Viewport with both axes clamped to at least one logical pixel.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(self.width.max(1.0), self.height.max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_nan_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, f32::NAN).is_valid());
        assert!(Viewport::new(800.0, 600.0).is_valid());
    }

    #[test]
    fn clamped_never_below_one() {
        assert_eq!(Viewport::new(0.0, -4.0).clamped(), Viewport::new(1.0, 1.0));
        assert_eq!(Viewport::new(800.0, 600.0).clamped(), Viewport::new(800.0, 600.0));
    }
}
