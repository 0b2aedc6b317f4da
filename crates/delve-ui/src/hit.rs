//! Resize-aware button hit-testing.
//!
//! Buttons live in reference space: a fixed canvas with the origin at the
//! bottom-left. The window reports clicks in live pixels with the origin at
//! the top-left. Each axis is scaled independently, so a width-only resize
//! stretches hit regions horizontally only.

use delve_engine::coords::{Rect, Vec2, Viewport};
use delve_engine::input::ResizeEvent;

/// The fixed size a screen's geometry was authored against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReferenceCanvas {
    pub width: f32,
    pub height: f32,
}

impl ReferenceCanvas {
    /// Main menu canvas.
    pub const MENU: Self = Self::new(800.0, 600.0);
    /// Dungeon planner canvas.
    pub const PLANNER: Self = Self::new(720.0, 720.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The canvas as a render viewport.
    #[inline]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Live size that maps the canvas at scale 1.
    #[inline]
    pub fn identity_size(self) -> LiveSize {
        LiveSize::new(self.width as u32, self.height as u32)
    }
}

/// Current window size in logical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LiveSize {
    pub width: u32,
    pub height: u32,
}

impl LiveSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either axis has collapsed (minimized window).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<ResizeEvent> for LiveSize {
    fn from(ev: ResizeEvent) -> Self {
        Self::new(ev.width, ev.height)
    }
}

/// Axis-aligned button in reference space (bottom-left origin).
///
/// Invariant: `x_min < x_max` and `y_min < y_max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonRect {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl ButtonRect {
    #[inline]
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Bounds of this button in live space for the given window size.
    pub fn scaled(&self, canvas: ReferenceCanvas, live: LiveSize) -> ButtonRect {
        let sx = live.width as f32 / canvas.width;
        let sy = live.height as f32 / canvas.height;
        ButtonRect {
            x_min: self.x_min * sx,
            x_max: self.x_max * sx,
            y_min: self.y_min * sy,
            y_max: self.y_max * sy,
        }
    }

    /// Inclusive containment of a bottom-left origin point.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }

    /// The same region as a top-left origin canvas rect, ready for the
    /// renderer.
    pub fn to_canvas_rect(&self, canvas: ReferenceCanvas) -> Rect {
        Rect::from_corners(
            Vec2::new(self.x_min, self.y_min),
            Vec2::new(self.x_max, self.y_max),
        )
        .flip_y(canvas.height)
    }
}

/// Returns true if a click at `(click_x, click_y)` (live pixels, top-left
/// origin) lands on `button`.
///
/// A zero-width or zero-height window never hits.
pub fn hit_test(
    canvas: ReferenceCanvas,
    button: &ButtonRect,
    click_x: f32,
    click_y: f32,
    live: LiveSize,
) -> bool {
    if live.is_empty() {
        return false;
    }

    let adj = button.scaled(canvas, live);
    let click_y_gl = live.height as f32 - click_y;
    adj.contains(click_x, click_y_gl)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: ButtonRect = ButtonRect::new(300.0, 500.0, 325.0, 375.0);
    const EXIT: ButtonRect = ButtonRect::new(300.0, 500.0, 225.0, 275.0);

    #[test]
    fn identity_scale_matches_flipped_reference_containment() {
        let canvas = ReferenceCanvas::MENU;
        let live = canvas.identity_size();

        for button in [START, EXIT] {
            for x in (0..=800).step_by(25) {
                for y in (0..=600).step_by(25) {
                    let (x, y) = (x as f32, y as f32);
                    let expected = button.contains(x, 600.0 - y);
                    assert_eq!(
                        hit_test(canvas, &button, x, y, live),
                        expected,
                        "button {button:?} click ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn doubled_window_hits_scaled_center() {
        let canvas = ReferenceCanvas::MENU;
        let live = LiveSize::new(1600, 1200);

        for button in [START, EXIT] {
            let c = button.scaled(canvas, live).center();
            let click_y = live.height as f32 - c.y;
            assert!(hit_test(canvas, &button, c.x, click_y, live));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let canvas = ReferenceCanvas::MENU;
        let live = LiveSize::new(1000, 900);
        let adj = START.scaled(canvas, live);
        let h = live.height as f32;

        assert!(hit_test(canvas, &START, adj.x_min, h - adj.y_min, live));
        assert!(hit_test(canvas, &START, adj.x_max, h - adj.y_max, live));
        assert!(hit_test(canvas, &START, adj.x_min, h - adj.y_max, live));
        assert!(hit_test(canvas, &START, adj.x_max, h - adj.y_min, live));
    }

    #[test]
    fn one_unit_outside_any_bound_misses() {
        let canvas = ReferenceCanvas::MENU;
        let live = LiveSize::new(1000, 900);
        let adj = START.scaled(canvas, live);
        let h = live.height as f32;
        let c = adj.center();

        assert!(!hit_test(canvas, &START, adj.x_min - 1.0, h - c.y, live));
        assert!(!hit_test(canvas, &START, adj.x_max + 1.0, h - c.y, live));
        assert!(!hit_test(canvas, &START, c.x, h - (adj.y_min - 1.0), live));
        assert!(!hit_test(canvas, &START, c.x, h - (adj.y_max + 1.0), live));
    }

    #[test]
    fn width_only_resize_hits_start_button() {
        let live = LiveSize::new(1600, 600);
        let adj = START.scaled(ReferenceCanvas::MENU, live);
        assert_eq!((adj.x_min, adj.x_max), (600.0, 1000.0));
        assert!(hit_test(ReferenceCanvas::MENU, &START, 800.0, 225.0, live));
    }

    #[test]
    fn width_only_resize_misses_above_start_button() {
        let live = LiveSize::new(1600, 600);
        assert!(!hit_test(ReferenceCanvas::MENU, &START, 1200.0, 50.0, live));
    }

    #[test]
    fn zero_sized_window_never_hits() {
        let canvas = ReferenceCanvas::MENU;
        for live in [LiveSize::new(0, 600), LiveSize::new(800, 0), LiveSize::default()] {
            assert!(!hit_test(canvas, &START, 0.0, 0.0, live));
            assert!(!hit_test(canvas, &START, 400.0, 250.0, live));
        }
    }

    #[test]
    fn canvas_rect_is_flipped_to_top_left() {
        let r = START.to_canvas_rect(ReferenceCanvas::MENU);
        assert_eq!(r, Rect::new(300.0, 225.0, 200.0, 50.0));

        let r = EXIT.to_canvas_rect(ReferenceCanvas::MENU);
        assert_eq!(r, Rect::new(300.0, 325.0, 200.0, 50.0));
    }

    #[test]
    fn live_size_from_resize_event() {
        let live: LiveSize = ResizeEvent { width: 1024, height: 768 }.into();
        assert_eq!(live, LiveSize::new(1024, 768));
        assert!(!live.is_empty());
    }
}
