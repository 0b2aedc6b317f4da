//! Coordinate and geometry types shared by the renderers and the UI.
//!
//! Canonical renderer space:
//! - logical pixels of a canvas (DPI-aware)
//! - origin top-left
//! - +X right, +Y down
//!
//! Screens that author geometry with a bottom-left origin flip it with
//! [`Rect::flip_y`] / [`Vec2::flip_y`] before recording draw commands.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
