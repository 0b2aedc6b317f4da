//! Paint model shared between the UI and renderers.
//!
//! Screens fill flat colors only, so paint is a single premultiplied color.
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
