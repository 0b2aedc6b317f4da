//! Delve engine crate.
//!
//! Owns the platform + GPU runtime used by the game front-end: one window,
//! one wgpu surface, platform-agnostic input, and the flat-color 2D renderers.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
