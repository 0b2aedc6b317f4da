//! Shape renderers.

mod common;

pub mod line;
pub mod rect;
