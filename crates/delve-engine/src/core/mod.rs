//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the game
//! layer. Runtime internals do not leak past `App` and `FrameCtx`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
