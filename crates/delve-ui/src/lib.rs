//! Delve UI: the game's front-end screens on top of `delve-engine`.
//!
//! Screens are authored against a fixed [`ReferenceCanvas`] with bottom-left
//! origin buttons. Clicks arrive in live window pixels (top-left origin) and
//! are mapped back with [`hit_test`], so buttons keep working after the window
//! is resized.
//!
//! ```rust,ignore
//! use delve_ui::{Application, ScreenId};
//!
//! Application::new()
//!     .title("Delve")
//!     .start(ScreenId::MainMenu)
//!     .run()?;
//! ```

pub mod app;
pub mod event;
pub mod grid;
pub mod hit;
pub mod menu;
pub mod planner;
pub mod screen;

pub use app::Application;
pub use event::{ScreenEvent, Transition};
pub use grid::{GridSpec, LineSegment, grid_segments, grid_vertices};
pub use hit::{ButtonRect, LiveSize, ReferenceCanvas, hit_test};
pub use screen::{Screen, ScreenId};
