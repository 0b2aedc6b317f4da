//! Screen contract and the per-screen UI state.

use std::fmt;
use std::str::FromStr;

use delve_engine::paint::Color;
use delve_engine::scene::DrawList;

use crate::event::{ScreenEvent, Transition};
use crate::hit::{ButtonRect, LiveSize, ReferenceCanvas, hit_test};
use crate::menu::MainMenu;
use crate::planner::DungeonPlanner;

/// Identifies one of the game's screens.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScreenId {
    MainMenu,
    Planner,
}

impl ScreenId {
    /// Reference canvas the screen is authored against.
    pub fn canvas(self) -> ReferenceCanvas {
        match self {
            ScreenId::MainMenu => ReferenceCanvas::MENU,
            ScreenId::Planner => ReferenceCanvas::PLANNER,
        }
    }

    /// Constructs the screen, seeding it with the current live window size.
    pub fn build(self, live: LiveSize) -> Box<dyn Screen> {
        match self {
            ScreenId::MainMenu => Box::new(MainMenu::new(live)),
            ScreenId::Planner => Box::new(DungeonPlanner::new(live)),
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScreenId::MainMenu => "menu",
            ScreenId::Planner => "planner",
        })
    }
}

impl FromStr for ScreenId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(ScreenId::MainMenu),
            "planner" => Ok(ScreenId::Planner),
            other => anyhow::bail!("unknown screen `{other}` (expected `menu` or `planner`)"),
        }
    }
}

/// A full-window screen.
///
/// Screens own their state; the app feeds them events and asks them to paint
/// into a draw list laid out on their reference canvas.
pub trait Screen {
    fn id(&self) -> ScreenId;

    /// Window title while this screen is active.
    fn title(&self) -> &str;

    fn canvas(&self) -> ReferenceCanvas;

    fn clear_color(&self) -> Color;

    fn handle_event(&mut self, event: &ScreenEvent) -> Transition;

    /// Records this screen's geometry in canvas coordinates (top-left origin).
    fn paint(&self, list: &mut DrawList);
}

/// Canvas plus the last known live window size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UiState {
    pub canvas: ReferenceCanvas,
    pub live: LiveSize,
}

impl UiState {
    pub fn new(canvas: ReferenceCanvas, live: LiveSize) -> Self {
        Self { canvas, live }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.live = LiveSize::new(width, height);
    }

    /// Hit-tests a live-space click against a reference-space button.
    #[inline]
    pub fn hits(&self, button: &ButtonRect, x: f32, y: f32) -> bool {
        hit_test(self.canvas, button, x, y, self.live)
    }

    /// Maps a live-space point (top-left origin) back onto the canvas
    /// (top-left origin). `None` while the window has no area.
    pub fn to_canvas(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.live.is_empty() {
            return None;
        }
        let sx = self.canvas.width / self.live.width as f32;
        let sy = self.canvas.height / self.live.height as f32;
        Some((x * sx, y * sy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_id_parses_cli_names() {
        assert_eq!("menu".parse::<ScreenId>().ok(), Some(ScreenId::MainMenu));
        assert_eq!("planner".parse::<ScreenId>().ok(), Some(ScreenId::Planner));
        assert!("credits".parse::<ScreenId>().is_err());
        assert_eq!(ScreenId::Planner.to_string(), "planner");
    }

    #[test]
    fn build_returns_requested_screen() {
        let live = LiveSize::new(800, 600);
        assert_eq!(ScreenId::MainMenu.build(live).id(), ScreenId::MainMenu);
        assert_eq!(ScreenId::Planner.build(live).id(), ScreenId::Planner);
        for id in [ScreenId::MainMenu, ScreenId::Planner] {
            assert_eq!(id.build(live).canvas(), id.canvas());
        }
    }

    #[test]
    fn to_canvas_undoes_stretch() {
        let mut ui = UiState::new(ReferenceCanvas::PLANNER, LiveSize::new(720, 720));
        ui.resize(1440, 360);
        assert_eq!(ui.to_canvas(1440.0, 360.0), Some((720.0, 720.0)));
        assert_eq!(ui.to_canvas(144.0, 36.0), Some((72.0, 72.0)));

        ui.resize(0, 360);
        assert_eq!(ui.to_canvas(1.0, 1.0), None);
    }
}
