//! Main menu: a start button above an exit button.

use delve_engine::input::Key;
use delve_engine::paint::Color;
use delve_engine::scene::{DrawList, ZIndex};

use crate::event::{ScreenEvent, Transition};
use crate::hit::{ButtonRect, LiveSize, ReferenceCanvas};
use crate::screen::{Screen, ScreenId, UiState};

pub const START_BUTTON: ButtonRect = ButtonRect::new(300.0, 500.0, 325.0, 375.0);
pub const EXIT_BUTTON: ButtonRect = ButtonRect::new(300.0, 500.0, 225.0, 275.0);

const START_COLOR: Color = Color::opaque(0.2, 0.3, 0.8);
const EXIT_COLOR: Color = Color::opaque(0.8, 0.2, 0.2);
const CLEAR_COLOR: Color = Color::opaque(0.1, 0.1, 0.1);

pub struct MainMenu {
    ui: UiState,
}

impl MainMenu {
    pub fn new(live: LiveSize) -> Self {
        Self {
            ui: UiState::new(ReferenceCanvas::MENU, live),
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    fn click(&self, x: f32, y: f32) -> Transition {
        // Start wins if the buttons ever overlap.
        if self.ui.hits(&START_BUTTON, x, y) {
            log::info!("starting game");
            return Transition::Switch(ScreenId::Planner);
        }
        if self.ui.hits(&EXIT_BUTTON, x, y) {
            log::info!("exit pressed");
            return Transition::Exit;
        }
        Transition::Stay
    }
}

impl Screen for MainMenu {
    fn id(&self) -> ScreenId {
        ScreenId::MainMenu
    }

    fn title(&self) -> &str {
        "Main Menu"
    }

    fn canvas(&self) -> ReferenceCanvas {
        self.ui.canvas
    }

    fn clear_color(&self) -> Color {
        CLEAR_COLOR
    }

    fn handle_event(&mut self, event: &ScreenEvent) -> Transition {
        match *event {
            ScreenEvent::Resize { width, height } => {
                self.ui.resize(width, height);
                Transition::Stay
            }
            ScreenEvent::MouseClick { x, y } => self.click(x, y),
            ScreenEvent::KeyPress { key: Key::Escape } => Transition::Exit,
            ScreenEvent::KeyPress { .. } => Transition::Stay,
        }
    }

    fn paint(&self, list: &mut DrawList) {
        let canvas = self.ui.canvas;
        list.push_solid_rect(ZIndex::DEFAULT, START_BUTTON.to_canvas_rect(canvas), START_COLOR);
        list.push_solid_rect(ZIndex::DEFAULT, EXIT_BUTTON.to_canvas_rect(canvas), EXIT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_engine::scene::DrawCmd;

    fn menu() -> MainMenu {
        MainMenu::new(ReferenceCanvas::MENU.identity_size())
    }

    fn click(x: f32, y: f32) -> ScreenEvent {
        ScreenEvent::MouseClick { x, y }
    }

    #[test]
    fn start_click_switches_to_planner() {
        let mut m = menu();
        // Start spans y 325..375 bottom-up, i.e. 225..275 from the top.
        assert_eq!(m.handle_event(&click(400.0, 250.0)), Transition::Switch(ScreenId::Planner));
    }

    #[test]
    fn exit_click_exits() {
        let mut m = menu();
        assert_eq!(m.handle_event(&click(400.0, 350.0)), Transition::Exit);
    }

    #[test]
    fn click_on_background_stays() {
        let mut m = menu();
        assert_eq!(m.handle_event(&click(50.0, 50.0)), Transition::Stay);
        assert_eq!(m.handle_event(&click(400.0, 300.0)), Transition::Stay);
    }

    #[test]
    fn escape_exits_other_keys_do_not() {
        let mut m = menu();
        assert_eq!(m.handle_event(&ScreenEvent::KeyPress { key: Key::Enter }), Transition::Stay);
        assert_eq!(m.handle_event(&ScreenEvent::KeyPress { key: Key::Escape }), Transition::Exit);
    }

    #[test]
    fn resize_rescales_hit_regions() {
        let mut m = menu();
        assert_eq!(
            m.handle_event(&ScreenEvent::Resize { width: 1600, height: 600 }),
            Transition::Stay
        );
        assert_eq!(m.ui().live, LiveSize::new(1600, 600));

        assert_eq!(m.handle_event(&click(800.0, 225.0)), Transition::Switch(ScreenId::Planner));
        assert_eq!(m.handle_event(&click(1200.0, 50.0)), Transition::Stay);
        // Left of the stretched buttons.
        assert_eq!(m.handle_event(&click(400.0, 250.0)), Transition::Stay);
    }

    #[test]
    fn minimized_window_ignores_clicks() {
        let mut m = menu();
        m.handle_event(&ScreenEvent::Resize { width: 0, height: 0 });
        assert_eq!(m.handle_event(&click(0.0, 0.0)), Transition::Stay);
    }

    #[test]
    fn paints_both_buttons_in_canvas_space() {
        let m = menu();
        let mut list = DrawList::new();
        m.paint(&mut list);

        let rects: Vec<_> = list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Rect(r) => Some((r.rect, r.color)),
                _ => None,
            })
            .collect();

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].0.origin.y, 225.0);
        assert_eq!(rects[0].1, START_COLOR);
        assert_eq!(rects[1].0.origin.y, 325.0);
        assert_eq!(rects[1].1, EXIT_COLOR);
    }
}
