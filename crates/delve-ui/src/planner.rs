//! Dungeon planner: a square grid with single-cell selection.

use delve_engine::coords::{Rect, Vec2};
use delve_engine::input::Key;
use delve_engine::paint::Color;
use delve_engine::scene::{DrawList, ZIndex};

use crate::event::{ScreenEvent, Transition};
use crate::grid::{GridSpec, LineSegment, grid_segments};
use crate::hit::{LiveSize, ReferenceCanvas};
use crate::screen::{Screen, ScreenId, UiState};

pub const PLANNER_GRID: GridSpec = GridSpec::new(10, 72.0);

const CLEAR_COLOR: Color = Color::opaque(0.1, 0.1, 0.1);
const GRID_COLOR: Color = Color::opaque(0.7, 0.7, 0.7);
const SELECTION_COLOR: Color = Color::opaque(0.25, 0.35, 0.25);

pub struct DungeonPlanner {
    ui: UiState,
    grid: GridSpec,
    /// Built once; the grid never changes.
    segments: Vec<LineSegment>,
    /// `(column, row)`, rows counted up from the bottom edge.
    selected: Option<(u32, u32)>,
}

impl DungeonPlanner {
    pub fn new(live: LiveSize) -> Self {
        Self {
            ui: UiState::new(ReferenceCanvas::PLANNER, live),
            grid: PLANNER_GRID,
            segments: grid_segments(PLANNER_GRID),
            selected: None,
        }
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn selected(&self) -> Option<(u32, u32)> {
        self.selected
    }

    fn click(&mut self, x: f32, y: f32) {
        let Some((cx, cy)) = self.ui.to_canvas(x, y) else { return };
        // Grid space shares the bottom-left origin of the reference canvas.
        let p = Vec2::new(cx, self.ui.canvas.height - cy);

        self.selected = self.grid.cell_at(p);
        match self.selected {
            Some((col, row)) => log::info!("selected cell ({col}, {row})"),
            None => log::debug!("click outside grid at ({x}, {y})"),
        }
    }
}

impl Screen for DungeonPlanner {
    fn id(&self) -> ScreenId {
        ScreenId::Planner
    }

    fn title(&self) -> &str {
        "Dungeon Planner"
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
            ScreenEvent::MouseClick { x, y } => {
                self.click(x, y);
                Transition::Stay
            }
            ScreenEvent::KeyPress { key: Key::Escape } => Transition::Exit,
            ScreenEvent::KeyPress { key: Key::Backspace } => Transition::Switch(ScreenId::MainMenu),
            ScreenEvent::KeyPress { .. } => Transition::Stay,
        }
    }

    fn paint(&self, list: &mut DrawList) {
        let h = self.ui.canvas.height;

        if let Some((col, row)) = self.selected {
            let c = self.grid.cell_size;
            let cell = Rect::new(col as f32 * c, row as f32 * c, c, c).flip_y(h);
            list.push_solid_rect(ZIndex::BACKGROUND, cell, SELECTION_COLOR);
        }

        list.push_lines(
            ZIndex::DEFAULT,
            self.segments
                .iter()
                .map(|s| (s.start.flip_y(h), s.end.flip_y(h))),
            GRID_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_engine::scene::DrawCmd;

    fn planner() -> DungeonPlanner {
        DungeonPlanner::new(ReferenceCanvas::PLANNER.identity_size())
    }

    #[test]
    fn grid_is_built_once_at_construction() {
        let p = planner();
        assert_eq!(p.segments().len(), 22);
        assert_eq!(p.segments(), grid_segments(PLANNER_GRID).as_slice());
    }

    #[test]
    fn escape_exits_backspace_returns_to_menu() {
        let mut p = planner();
        assert_eq!(p.handle_event(&ScreenEvent::KeyPress { key: Key::Escape }), Transition::Exit);
        assert_eq!(
            p.handle_event(&ScreenEvent::KeyPress { key: Key::Backspace }),
            Transition::Switch(ScreenId::MainMenu)
        );
        assert_eq!(p.handle_event(&ScreenEvent::KeyPress { key: Key::Space }), Transition::Stay);
    }

    #[test]
    fn click_selects_cell_from_bottom_left() {
        let mut p = planner();
        // Top-left pixel of the window is the top-left cell: column 0, row 9.
        p.handle_event(&ScreenEvent::MouseClick { x: 10.0, y: 10.0 });
        assert_eq!(p.selected(), Some((0, 9)));

        p.handle_event(&ScreenEvent::MouseClick { x: 700.0, y: 700.0 });
        assert_eq!(p.selected(), Some((9, 0)));
    }

    #[test]
    fn click_follows_stretched_window() {
        let mut p = planner();
        p.handle_event(&ScreenEvent::Resize { width: 1440, height: 720 });
        // x 150 -> canvas 75 -> column 1.
        p.handle_event(&ScreenEvent::MouseClick { x: 150.0, y: 710.0 });
        assert_eq!(p.selected(), Some((1, 0)));
    }

    #[test]
    fn click_on_far_edge_clears_selection() {
        let mut p = planner();
        p.handle_event(&ScreenEvent::MouseClick { x: 10.0, y: 10.0 });
        p.handle_event(&ScreenEvent::MouseClick { x: 720.0, y: 10.0 });
        assert_eq!(p.selected(), None);
    }

    #[test]
    fn paints_grid_lines_and_selection() {
        let mut p = planner();
        p.handle_event(&ScreenEvent::MouseClick { x: 10.0, y: 10.0 });

        let mut list = DrawList::new();
        p.paint(&mut list);
        assert_eq!(list.len(), 23);

        let first = list.iter_in_paint_order().next().map(|item| item.cmd.clone());
        match first {
            Some(DrawCmd::Rect(r)) => assert_eq!(r.rect, Rect::new(0.0, 0.0, 72.0, 72.0)),
            other => panic!("expected selection rect first, got {other:?}"),
        }
    }
}
