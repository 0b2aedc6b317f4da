use anyhow::Result;
use winit::dpi::LogicalSize;

use delve_engine::core::{App as EngineApp, AppControl, FrameCtx};
use delve_engine::device::GpuInit;
use delve_engine::render::shapes::line::LineRenderer;
use delve_engine::render::shapes::rect::RectRenderer;
use delve_engine::scene::DrawList;
use delve_engine::window::{Runtime, RuntimeConfig};

use crate::event::{ScreenEvent, Transition, events_from_input};
use crate::hit::LiveSize;
use crate::screen::{Screen, ScreenId};

// ── Application ───────────────────────────────────────────────────────────

/// Top-level game front-end builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Delve")
///     .start(ScreenId::Planner)
///     .run()?;
/// ```
pub struct Application {
    title: String,
    start: ScreenId,
    size: Option<(f64, f64)>,
    gpu_init: GpuInit,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "Delve".to_string(),
            start: ScreenId::MainMenu,
            size: None,
            gpu_init: GpuInit::default(),
        }
    }

    /// Set the game name shown in front of the screen title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Choose the first screen.
    pub fn start(mut self, screen: ScreenId) -> Self {
        self.start = screen;
        self
    }

    /// Set the initial window size in logical pixels.
    ///
    /// Defaults to the start screen's reference canvas.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn gpu_init(mut self, init: GpuInit) -> Self {
        self.gpu_init = init;
        self
    }

    /// Opens the window and runs until a screen exits or the window closes.
    ///
    /// Returns the window or GPU initialization error, if any.
    pub fn run(self) -> Result<()> {
        let (w, h) = self.size.unwrap_or_else(|| {
            let c = self.start.canvas();
            (c.width as f64, c.height as f64)
        });
        let live = LiveSize::new(w as u32, h as u32);

        let host = ScreenHost::new(self.title, self.start, live);
        let config = RuntimeConfig {
            title: host.window_title(),
            initial_size: LogicalSize::new(w, h),
            ..RuntimeConfig::default()
        };

        log::info!("starting on {} screen ({w}x{h})", self.start);
        Runtime::run(config, self.gpu_init, FrontEnd::new(host))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── ScreenHost ────────────────────────────────────────────────────────────

/// The active screen plus what outlives a screen switch.
struct ScreenHost {
    name: String,
    screen: Box<dyn Screen>,
    live: LiveSize,
}

impl ScreenHost {
    fn new(name: String, start: ScreenId, live: LiveSize) -> Self {
        Self {
            name,
            screen: start.build(live),
            live,
        }
    }

    fn window_title(&self) -> String {
        if self.name.is_empty() {
            self.screen.title().to_string()
        } else {
            format!("{} - {}", self.name, self.screen.title())
        }
    }

    /// Routes one event to the active screen and performs any switch.
    fn dispatch(&mut self, event: &ScreenEvent) -> Transition {
        if let ScreenEvent::Resize { width, height } = *event {
            self.live = LiveSize::new(width, height);
        }

        let transition = self.screen.handle_event(event);
        if let Transition::Switch(next) = transition {
            log::debug!("switching {} -> {}", self.screen.id(), next);
            self.screen = next.build(self.live);
        }
        transition
    }
}

// ── FrontEnd ──────────────────────────────────────────────────────────────

/// Internal state that implements `delve_engine::core::App`.
struct FrontEnd {
    host: ScreenHost,
    draw_list: DrawList,
    rect_renderer: RectRenderer,
    line_renderer: LineRenderer,
}

impl FrontEnd {
    fn new(host: ScreenHost) -> Self {
        Self {
            host,
            draw_list: DrawList::new(),
            rect_renderer: RectRenderer::new(),
            line_renderer: LineRenderer::new(),
        }
    }
}

impl EngineApp for FrontEnd {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // ── Input ─────────────────────────────────────────────────────────
        for event in events_from_input(ctx.input_frame) {
            match self.host.dispatch(&event) {
                Transition::Stay => {}
                Transition::Switch(_) => ctx.runtime.set_title(self.host.window_title()),
                Transition::Exit => {
                    log::info!("exit requested by {} screen", self.host.screen.id());
                    return AppControl::Exit;
                }
            }
        }

        // ── Paint ─────────────────────────────────────────────────────────
        let screen = &self.host.screen;
        self.draw_list.clear();
        screen.paint(&mut self.draw_list);

        // ── Render ────────────────────────────────────────────────────────
        let dl = &mut self.draw_list;
        let r_rect = &mut self.rect_renderer;
        let r_line = &mut self.line_renderer;

        ctx.render_canvas(screen.canvas().viewport(), screen.clear_color(), |rctx, target| {
            r_rect.render(rctx, target, dl);
            r_line.render(rctx, target, dl);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_engine::input::Key;

    fn host(start: ScreenId) -> ScreenHost {
        ScreenHost::new("Delve".into(), start, LiveSize::new(800, 600))
    }

    #[test]
    fn window_title_joins_name_and_screen() {
        assert_eq!(host(ScreenId::MainMenu).window_title(), "Delve - Main Menu");

        let bare = ScreenHost::new(String::new(), ScreenId::Planner, LiveSize::new(720, 720));
        assert_eq!(bare.window_title(), "Dungeon Planner");
    }

    #[test]
    fn start_click_switches_screen() {
        let mut h = host(ScreenId::MainMenu);
        let t = h.dispatch(&ScreenEvent::MouseClick { x: 400.0, y: 250.0 });
        assert_eq!(t, Transition::Switch(ScreenId::Planner));
        assert_eq!(h.screen.id(), ScreenId::Planner);
        assert_eq!(h.window_title(), "Delve - Dungeon Planner");
    }

    #[test]
    fn new_screen_inherits_live_size() {
        let mut h = host(ScreenId::Planner);
        h.dispatch(&ScreenEvent::Resize { width: 1600, height: 600 });
        h.dispatch(&ScreenEvent::KeyPress { key: Key::Backspace });
        assert_eq!(h.screen.id(), ScreenId::MainMenu);

        // Only a hit under the stretched 1600x600 layout.
        let t = h.dispatch(&ScreenEvent::MouseClick { x: 800.0, y: 225.0 });
        assert_eq!(t, Transition::Switch(ScreenId::Planner));
    }

    #[test]
    fn escape_is_passed_through_as_exit() {
        let mut h = host(ScreenId::MainMenu);
        assert_eq!(h.dispatch(&ScreenEvent::KeyPress { key: Key::Escape }), Transition::Exit);
        assert_eq!(h.screen.id(), ScreenId::MainMenu);
    }
}
