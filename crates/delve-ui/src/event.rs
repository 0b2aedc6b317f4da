//! Screen-level input events.
//!
//! One frame of engine input is reduced to the three things screens react
//! to. Everything else the platform reports is dropped here.

use delve_engine::input::{
    InputEvent, InputFrame, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
};

use crate::screen::ScreenId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScreenEvent {
    /// New live window size in logical pixels.
    Resize { width: u32, height: u32 },
    /// Left-button press at a live window position (top-left origin).
    MouseClick { x: f32, y: f32 },
    KeyPress { key: Key },
}

/// What the app should do after a screen handled an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Stay,
    Switch(ScreenId),
    Exit,
}

/// Converts one frame of input into screen events, in arrival order.
pub fn events_from_input(frame: &InputFrame) -> Vec<ScreenEvent> {
    frame.events.iter().filter_map(screen_event).collect()
}

fn screen_event(ev: &InputEvent) -> Option<ScreenEvent> {
    match ev {
        InputEvent::Resized(size) => Some(ScreenEvent::Resize {
            width: size.width,
            height: size.height,
        }),

        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            ..
        }) => Some(ScreenEvent::MouseClick { x: *x, y: *y }),

        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
            ..
        } => Some(ScreenEvent::KeyPress { key: *key }),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_engine::input::{Modifiers, PointerMoveEvent, ResizeEvent};

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat,
        }
    }

    #[test]
    fn keeps_arrival_order_and_drops_noise() {
        let mut frame = InputFrame::default();
        frame.push_event(InputEvent::Resized(ResizeEvent { width: 1600, height: 600 }));
        frame.push_event(InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        frame.push_event(button(MouseButton::Left, MouseButtonState::Pressed, 800.0, 225.0));
        frame.push_event(button(MouseButton::Left, MouseButtonState::Released, 800.0, 225.0));
        frame.push_event(key(Key::Escape, KeyState::Pressed, false));
        frame.push_event(InputEvent::PointerLeft);

        assert_eq!(
            events_from_input(&frame),
            vec![
                ScreenEvent::Resize { width: 1600, height: 600 },
                ScreenEvent::MouseClick { x: 800.0, y: 225.0 },
                ScreenEvent::KeyPress { key: Key::Escape },
            ]
        );
    }

    #[test]
    fn ignores_other_buttons_and_key_repeat() {
        let mut frame = InputFrame::default();
        frame.push_event(button(MouseButton::Right, MouseButtonState::Pressed, 1.0, 1.0));
        frame.push_event(key(Key::Escape, KeyState::Pressed, true));
        frame.push_event(key(Key::Escape, KeyState::Released, false));

        assert!(events_from_input(&frame).is_empty());
    }
}
