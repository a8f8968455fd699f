//! Folds SDL events into the per-frame input state of `panes-core`.

use glam::Vec2;
use panes_core::{Key, KeyboardState, MouseButton, MouseState};
use sdl2::{event::Event, keyboard::Keycode};

const KEYS: [(Keycode, Key); 19] = [
    (Keycode::Escape, Key::Escape),
    (Keycode::Return, Key::Return),
    (Keycode::KpEnter, Key::Return),
    (Keycode::Tab, Key::Tab),
    (Keycode::Backspace, Key::Backspace),
    (Keycode::Delete, Key::Delete),
    (Keycode::Left, Key::Left),
    (Keycode::Right, Key::Right),
    (Keycode::Up, Key::Up),
    (Keycode::Down, Key::Down),
    (Keycode::Home, Key::Home),
    (Keycode::End, Key::End),
    (Keycode::PageUp, Key::PageUp),
    (Keycode::PageDown, Key::PageDown),
    (Keycode::Space, Key::Space),
    (Keycode::LShift, Key::LShift),
    (Keycode::RShift, Key::RShift),
    (Keycode::LCtrl, Key::LCtrl),
    (Keycode::RCtrl, Key::RCtrl),
];

/// The toolkit key for an SDL keycode, if the demos use it.
pub fn map_keycode(keycode: Keycode) -> Option<Key> {
    KEYS.iter()
        .find(|(sdl, _)| *sdl == keycode)
        .map(|(_, key)| *key)
}

pub fn map_mouse_button(button: sdl2::mouse::MouseButton) -> Option<MouseButton> {
    match button {
        sdl2::mouse::MouseButton::Left => Some(MouseButton::Left),
        sdl2::mouse::MouseButton::Middle => Some(MouseButton::Middle),
        sdl2::mouse::MouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

/// Keyboard and mouse state owned by the frame loop.
#[derive(Default)]
pub struct Input {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl Input {
    /// Clears edge state before polling the events of a new frame.
    pub fn begin_frame(&mut self) {
        self.keyboard.begin_frame();
        self.mouse.begin_frame();
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::MouseMotion { x, y, .. } => {
                self.mouse.moved_to(Vec2::new(*x as f32, *y as f32));
            }
            Event::MouseWheel { x, y, .. } => {
                self.mouse.scrolled(Vec2::new(*x as f32, *y as f32));
            }
            Event::MouseButtonDown { mouse_btn, x, y, .. } => {
                self.mouse.moved_to(Vec2::new(*x as f32, *y as f32));
                if let Some(button) = map_mouse_button(*mouse_btn) {
                    self.mouse.button_down(button);
                }
            }
            Event::MouseButtonUp { mouse_btn, x, y, .. } => {
                self.mouse.moved_to(Vec2::new(*x as f32, *y as f32));
                if let Some(button) = map_mouse_button(*mouse_btn) {
                    self.mouse.button_up(button);
                }
            }
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => {
                if let Some(key) = map_keycode(*keycode) {
                    self.keyboard.key_down(key, *repeat);
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => {
                if let Some(key) = map_keycode(*keycode) {
                    self.keyboard.key_up(key);
                }
            }
            Event::TextInput { text, .. } => {
                self.keyboard.text(text);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keycode() {
        assert_eq!(map_keycode(Keycode::Escape), Some(Key::Escape));
        assert_eq!(map_keycode(Keycode::KpEnter), Some(Key::Return));
        assert_eq!(map_keycode(Keycode::RCtrl), Some(Key::RCtrl));
        assert_eq!(map_keycode(Keycode::F13), None);
    }

    #[test]
    fn test_events_fold_into_state() {
        let mut input = Input::default();
        input.handle_event(&Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: sdl2::mouse::MouseButton::Left,
            clicks: 1,
            x: 12,
            y: 34,
        });
        input.handle_event(&Event::TextInput {
            timestamp: 0,
            window_id: 0,
            text: "hi".to_string(),
        });
        assert!(input.mouse.is_pressed(MouseButton::Left));
        assert_eq!(input.mouse.position, Vec2::new(12.0, 34.0));
        assert_eq!(input.keyboard.text_input, "hi");

        input.begin_frame();
        assert!(!input.mouse.is_pressed(MouseButton::Left));
        assert!(input.mouse.is_down(MouseButton::Left));
        assert!(input.keyboard.text_input.is_empty());
    }
}
