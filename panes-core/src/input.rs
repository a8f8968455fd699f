//! Per-frame keyboard and mouse state.
//!
//! The host folds its window events into these structs. Level state (`down`) persists across
//! frames while edge state (`pressed`, `released`, `repeated`, text and deltas) only lives for
//! the frame it happened in and is cleared by [`KeyboardState::begin_frame`] /
//! [`MouseState::begin_frame`].

use fxhash::FxHashSet;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Keys the widgets care about. Everything else arrives as text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Return,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    LShift,
    RShift,
    LCtrl,
    RCtrl,
}

/// The current state of the keyboard.
#[derive(Default, Debug)]
pub struct KeyboardState {
    pub down: FxHashSet<Key>,
    pub pressed: FxHashSet<Key>,
    pub released: FxHashSet<Key>,
    /// Keys that went down this frame, including OS key repeats.
    pub repeated: FxHashSet<Key>,
    pub text_input: String,
}

impl KeyboardState {
    /// Clears all edge state. Call once before polling the events of a new frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.repeated.clear();
        self.text_input.clear();
    }

    pub fn key_down(&mut self, key: Key, repeat: bool) {
        self.repeated.insert(key);
        if !repeat {
            self.down.insert(key);
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.down.remove(&key);
        self.released.insert(key);
    }

    pub fn text(&mut self, text: &str) {
        self.text_input.push_str(text);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_repeated(&self, key: Key) -> bool {
        self.repeated.contains(&key)
    }

    pub fn shift(&self) -> bool {
        self.is_down(Key::LShift) || self.is_down(Key::RShift)
    }

    pub fn ctrl(&self) -> bool {
        self.is_down(Key::LCtrl) || self.is_down(Key::RCtrl)
    }
}

/// The current state of the mouse.
#[derive(Default, Debug)]
pub struct MouseState {
    pub position: Vec2,
    pub delta: Vec2,
    pub down: FxHashSet<MouseButton>,
    pub pressed: FxHashSet<MouseButton>,
    pub released: FxHashSet<MouseButton>,
    pub scroll_delta: Vec2,
}

impl MouseState {
    /// Clears all edge state. Call once before polling the events of a new frame.
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
        self.pressed.clear();
        self.released.clear();
    }

    pub fn moved_to(&mut self, position: Vec2) {
        self.delta += position - self.position;
        self.position = position;
    }

    pub fn button_down(&mut self, button: MouseButton) {
        self.down.insert(button);
        self.pressed.insert(button);
    }

    pub fn button_up(&mut self, button: MouseButton) {
        self.down.remove(&button);
        self.released.insert(button);
    }

    pub fn scrolled(&mut self, amount: Vec2) {
        self.scroll_delta += amount;
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        self.down.contains(&button)
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }

    pub fn is_released(&self, button: MouseButton) -> bool {
        self.released.contains(&button)
    }
}

/// Context provided to screens and widgets during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub mouse: &'a MouseState,
    pub delta_time: f32,
    pub window_size: Vec2,
}

impl<'a> UpdateContext<'a> {
    /// Creates a new `UpdateContext` from the given keyboard and mouse states, delta time and
    /// window size.
    pub fn new(
        keyboard: &'a KeyboardState,
        mouse: &'a MouseState,
        delta_time: f32,
        window_size: Vec2,
    ) -> Self {
        Self {
            keyboard,
            mouse,
            delta_time,
            window_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_clear_between_frames() {
        let mut mouse = MouseState::default();
        mouse.button_down(MouseButton::Left);
        mouse.moved_to(Vec2::new(5.0, 5.0));
        assert!(mouse.is_pressed(MouseButton::Left));
        assert_eq!(mouse.delta, Vec2::new(5.0, 5.0));

        mouse.begin_frame();
        assert!(!mouse.is_pressed(MouseButton::Left));
        assert!(mouse.is_down(MouseButton::Left));
        assert_eq!(mouse.delta, Vec2::ZERO);

        mouse.button_up(MouseButton::Left);
        assert!(mouse.is_released(MouseButton::Left));
        assert!(!mouse.is_down(MouseButton::Left));
    }

    #[test]
    fn test_key_repeat_is_not_a_press() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Key::Left, false);
        keyboard.begin_frame();
        keyboard.key_down(Key::Left, true);
        assert!(keyboard.is_repeated(Key::Left));
        assert!(!keyboard.is_pressed(Key::Left));
        assert!(keyboard.is_down(Key::Left));
    }

    #[test]
    fn test_text_accumulates_within_frame() {
        let mut keyboard = KeyboardState::default();
        keyboard.text("ab");
        keyboard.text("c");
        assert_eq!(keyboard.text_input, "abc");
        keyboard.begin_frame();
        assert!(keyboard.text_input.is_empty());
    }
}
