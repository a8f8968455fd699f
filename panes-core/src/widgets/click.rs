//! Press/release tracking shared by everything clickable.

use crate::{MouseButton, MouseState, Rect};

/// Per-frame pointer state of a clickable area.
///
/// A click fires on release of the left button when the press started inside the same area
/// and the cursor is still inside on release.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickState {
    hovered: bool,
    armed: bool,
    down: bool,
    pressed: bool,
    released: bool,
    clicked: bool,
}

impl ClickState {
    pub fn update(&mut self, bounds: Rect, mouse: &MouseState, enabled: bool) {
        self.hovered = bounds.contains_point(mouse.position);
        self.pressed = false;
        self.released = false;
        self.clicked = false;

        if !enabled {
            self.armed = false;
            self.down = false;
            return;
        }

        if self.hovered && mouse.is_pressed(MouseButton::Left) {
            self.armed = true;
            self.pressed = true;
        }
        if mouse.is_released(MouseButton::Left) {
            if self.armed {
                self.released = true;
                self.clicked = self.hovered;
            }
            self.armed = false;
        }
        self.down = self.armed && self.hovered && mouse.is_down(MouseButton::Left);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// True while the press that started inside is held and the cursor is inside.
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// True on the frame the press started inside.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True on the frame a press that started inside was let go, wherever the cursor is.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// True on the frame a click completed.
    pub fn is_clicked(&self) -> bool {
        self.clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::InputScript;

    fn bounds() -> Rect {
        Rect::from_xywh(0.0, 0.0, 100.0, 40.0)
    }

    #[test]
    fn test_press_and_release_inside_clicks() {
        let mut input = InputScript::new();
        let mut state = ClickState::default();

        input.move_to(10.0, 10.0).press();
        state.update(bounds(), &input.mouse, true);
        assert!(state.is_pressed());
        assert!(state.is_down());
        assert!(!state.is_clicked());

        input.frame().release();
        state.update(bounds(), &input.mouse, true);
        assert!(state.is_clicked());
        assert!(state.is_released());

        input.frame();
        state.update(bounds(), &input.mouse, true);
        assert!(!state.is_clicked());
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let mut input = InputScript::new();
        let mut state = ClickState::default();

        input.move_to(10.0, 10.0).press();
        state.update(bounds(), &input.mouse, true);
        input.frame().move_to(300.0, 10.0).release();
        state.update(bounds(), &input.mouse, true);
        assert!(state.is_released());
        assert!(!state.is_clicked());
    }

    #[test]
    fn test_press_outside_release_inside_does_not_click() {
        let mut input = InputScript::new();
        let mut state = ClickState::default();

        input.move_to(300.0, 10.0).press();
        state.update(bounds(), &input.mouse, true);
        input.frame().move_to(10.0, 10.0).release();
        state.update(bounds(), &input.mouse, true);
        assert!(!state.is_clicked());
    }

    #[test]
    fn test_disabled_never_clicks() {
        let mut input = InputScript::new();
        let mut state = ClickState::default();

        input.move_to(10.0, 10.0).press();
        state.update(bounds(), &input.mouse, false);
        input.frame().release();
        state.update(bounds(), &input.mouse, false);
        assert!(!state.is_clicked());
        assert!(state.is_hovered());
    }

    #[test]
    fn test_drag_out_and_back_still_clicks() {
        let mut input = InputScript::new();
        let mut state = ClickState::default();

        input.move_to(10.0, 10.0).press();
        state.update(bounds(), &input.mouse, true);
        input.frame().move_to(300.0, 10.0);
        state.update(bounds(), &input.mouse, true);
        assert!(!state.is_down());
        input.frame().move_to(20.0, 20.0).release();
        state.update(bounds(), &input.mouse, true);
        assert!(state.is_clicked());
    }
}
