use glam::{Vec2, Vec4};

use crate::{
    DrawList, Key, MouseButton, Rect, UpdateContext,
    widgets::{LayoutContext, Widget},
};

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_WIDTH: f32 = 12.0;

/// A horizontal slider with a draggable knob.
pub struct Slider {
    pub position: Vec2,
    pub size: Vec2,
    pub min: f32,
    pub max: f32,
    /// Snapping increment. `0.0` means continuous.
    pub step: f32,
    pub track_color: Vec4,
    pub fill_color: Vec4,
    pub knob_color: Vec4,
    value: f32,
    dragging: bool,
    hovered: bool,
    changed: bool,
}

impl Slider {
    pub fn new(min: f32, max: f32, value: f32, size: Vec2) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            position: Vec2::ZERO,
            size,
            min,
            max,
            step: 0.0,
            track_color: Vec4::new(0.2, 0.2, 0.25, 1.0),
            fill_color: Vec4::new(0.35, 0.55, 0.9, 1.0),
            knob_color: Vec4::new(0.9, 0.9, 0.95, 1.0),
            value: value.clamp(min, max),
            dragging: false,
            hovered: false,
            changed: false,
        }
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step.max(0.0);
        self.value = self.snap(self.value);
        self
    }

    pub fn with_fill_color(mut self, color: Vec4) -> Self {
        self.fill_color = color;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value, clamped to the range and snapped to the step.
    pub fn set_value(&mut self, value: f32) {
        let value = self.snap(value);
        if value != self.value {
            self.value = value;
            self.changed = true;
        }
    }

    /// Position of the value within the range, from 0 to 1.
    pub fn fraction(&self) -> f32 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    /// The value under the horizontal screen coordinate `x`.
    pub fn value_at(&self, x: f32) -> f32 {
        let travel = (self.size.x - KNOB_WIDTH).max(1.0);
        let t = ((x - self.position.x - KNOB_WIDTH / 2.0) / travel).clamp(0.0, 1.0);
        self.snap(self.min + t * (self.max - self.min))
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the value changed during the last update.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    fn snap(&self, value: f32) -> f32 {
        let value = value.clamp(self.min, self.max);
        if self.step > 0.0 {
            let steps = ((value - self.min) / self.step).round();
            (self.min + steps * self.step).clamp(self.min, self.max)
        } else {
            value
        }
    }

    fn nudge_amount(&self) -> f32 {
        if self.step > 0.0 {
            self.step
        } else {
            (self.max - self.min) / 100.0
        }
    }

    fn knob_rect(&self) -> Rect {
        let travel = (self.size.x - KNOB_WIDTH).max(0.0);
        Rect::from_xywh(
            self.position.x + travel * self.fraction(),
            self.position.y,
            KNOB_WIDTH,
            self.size.y,
        )
    }
}

impl Widget for Slider {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        self.size
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.changed = false;
        let mouse = ctx.mouse;
        self.hovered = self.contains_point(mouse.position);

        if self.hovered && mouse.is_pressed(MouseButton::Left) {
            self.dragging = true;
        }
        if self.dragging {
            self.set_value(self.value_at(mouse.position.x));
            if !mouse.is_down(MouseButton::Left) {
                self.dragging = false;
            }
        }

        if self.hovered && !self.dragging {
            let keyboard = ctx.keyboard;
            let nudge = self.nudge_amount();
            if keyboard.is_repeated(Key::Left) {
                self.set_value(self.value - nudge);
            }
            if keyboard.is_repeated(Key::Right) {
                self.set_value(self.value + nudge);
            }
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        self.position = ctx.cursor;
        self.size.min(ctx.max_size)
    }

    fn draw(&self, list: &mut DrawList) {
        let track_y = self.position.y + (self.size.y - TRACK_HEIGHT) / 2.0;
        let track = Rect::from_xywh(self.position.x, track_y, self.size.x, TRACK_HEIGHT);
        list.rect(track, self.track_color);

        let knob = self.knob_rect();
        let filled = knob.center().x - self.position.x;
        list.rect(
            Rect::from_xywh(self.position.x, track_y, filled, TRACK_HEIGHT),
            self.fill_color,
        );

        let knob_color = if self.dragging || self.hovered {
            self.knob_color
        } else {
            self.knob_color * Vec4::new(0.85, 0.85, 0.85, 1.0)
        };
        list.rect(knob, knob_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::InputScript;

    // Track from x = 0 to 112, so the knob center travels 6..106 over the range.
    fn slider() -> Slider {
        let mut slider = Slider::new(0.0, 100.0, 50.0, Vec2::new(112.0, 20.0));
        slider.layout(&LayoutContext::window(Vec2::new(800.0, 600.0)));
        slider
    }

    #[test]
    fn test_value_is_clamped_and_snapped() {
        let mut slider = slider().with_step(10.0);
        slider.set_value(144.0);
        assert_eq!(slider.value(), 100.0);
        slider.set_value(-3.0);
        assert_eq!(slider.value(), 0.0);
        slider.set_value(34.0);
        assert_eq!(slider.value(), 30.0);
        assert!(slider.is_changed());
    }

    #[test]
    fn test_press_jumps_and_drag_follows_outside() {
        let mut slider = slider();
        let mut input = InputScript::new();

        input.move_to(31.0, 10.0).press();
        slider.update(&input.ctx());
        assert!(slider.is_dragging());
        assert_eq!(slider.value(), 25.0);

        input.frame().move_to(500.0, 300.0);
        slider.update(&input.ctx());
        assert!(slider.is_dragging());
        assert_eq!(slider.value(), 100.0);

        input.frame().release();
        slider.update(&input.ctx());
        assert!(!slider.is_dragging());

        input.frame().move_to(6.0, 10.0);
        slider.update(&input.ctx());
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn test_press_outside_does_not_drag() {
        let mut slider = slider();
        let mut input = InputScript::new();
        input.move_to(300.0, 10.0).press();
        slider.update(&input.ctx());
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_arrow_keys_nudge_hovered_slider() {
        let mut slider = slider().with_step(5.0);
        let mut input = InputScript::new();

        input.move_to(300.0, 10.0).key(Key::Right);
        slider.update(&input.ctx());
        assert_eq!(slider.value(), 50.0);

        input.frame().move_to(10.0, 10.0).key(Key::Right);
        slider.update(&input.ctx());
        assert_eq!(slider.value(), 55.0);

        input.frame().key(Key::Left).key(Key::Left);
        slider.update(&input.ctx());
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let slider = Slider::new(10.0, 0.0, 20.0, Vec2::new(100.0, 10.0));
        assert_eq!((slider.min, slider.max), (0.0, 10.0));
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.fraction(), 1.0);
    }
}
