use std::rc::Rc;

use glam::{Vec2, Vec4};

use crate::{
    DrawList, Font, Key, Rect, UpdateContext,
    widgets::{ClickState, LayoutContext, Widget},
};

/// A row of tabs with exactly one selected.
pub struct TabStrip {
    pub position: Vec2,
    pub tab_size: Vec2,
    pub font_size: f32,
    pub color: Vec4,
    pub selected_color: Vec4,
    pub text_color: Vec4,
    labels: Vec<String>,
    clicks: Vec<ClickState>,
    selected: usize,
    changed: bool,
    font: Rc<Font>,
}

impl TabStrip {
    pub fn new(labels: &[&str], tab_size: Vec2, font: &Rc<Font>) -> Self {
        Self {
            position: Vec2::ZERO,
            tab_size,
            font_size: 16.0,
            color: Vec4::new(0.18, 0.19, 0.25, 1.0),
            selected_color: Vec4::new(0.35, 0.55, 0.9, 1.0),
            text_color: Vec4::ONE,
            labels: labels.iter().map(|label| label.to_string()).collect(),
            clicks: labels.iter().map(|_| ClickState::default()).collect(),
            selected: 0,
            changed: false,
            font: Rc::clone(font),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.labels.get(self.selected).map(String::as_str)
    }

    /// Whether the selection changed during the last update.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Selects a tab. Returns `false` and keeps the selection for an index out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            return false;
        }
        if index != self.selected {
            self.selected = index;
            self.changed = true;
        }
        true
    }

    pub fn next(&mut self) {
        if !self.labels.is_empty() {
            self.select((self.selected + 1) % self.labels.len());
        }
    }

    pub fn previous(&mut self) {
        if !self.labels.is_empty() {
            let len = self.labels.len();
            self.select((self.selected + len - 1) % len);
        }
    }

    pub fn tab_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.position + Vec2::new(index as f32 * self.tab_size.x, 0.0),
            self.tab_size,
        )
    }
}

impl Widget for TabStrip {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        Vec2::new(self.tab_size.x * self.labels.len() as f32, self.tab_size.y)
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.changed = false;
        let mut clicked = None;
        for index in 0..self.clicks.len() {
            let rect = self.tab_rect(index);
            let click = &mut self.clicks[index];
            click.update(rect, ctx.mouse, true);
            if click.is_clicked() {
                clicked = Some(index);
            }
        }
        if let Some(index) = clicked {
            self.select(index);
        }

        if ctx.keyboard.is_repeated(Key::Tab) {
            if ctx.keyboard.shift() {
                self.previous();
            } else {
                self.next();
            }
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        self.position = ctx.cursor;
        self.size_hint().min(ctx.max_size)
    }

    fn draw(&self, list: &mut DrawList) {
        for (index, label) in self.labels.iter().enumerate() {
            let rect = self.tab_rect(index);
            let color = if index == self.selected {
                self.selected_color
            } else if self.clicks[index].is_hovered() {
                self.color * Vec4::new(1.3, 1.3, 1.3, 1.0)
            } else {
                self.color
            };
            list.rect(rect.shrink(1.0), color);

            let text_size = self.font.measure_text(label, self.font_size);
            list.text(
                &self.font,
                label,
                rect.position + (rect.size - text_size) / 2.0,
                self.font_size,
                self.text_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::{InputScript, font};

    fn tabs() -> TabStrip {
        let mut tabs = TabStrip::new(&["Home", "Profile", "Settings"], Vec2::new(100.0, 30.0), &font());
        tabs.layout(&LayoutContext::window(Vec2::new(800.0, 600.0)));
        tabs
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut tabs = tabs();
        assert!(tabs.select(2));
        assert!(!tabs.select(3));
        assert_eq!(tabs.selected(), 2);
        assert_eq!(tabs.selected_label(), Some("Settings"));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut tabs = tabs();
        tabs.previous();
        assert_eq!(tabs.selected(), 2);
        tabs.next();
        assert_eq!(tabs.selected(), 0);
    }

    #[test]
    fn test_click_selects_tab() {
        let mut tabs = tabs();
        let mut input = InputScript::new();
        input.move_to(150.0, 10.0).press();
        tabs.update(&input.ctx());
        assert!(!tabs.is_changed());
        input.frame().release();
        tabs.update(&input.ctx());
        assert!(tabs.is_changed());
        assert_eq!(tabs.selected(), 1);

        input.frame();
        tabs.update(&input.ctx());
        assert!(!tabs.is_changed());
    }

    #[test]
    fn test_tab_key_cycles() {
        let mut tabs = tabs();
        let mut input = InputScript::new();
        input.key(Key::Tab);
        tabs.update(&input.ctx());
        assert_eq!(tabs.selected(), 1);

        input.frame();
        input.keyboard.key_down(Key::LShift, false);
        input.key(Key::Tab);
        tabs.update(&input.ctx());
        assert_eq!(tabs.selected(), 0);
    }
}
