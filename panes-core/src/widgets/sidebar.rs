use std::rc::Rc;

use glam::{Vec2, Vec4};

use crate::{
    DrawList, Font, Rect, UpdateContext,
    widgets::{ClickState, LayoutContext, Widget},
};

/// A collapsible side panel with a toggle button and a list of selectable items.
pub struct Sidebar {
    pub position: Vec2,
    pub height: f32,
    pub collapsed_width: f32,
    pub expanded_width: f32,
    pub item_height: f32,
    pub font_size: f32,
    /// Width gained or lost per second while animating.
    pub slide_speed: f32,
    pub color: Vec4,
    pub selected_color: Vec4,
    pub text_color: Vec4,
    items: Vec<String>,
    item_clicks: Vec<ClickState>,
    toggle_click: ClickState,
    expanded: bool,
    width: f32,
    selected: Option<usize>,
    changed: bool,
    font: Rc<Font>,
}

impl Sidebar {
    pub fn new(items: &[&str], collapsed_width: f32, expanded_width: f32, font: &Rc<Font>) -> Self {
        Self {
            position: Vec2::ZERO,
            height: 0.0,
            collapsed_width,
            expanded_width: expanded_width.max(collapsed_width),
            item_height: 36.0,
            font_size: 16.0,
            slide_speed: 1200.0,
            color: Vec4::new(0.12, 0.13, 0.17, 1.0),
            selected_color: Vec4::new(0.35, 0.55, 0.9, 1.0),
            text_color: Vec4::ONE,
            items: items.iter().map(|item| item.to_string()).collect(),
            item_clicks: items.iter().map(|_| ClickState::default()).collect(),
            toggle_click: ClickState::default(),
            expanded: false,
            width: collapsed_width,
            selected: None,
            changed: false,
            font: Rc::clone(font),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The current, possibly animating, width.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_animating(&self) -> bool {
        self.width != self.target_width()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        log::trace!("Sidebar expanded: {}", self.expanded);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    /// Whether the selection changed during the last update.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Selects an item. Returns `false` and keeps the selection for an index out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if self.selected != Some(index) {
            self.selected = Some(index);
            self.changed = true;
        }
        true
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, Vec2::new(self.width, self.height))
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }

    pub fn toggle_rect(&self) -> Rect {
        Rect::new(self.position, Vec2::splat(self.collapsed_width))
    }

    pub fn item_rect(&self, index: usize) -> Rect {
        Rect::from_xywh(
            self.position.x,
            self.position.y + self.collapsed_width + index as f32 * self.item_height,
            self.width,
            self.item_height,
        )
    }

    fn target_width(&self) -> f32 {
        if self.expanded {
            self.expanded_width
        } else {
            self.collapsed_width
        }
    }

    /// How many characters of an item label fit at the current width.
    fn visible_chars(&self) -> usize {
        let char_width = self.font.char_size(self.font_size).x;
        let room = self.width - self.collapsed_width;
        if room <= 0.0 || char_width <= 0.0 {
            0
        } else {
            (room / char_width).floor() as usize
        }
    }
}

impl Widget for Sidebar {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.changed = false;

        self.toggle_click.update(self.toggle_rect(), ctx.mouse, true);
        if self.toggle_click.is_clicked() {
            self.toggle();
        }

        let mut clicked = None;
        for index in 0..self.item_clicks.len() {
            let rect = self.item_rect(index);
            let click = &mut self.item_clicks[index];
            click.update(rect, ctx.mouse, true);
            if click.is_clicked() {
                clicked = Some(index);
            }
        }
        if let Some(index) = clicked {
            self.select(index);
        }

        let target = self.target_width();
        let amount = self.slide_speed * ctx.delta_time;
        self.width = if self.width < target {
            (self.width + amount).min(target)
        } else {
            (self.width - amount).max(target)
        };
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        self.position = ctx.cursor;
        self.height = ctx.max_size.y;
        self.size_hint()
    }

    fn draw(&self, list: &mut DrawList) {
        list.rect(self.bounds(), self.color);

        let char_size = self.font.char_size(self.font_size);
        let toggle = self.toggle_rect();
        if self.toggle_click.is_hovered() {
            list.rect(toggle, self.color * Vec4::new(1.6, 1.6, 1.6, 1.0));
        }
        list.text(
            &self.font,
            "=",
            toggle.center() - char_size / 2.0,
            self.font_size,
            self.text_color,
        );

        let visible = self.visible_chars();
        for (index, item) in self.items.iter().enumerate() {
            let rect = self.item_rect(index);
            if self.selected == Some(index) {
                list.rect(Rect::new(rect.position, Vec2::new(4.0, rect.size.y)), self.selected_color);
            } else if self.item_clicks[index].is_hovered() {
                list.rect(rect, self.color * Vec4::new(1.4, 1.4, 1.4, 1.0));
            }

            // Collapsed rows show their initial only.
            let text: String = if visible == 0 {
                item.chars().take(1).collect()
            } else {
                item.chars().take(visible).collect()
            };
            let text_y = rect.position.y + (rect.size.y - char_size.y) / 2.0;
            let text_x = if visible == 0 {
                rect.position.x + (self.collapsed_width - char_size.x) / 2.0
            } else {
                rect.position.x + self.collapsed_width
            };
            list.text(
                &self.font,
                &text,
                Vec2::new(text_x, text_y),
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

    fn sidebar() -> Sidebar {
        let mut sidebar = Sidebar::new(&["Inbox", "Archive", "Trash"], 40.0, 200.0, &font());
        sidebar.layout(&LayoutContext::window(Vec2::new(800.0, 600.0)));
        sidebar
    }

    fn click(sidebar: &mut Sidebar, input: &mut InputScript, x: f32, y: f32) {
        input.frame().move_to(x, y).press();
        sidebar.update(&input.ctx());
        input.frame().release();
        sidebar.update(&input.ctx());
    }

    #[test]
    fn test_toggle_button_expands_with_animation() {
        let mut sidebar = sidebar();
        let mut input = InputScript::new();
        assert_eq!(sidebar.width(), 40.0);

        click(&mut sidebar, &mut input, 20.0, 20.0);
        assert!(sidebar.is_expanded());
        assert!(sidebar.width() > 40.0 && sidebar.width() < 200.0);
        assert!(sidebar.is_animating());

        for _ in 0..10 {
            input.frame();
            sidebar.update(&input.ctx());
        }
        assert_eq!(sidebar.width(), 200.0);
        assert!(!sidebar.is_animating());

        click(&mut sidebar, &mut input, 20.0, 20.0);
        for _ in 0..10 {
            input.frame();
            sidebar.update(&input.ctx());
        }
        assert_eq!(sidebar.width(), 40.0);
    }

    #[test]
    fn test_item_click_selects() {
        let mut sidebar = sidebar();
        let mut input = InputScript::new();
        assert_eq!(sidebar.selected(), None);

        click(&mut sidebar, &mut input, 20.0, 40.0 + 36.0 + 10.0);
        assert_eq!(sidebar.selected_item(), Some("Archive"));
        assert!(sidebar.is_changed());
        assert!(!sidebar.select(7));
        assert_eq!(sidebar.selected(), Some(1));
    }

    #[test]
    fn test_collapsed_labels_show_initials() {
        let sidebar = sidebar();
        let mut list = DrawList::new(Vec2::new(800.0, 600.0));
        sidebar.draw(&mut list);
        // Background, toggle glyph, then one glyph per item.
        assert_eq!(list.len(), 5);
    }
}
