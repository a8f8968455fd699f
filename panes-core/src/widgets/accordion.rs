use std::rc::Rc;

use glam::{Vec2, Vec4};

use crate::{
    DrawList, Font, Rect, UpdateContext,
    widgets::{ClickState, LayoutContext, Widget},
};

/// One collapsible section of an [`Accordion`].
pub struct Section {
    pub title: String,
    pub body: String,
    pub body_height: f32,
    expanded: bool,
    /// How far the section is open, from 0 to 1.
    openness: f32,
    header: ClickState,
}

impl Section {
    pub fn new(title: &str, body: &str, body_height: f32) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            body_height,
            expanded: false,
            openness: 0.0,
            header: ClickState::default(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn openness(&self) -> f32 {
        self.openness
    }

    fn visible_body_height(&self) -> f32 {
        self.body_height * self.openness
    }
}

/// A vertical list of sections whose bodies open and close when their header is clicked.
pub struct Accordion {
    pub position: Vec2,
    pub width: f32,
    pub header_height: f32,
    pub font_size: f32,
    /// Keep at most one section open.
    pub exclusive: bool,
    /// Openness gained or lost per second.
    pub open_speed: f32,
    pub header_color: Vec4,
    pub body_color: Vec4,
    pub text_color: Vec4,
    sections: Vec<Section>,
    font: Rc<Font>,
}

impl Accordion {
    pub fn new(width: f32, header_height: f32, font: &Rc<Font>) -> Self {
        Self {
            position: Vec2::ZERO,
            width,
            header_height,
            font_size: 16.0,
            exclusive: false,
            open_speed: 6.0,
            header_color: Vec4::new(0.22, 0.24, 0.32, 1.0),
            body_color: Vec4::new(0.14, 0.15, 0.2, 1.0),
            text_color: Vec4::ONE,
            sections: Vec::new(),
            font: Rc::clone(font),
        }
    }

    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.sections.get(index).is_some_and(Section::is_expanded)
    }

    /// Flips a section open or closed. Returns `false` for an index out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.sections.get(index) {
            Some(section) if section.expanded => self.collapse(index),
            Some(_) => self.expand(index),
            None => false,
        }
    }

    pub fn expand(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            return false;
        }
        if self.exclusive {
            for section in &mut self.sections {
                section.expanded = false;
            }
        }
        self.sections[index].expanded = true;
        true
    }

    pub fn collapse(&mut self, index: usize) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.expanded = false;
                true
            }
            None => false,
        }
    }

    /// Whether any section is still opening or closing.
    pub fn is_animating(&self) -> bool {
        self.sections.iter().any(|section| {
            let target = if section.expanded { 1.0 } else { 0.0 };
            section.openness != target
        })
    }

    /// Header rectangles, top to bottom, at the current animation state.
    pub fn header_rects(&self) -> Vec<Rect> {
        let mut y = self.position.y;
        self.sections
            .iter()
            .map(|section| {
                let rect = Rect::from_xywh(self.position.x, y, self.width, self.header_height);
                y += self.header_height + section.visible_body_height();
                rect
            })
            .collect()
    }
}

impl Widget for Accordion {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        let height = self
            .sections
            .iter()
            .map(|section| self.header_height + section.visible_body_height())
            .sum();
        Vec2::new(self.width, height)
    }

    fn update(&mut self, ctx: &UpdateContext) {
        let headers = self.header_rects();
        for (section, rect) in self.sections.iter_mut().zip(headers) {
            section.header.update(rect, ctx.mouse, true);
        }
        if let Some(index) = self
            .sections
            .iter()
            .position(|section| section.header.is_clicked())
        {
            log::trace!("Accordion section '{}' toggled", self.sections[index].title);
            self.toggle(index);
        }

        let amount = self.open_speed * ctx.delta_time;
        for section in &mut self.sections {
            section.openness = if section.expanded {
                (section.openness + amount).min(1.0)
            } else {
                (section.openness - amount).max(0.0)
            };
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        self.position = ctx.cursor;
        self.size_hint()
    }

    fn draw(&self, list: &mut DrawList) {
        let char_size = self.font.char_size(self.font_size);
        for (section, rect) in self.sections.iter().zip(self.header_rects()) {
            let color = if section.header.is_hovered() {
                self.header_color * Vec4::new(1.2, 1.2, 1.2, 1.0)
            } else {
                self.header_color
            };
            list.rect(rect, color);

            let marker = if section.expanded { "-" } else { "+" };
            let text_y = rect.position.y + (self.header_height - char_size.y) / 2.0;
            list.text(
                &self.font,
                marker,
                Vec2::new(rect.position.x + 8.0, text_y),
                self.font_size,
                self.text_color,
            );
            list.text(
                &self.font,
                &section.title,
                Vec2::new(rect.position.x + 8.0 + char_size.x * 2.0, text_y),
                self.font_size,
                self.text_color,
            );

            let body_height = section.visible_body_height();
            if body_height > 0.0 {
                let body = Rect::from_xywh(
                    rect.position.x,
                    rect.max().y,
                    self.width,
                    body_height,
                );
                list.rect(body, self.body_color);
                // Body text appears once there is room for its first line.
                if body_height >= char_size.y + 8.0 {
                    list.text(
                        &self.font,
                        &section.body,
                        body.position + Vec2::splat(8.0),
                        self.font_size,
                        self.text_color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::{InputScript, font};

    fn make_accordion(exclusive: bool) -> Accordion {
        let mut accordion = Accordion::new(200.0, 30.0, &font()).exclusive(exclusive);
        accordion.add_section(Section::new("One", "first", 60.0));
        accordion.add_section(Section::new("Two", "second", 60.0));
        accordion.add_section(Section::new("Three", "third", 60.0));
        accordion.layout(&LayoutContext::window(Vec2::new(800.0, 600.0)));
        accordion
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut accordion = make_accordion(false);
        assert!(!accordion.toggle(3));
        assert!((0..3).all(|i| !accordion.is_expanded(i)));
    }

    #[test]
    fn test_exclusive_keeps_one_open() {
        let mut accordion = make_accordion(true);
        accordion.toggle(0);
        accordion.toggle(2);
        assert!(!accordion.is_expanded(0));
        assert!(accordion.is_expanded(2));

        let mut free = make_accordion(false);
        free.toggle(0);
        free.toggle(2);
        assert!(free.is_expanded(0) && free.is_expanded(2));
    }

    #[test]
    fn test_header_click_toggles_and_animates() {
        let mut accordion = make_accordion(false);
        let mut input = InputScript::new();

        input.move_to(50.0, 40.0).press();
        accordion.update(&input.ctx());
        input.frame().release();
        accordion.update(&input.ctx());
        assert!(accordion.is_expanded(1));
        assert!(accordion.is_animating());

        for _ in 0..20 {
            input.frame();
            accordion.update(&input.ctx());
        }
        assert_eq!(accordion.sections()[1].openness(), 1.0);
        assert!(!accordion.is_animating());
        assert_eq!(accordion.size_hint(), Vec2::new(200.0, 150.0));
        assert_eq!(accordion.header_rects()[2].position.y, 120.0);
    }
}
