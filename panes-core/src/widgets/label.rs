use std::rc::Rc;

use glam::{Vec2, Vec4};

use crate::{
    DrawList, Font, UpdateContext,
    text::RichText,
    widgets::{LayoutContext, Widget},
};

/// Static text. Text containing `%` color codes can be set with [`Label::rich`].
pub struct Label {
    pub text: RichText,
    pub position: Vec2,
    pub font_size: f32,
    pub color: Vec4,
    pub font: Rc<Font>,
}

impl Label {
    pub fn new(text: &str, font_size: f32, color: Vec4, font: &Rc<Font>) -> Self {
        Self {
            text: RichText::plain(text),
            position: Vec2::ZERO,
            font_size,
            color,
            font: Rc::clone(font),
        }
    }

    /// Creates a label from `%` color markup, falling back to the raw text if it is malformed.
    pub fn rich(markup: &str, font_size: f32, color: Vec4, font: &Rc<Font>) -> Self {
        let mut label = Self::new(markup, font_size, color, font);
        match markup.parse::<RichText>() {
            Ok(text) => label.text = text,
            Err(e) => log::warn!("Bad label markup {:?}: {}", markup, e),
        }
        label
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = RichText::plain(text);
    }
}

impl Widget for Label {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        self.font.measure_text(&self.text.stripped(), self.font_size)
    }

    fn update(&mut self, _ctx: &UpdateContext) {
        // Labels are static; no update logic needed.
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        let measured_size = self.size_hint();
        self.position = ctx.cursor;
        measured_size.min(ctx.max_size)
    }

    fn draw(&self, list: &mut DrawList) {
        list.rich_text(
            &self.font,
            &self.text,
            self.position,
            self.font_size,
            self.color,
        );
    }
}
