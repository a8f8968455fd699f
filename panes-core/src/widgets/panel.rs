use glam::{Vec2, Vec4};

use crate::{
    DrawList, Rect, UpdateContext,
    widgets::{LayoutContext, Widget},
};

/// A colored content block, optionally framed.
pub struct Panel {
    pub position: Vec2,
    pub size: Vec2,
    pub color: Vec4,
    pub border: Option<(f32, Vec4)>,
    /// Grow to fill all the space offered during layout instead of keeping `size`.
    pub fill: bool,
}

impl Panel {
    pub fn new(size: Vec2, color: Vec4) -> Self {
        Self {
            position: Vec2::ZERO,
            size,
            color,
            border: None,
            fill: false,
        }
    }

    pub fn with_border(mut self, thickness: f32, color: Vec4) -> Self {
        self.border = Some((thickness, color));
        self
    }

    pub fn filling(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

impl Widget for Panel {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        self.size
    }

    fn update(&mut self, _ctx: &UpdateContext) {}

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        self.position = ctx.cursor;
        if self.fill {
            self.size = ctx.max_size;
        }
        self.size.min(ctx.max_size)
    }

    fn draw(&self, list: &mut DrawList) {
        list.rect(self.bounds(), self.color);
        if let Some((thickness, color)) = self.border {
            list.outline(self.bounds(), thickness, color);
        }
    }
}
