use std::rc::Rc;

use glam::{Vec2, Vec4};

use crate::{
    DrawList, Font, Rect, UpdateContext,
    widgets::{ClickState, LayoutContext, Widget},
};

/// Fill colors of a button in each of its states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    pub idle: Vec4,
    pub hover: Vec4,
    pub pressed: Vec4,
    pub disabled: Vec4,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            idle: Vec4::new(0.25, 0.27, 0.35, 1.0),
            hover: Vec4::new(0.33, 0.36, 0.47, 1.0),
            pressed: Vec4::new(0.17, 0.18, 0.24, 1.0),
            disabled: Vec4::new(0.2, 0.2, 0.2, 0.6),
        }
    }
}

impl ButtonColors {
    /// Derives hover and pressed shades from a single base color.
    pub fn from_base(base: Vec4) -> Self {
        let rgb = base.truncate();
        Self {
            idle: base,
            hover: (rgb * 1.25).min(glam::Vec3::ONE).extend(base.w),
            pressed: (rgb * 0.7).extend(base.w),
            disabled: Vec4::new(0.2, 0.2, 0.2, 0.6),
        }
    }
}

pub struct Button {
    pub position: Vec2,
    pub size: Vec2,
    pub label: String,
    pub label_color: Vec4,
    pub label_font_size: f32,
    pub colors: ButtonColors,
    pub disabled: bool,
    state: ClickState,
    font: Rc<Font>,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(
        label: &str,
        label_color: Vec4,
        label_font_size: f32,
        size: Vec2,
        font: &Rc<Font>,
    ) -> Self {
        Self {
            position: Vec2::ZERO,
            size,
            label: label.to_string(),
            label_color,
            label_font_size,
            colors: ButtonColors::default(),
            disabled: false,
            state: ClickState::default(),
            font: Rc::clone(font),
            on_click: None,
        }
    }

    pub fn with_colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    /// Registers a callback invoked on every click.
    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }

    /// The fill color for the current state.
    pub fn fill_color(&self) -> Vec4 {
        if self.disabled {
            self.colors.disabled
        } else if self.state.is_down() {
            self.colors.pressed
        } else if self.state.is_hovered() {
            self.colors.hover
        } else {
            self.colors.idle
        }
    }

    pub fn is_down(&self) -> bool {
        self.state.is_down() && !self.disabled
    }

    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed() && !self.disabled
    }

    pub fn is_released(&self) -> bool {
        self.state.is_released() && !self.disabled
    }

    pub fn is_clicked(&self) -> bool {
        self.state.is_clicked() && !self.disabled
    }

    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }
}

impl Widget for Button {
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
        self.state.update(self.bounds(), ctx.mouse, !self.disabled);
        if self.state.is_clicked() {
            log::trace!("Button '{}' clicked", self.label);
            if let Some(callback) = self.on_click.as_mut() {
                callback();
            }
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        let measured_size = self.size_hint().min(ctx.max_size);
        self.position = ctx.cursor;
        measured_size
    }

    fn draw(&self, list: &mut DrawList) {
        list.rect(self.bounds(), self.fill_color());
        let text_size = self.font.measure_text(&self.label, self.label_font_size);
        let label_color = if self.disabled {
            self.label_color * Vec4::new(1.0, 1.0, 1.0, 0.5)
        } else {
            self.label_color
        };
        list.text(
            &self.font,
            &self.label,
            self.position + (self.size - text_size) / 2.0,
            self.label_font_size,
            label_color,
        );
    }
}
