//! Draw lists.
//!
//! Widgets and screens never talk to the GPU. They record [`DrawCommand`]s into a
//! [`DrawList`], which the host renderer batches and submits once per frame.

use glam::{Vec2, Vec4};

use crate::{Rect, text::RichText};

/// The rendering mode for a UI element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UIRenderMode {
    /// A solid colored quad.
    Color(Vec4),
    /// A glyph of the host's font atlas, tinted with the color.
    Glyph(char, Vec4),
}

/// A draw command for rendering a UI element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub rect: [Vec2; 2],
    pub mode: UIRenderMode,
}

/// A monospace font described only by its cell size. The host owns the actual glyph atlas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    char_size: Vec2,
}

impl Font {
    pub fn new(char_size: Vec2) -> Self {
        Self { char_size }
    }

    /// The size of one character cell when drawn at `font_size` pixels tall.
    pub fn char_size(&self, font_size: f32) -> Vec2 {
        Vec2::new(font_size * (self.char_size.x / self.char_size.y), font_size)
    }

    pub fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        let char_size = self.char_size(font_size);
        let mut lines = 0;
        let mut max_columns = 0;
        for line in text.split('\n') {
            lines += 1;
            max_columns = max_columns.max(line.chars().count());
        }
        Vec2::new(
            max_columns as f32 * char_size.x,
            lines as f32 * char_size.y,
        )
    }

    /// Glyph commands for `text` with its top left corner at the origin.
    pub fn text(&self, text: &str, font_size: f32, color: Vec4) -> Vec<DrawCommand> {
        self.rich_text(&RichText::plain(text), font_size, color)
    }

    /// Glyph commands for colored spans with their top left corner at the origin.
    pub fn rich_text(&self, text: &RichText, font_size: f32, color: Vec4) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        let mut cursor = Vec2::ZERO;
        let char_size = self.char_size(font_size);

        for span in &text.spans {
            let span_color = span.color.resolve(color);
            for c in span.text.chars() {
                if c == '\n' {
                    cursor.x = 0.0;
                    cursor.y += char_size.y;
                    continue;
                }
                if !c.is_whitespace() {
                    commands.push(DrawCommand {
                        rect: [cursor, cursor + char_size],
                        mode: UIRenderMode::Glyph(c, span_color),
                    });
                }
                cursor.x += char_size.x;
            }
        }

        commands
    }
}

/// A recorded frame of draw commands.
pub struct DrawList {
    size: Vec2,
    offset: Vec2,
    saved_offsets: Vec<Vec2>,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty draw list for a surface of the given size.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            offset: Vec2::ZERO,
            saved_offsets: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// The size of the surface being drawn to.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The translation currently applied to every added command.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clears all commands and offsets and resizes the surface for the next frame.
    pub fn reset(&mut self, size: Vec2) {
        self.size = size;
        self.offset = Vec2::ZERO;
        self.saved_offsets.clear();
        self.commands.clear();
    }

    pub fn add_command(&mut self, mut command: DrawCommand) {
        command.rect[0] += self.offset;
        command.rect[1] += self.offset;
        self.commands.push(command);
    }

    pub fn rect(&mut self, rect: Rect, color: Vec4) {
        self.add_command(DrawCommand {
            rect: [rect.min(), rect.max()],
            mode: UIRenderMode::Color(color),
        });
    }

    /// Draws the border of `rect` with lines `thickness` pixels wide, inside the rect.
    pub fn outline(&mut self, rect: Rect, thickness: f32, color: Vec4) {
        let Rect { position, size } = rect;
        self.rect(Rect::new(position, Vec2::new(size.x, thickness)), color);
        self.rect(
            Rect::new(
                position + Vec2::new(0.0, size.y - thickness),
                Vec2::new(size.x, thickness),
            ),
            color,
        );
        self.rect(Rect::new(position, Vec2::new(thickness, size.y)), color);
        self.rect(
            Rect::new(
                position + Vec2::new(size.x - thickness, 0.0),
                Vec2::new(thickness, size.y),
            ),
            color,
        );
    }

    pub fn text(&mut self, font: &Font, text: &str, position: Vec2, font_size: f32, color: Vec4) {
        for mut command in font.text(text, font_size, color) {
            command.rect[0] += position;
            command.rect[1] += position;
            self.add_command(command);
        }
    }

    pub fn rich_text(
        &mut self,
        font: &Font,
        text: &RichText,
        position: Vec2,
        font_size: f32,
        color: Vec4,
    ) {
        for mut command in font.rich_text(text, font_size, color) {
            command.rect[0] += position;
            command.rect[1] += position;
            self.add_command(command);
        }
    }

    pub fn push_offset(&mut self, offset: Vec2) {
        self.saved_offsets.push(self.offset);
        self.offset += offset;
    }

    pub fn pop_offset(&mut self) {
        self.offset = self.saved_offsets.pop().unwrap_or(Vec2::ZERO);
    }

    /// Runs `f` with every command it adds translated by `offset`.
    pub fn with_offset(&mut self, offset: Vec2, f: impl FnOnce(&mut Self)) {
        self.push_offset(offset);
        f(self);
        self.pop_offset();
    }
}
