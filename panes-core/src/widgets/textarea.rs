//! Multi-line editable text with a caret.
//!
//! Caret columns count characters, not bytes, so multi-byte text edits safely.

use std::rc::Rc;

use glam::{Vec2, Vec4};

use crate::{
    DrawList, Font, Key, MouseButton, Rect, UpdateContext,
    widgets::{LayoutContext, Widget},
};

const PADDING: f32 = 8.0;
const CARET_WIDTH: f32 = 2.0;
const BLINK_PERIOD: f32 = 1.0;

/// A caret position as a line index and a character column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Caret {
    pub line: usize,
    pub column: usize,
}

impl Caret {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

pub struct TextArea {
    pub position: Vec2,
    pub size: Vec2,
    pub font_size: f32,
    pub background: Vec4,
    pub text_color: Vec4,
    pub caret_color: Vec4,
    pub focus_color: Vec4,
    lines: Vec<String>,
    caret: Caret,
    /// Index of the first visible line.
    scroll: usize,
    focused: bool,
    blink: f32,
    font: Rc<Font>,
}

/// Byte offset of the `column`th character of `line`, or the line length past the end.
fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(index, _)| index)
}

impl TextArea {
    pub fn new(text: &str, size: Vec2, font: &Rc<Font>) -> Self {
        let mut area = Self {
            position: Vec2::ZERO,
            size,
            font_size: 16.0,
            background: Vec4::new(0.1, 0.1, 0.12, 1.0),
            text_color: Vec4::new(0.9, 0.9, 0.9, 1.0),
            caret_color: Vec4::new(1.0, 0.85, 0.3, 1.0),
            focus_color: Vec4::new(0.35, 0.55, 0.9, 1.0),
            lines: Vec::new(),
            caret: Caret::default(),
            scroll: 0,
            focused: false,
            blink: 0.0,
            font: Rc::clone(font),
        };
        area.set_text(text);
        area
    }

    /// Replaces the whole text and moves the caret to the start.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        self.caret = Caret::default();
        self.scroll = 0;
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Moves the caret, clamping the line and column to the text.
    pub fn set_caret(&mut self, caret: Caret) {
        let line = caret.line.min(self.lines.len() - 1);
        let column = caret.column.min(self.line_len(line));
        self.caret = Caret::new(line, column);
        self.blink = 0.0;
        self.scroll_to_caret();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.blink = 0.0;
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }

    /// The caret position nearest to a point in window coordinates.
    pub fn caret_at_point(&self, point: Vec2) -> Caret {
        let char_size = self.font.char_size(self.font_size);
        let local = point - self.position - Vec2::splat(PADDING);

        let row = (local.y / char_size.y).floor().max(0.0) as usize;
        let line = (self.scroll + row).min(self.lines.len() - 1);
        let column = (local.x / char_size.x).round().max(0.0) as usize;
        Caret::new(line, column.min(self.line_len(line)))
    }

    /// Number of whole lines that fit inside the area.
    pub fn visible_lines(&self) -> usize {
        let line_height = self.font.char_size(self.font_size).y;
        (((self.size.y - PADDING * 2.0) / line_height).floor() as usize).max(1)
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    fn scroll_to_caret(&mut self) {
        let visible = self.visible_lines();
        if self.caret.line < self.scroll {
            self.scroll = self.caret.line;
        } else if self.caret.line >= self.scroll + visible {
            self.scroll = self.caret.line + 1 - visible;
        }
    }

    fn move_left(&mut self) {
        let Caret { line, column } = self.caret;
        if column > 0 {
            self.set_caret(Caret::new(line, column - 1));
        } else if line > 0 {
            self.set_caret(Caret::new(line - 1, self.line_len(line - 1)));
        }
    }

    fn move_right(&mut self) {
        let Caret { line, column } = self.caret;
        if column < self.line_len(line) {
            self.set_caret(Caret::new(line, column + 1));
        } else if line + 1 < self.lines.len() {
            self.set_caret(Caret::new(line + 1, 0));
        }
    }

    fn move_vertically(&mut self, lines: isize) {
        let line = self.caret.line.saturating_add_signed(lines);
        self.set_caret(Caret::new(line, self.caret.column));
    }

    /// Inserts text at the caret. Newlines split the line.
    pub fn insert(&mut self, text: &str) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            let part: String = part.chars().filter(|c| !c.is_control()).collect();
            if part.is_empty() {
                continue;
            }
            let Caret { line, column } = self.caret;
            let index = byte_index(&self.lines[line], column);
            self.lines[line].insert_str(index, &part);
            self.set_caret(Caret::new(line, column + part.chars().count()));
        }
    }

    pub fn newline(&mut self) {
        let Caret { line, column } = self.caret;
        let index = byte_index(&self.lines[line], column);
        let rest = self.lines[line].split_off(index);
        self.lines.insert(line + 1, rest);
        self.set_caret(Caret::new(line + 1, 0));
    }

    /// Deletes the character before the caret, joining lines at a line start.
    pub fn backspace(&mut self) {
        let Caret { line, column } = self.caret;
        if column > 0 {
            let index = byte_index(&self.lines[line], column - 1);
            self.lines[line].remove(index);
            self.set_caret(Caret::new(line, column - 1));
        } else if line > 0 {
            let current = self.lines.remove(line);
            let previous_len = self.line_len(line - 1);
            self.lines[line - 1].push_str(&current);
            self.set_caret(Caret::new(line - 1, previous_len));
        }
    }

    /// Deletes the character after the caret, joining lines at a line end.
    pub fn delete(&mut self) {
        let Caret { line, column } = self.caret;
        if column < self.line_len(line) {
            let index = byte_index(&self.lines[line], column);
            self.lines[line].remove(index);
        } else if line + 1 < self.lines.len() {
            let next = self.lines.remove(line + 1);
            self.lines[line].push_str(&next);
        }
    }

    fn handle_keys(&mut self, ctx: &UpdateContext) {
        let keyboard = ctx.keyboard;
        let page = self.visible_lines() as isize;

        if keyboard.is_repeated(Key::Left) {
            self.move_left();
        }
        if keyboard.is_repeated(Key::Right) {
            self.move_right();
        }
        if keyboard.is_repeated(Key::Up) {
            self.move_vertically(-1);
        }
        if keyboard.is_repeated(Key::Down) {
            self.move_vertically(1);
        }
        if keyboard.is_repeated(Key::PageUp) {
            self.move_vertically(-page);
        }
        if keyboard.is_repeated(Key::PageDown) {
            self.move_vertically(page);
        }
        if keyboard.is_repeated(Key::Home) {
            self.set_caret(Caret::new(self.caret.line, 0));
        }
        if keyboard.is_repeated(Key::End) {
            self.set_caret(Caret::new(self.caret.line, usize::MAX));
        }
        if keyboard.is_repeated(Key::Backspace) {
            self.backspace();
        }
        if keyboard.is_repeated(Key::Delete) {
            self.delete();
        }
        if keyboard.is_repeated(Key::Return) {
            self.newline();
        }
        if !keyboard.text_input.is_empty() {
            self.insert(&keyboard.text_input);
        }
    }
}

impl Widget for TextArea {
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
        let mouse = ctx.mouse;
        if mouse.is_pressed(MouseButton::Left) {
            if self.contains_point(mouse.position) {
                self.set_focused(true);
                self.set_caret(self.caret_at_point(mouse.position));
            } else {
                self.set_focused(false);
            }
        }

        if self.contains_point(mouse.position) && mouse.scroll_delta.y != 0.0 {
            let max_scroll = self.lines.len().saturating_sub(self.visible_lines());
            let lines = -mouse.scroll_delta.y.round() as isize * 3;
            self.scroll = self.scroll.saturating_add_signed(lines).min(max_scroll);
        }

        if self.focused {
            self.blink = (self.blink + ctx.delta_time) % BLINK_PERIOD;
            self.handle_keys(ctx);
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        self.position = ctx.cursor;
        self.size = self.size.min(ctx.max_size);
        self.scroll_to_caret();
        self.size
    }

    fn draw(&self, list: &mut DrawList) {
        list.rect(self.bounds(), self.background);
        if self.focused {
            list.outline(self.bounds(), 2.0, self.focus_color);
        }

        let char_size = self.font.char_size(self.font_size);
        let max_columns = (((self.size.x - PADDING * 2.0) / char_size.x).floor()).max(0.0) as usize;
        let origin = self.position + Vec2::splat(PADDING);

        for (row, line) in self
            .lines
            .iter()
            .skip(self.scroll)
            .take(self.visible_lines())
            .enumerate()
        {
            let visible: String = line.chars().take(max_columns).collect();
            list.text(
                &self.font,
                &visible,
                origin + Vec2::new(0.0, row as f32 * char_size.y),
                self.font_size,
                self.text_color,
            );
        }

        let caret_row = self.caret.line.checked_sub(self.scroll);
        let caret_visible = self.focused && self.blink < BLINK_PERIOD / 2.0;
        if let Some(row) = caret_row.filter(|row| caret_visible && *row < self.visible_lines()) {
            let caret = Rect::from_xywh(
                origin.x + self.caret.column as f32 * char_size.x - CARET_WIDTH / 2.0,
                origin.y + row as f32 * char_size.y,
                CARET_WIDTH,
                char_size.y,
            );
            list.rect(caret, self.caret_color);
        }
    }
}
