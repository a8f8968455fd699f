//! An editable text area with click-to-place caret.

use glam::Vec2;
use panes_core::{
    DrawList, Screen, ScreenSwitch, UpdateContext,
    widgets::{Label, LayoutContext, TextArea, Widget},
};

use super::{BACKGROUND, Demo, DemoContext, Header, MUTED_TEXT, draw_background};

const MARGIN: f32 = 24.0;
const STATUS_HEIGHT: f32 = 32.0;

pub struct TextAreaScreen {
    header: Header,
    area: TextArea,
    status: Label,
    window_size: Vec2,
}

impl TextAreaScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let mut area = TextArea::new(&ctx.text, Vec2::ZERO, &ctx.font);
        area.set_focused(true);

        let mut screen = Self {
            header: Header::new(Demo::TextArea.title(), &ctx.font),
            area,
            status: Label::new("", 16.0, MUTED_TEXT, &ctx.font),
            window_size: ctx.window_size,
        };
        screen.sync_status();
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);

        let top = Header::HEIGHT + MARGIN;
        self.area.size = Vec2::new(
            self.window_size.x - MARGIN * 2.0,
            self.window_size.y - top - STATUS_HEIGHT - MARGIN,
        )
        .max(Vec2::ZERO);
        self.area.layout(&LayoutContext {
            max_size: self.area.size,
            cursor: Vec2::new(MARGIN, top),
        });

        self.status.layout(&LayoutContext {
            max_size: self.window_size,
            cursor: Vec2::new(MARGIN, self.window_size.y - STATUS_HEIGHT),
        });
    }

    fn sync_status(&mut self) {
        let caret = self.area.caret();
        self.status.set_text(&format!(
            "Line {}, column {}  |  {} lines{}",
            caret.line + 1,
            caret.column + 1,
            self.area.lines().len(),
            if self.area.is_focused() { "" } else { "  |  click to edit" }
        ));
    }
}

impl Screen for TextAreaScreen {
    fn title(&self) -> &str {
        Demo::TextArea.title()
    }

    fn resized(&mut self, size: Vec2) {
        self.window_size = size;
        self.layout();
    }

    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch {
        if self.header.update(ctx) {
            return ScreenSwitch::Pop;
        }
        self.area.update(ctx);
        self.sync_status();
        ScreenSwitch::None
    }

    fn draw(&self, list: &mut DrawList) {
        draw_background(list, BACKGROUND);
        self.area.draw(list);
        self.status.draw(list);
        self.header.draw(list);
    }
}
