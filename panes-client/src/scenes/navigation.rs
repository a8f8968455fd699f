//! A splash screen that replaces itself with a chain of colored pages.
//!
//! Next pushes another page, Back or Escape pops one. Popping the first page returns to the
//! launcher since the splash is no longer on the stack.

use std::rc::Rc;

use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Font, Screen, ScreenSwitch, UpdateContext,
    timer::Delay,
    widgets::{Alignment, Button, Column, Justification, Label, LayoutContext, Widget},
};

use super::{Demo, DemoContext, Header, MUTED_TEXT, TEXT, content_area, draw_background};

pub const SPLASH_SECONDS: f32 = 1.5;

const PALETTE: [Vec4; 5] = [
    Vec4::new(0.16, 0.27, 0.45, 1.0),
    Vec4::new(0.42, 0.2, 0.36, 1.0),
    Vec4::new(0.18, 0.4, 0.3, 1.0),
    Vec4::new(0.48, 0.32, 0.14, 1.0),
    Vec4::new(0.3, 0.22, 0.5, 1.0),
];

pub struct Splash {
    delay: Delay,
    container: Column,
    ctx: DemoContext,
    window_size: Vec2,
}

impl Splash {
    pub fn new(ctx: &DemoContext) -> Self {
        let mut container = Column::new(16.0, Alignment::Center, Vec4::ZERO, Justification::Center);
        container.add_widget(Label::new("Navigation", 48.0, TEXT, &ctx.font));
        container.add_widget(Label::new("Loading pages...", 16.0, MUTED_TEXT, &ctx.font));

        let mut splash = Self {
            delay: Delay::new(SPLASH_SECONDS),
            container,
            ctx: ctx.clone(),
            window_size: ctx.window_size,
        };
        splash.layout();
        splash
    }

    fn layout(&mut self) {
        self.container.layout(&LayoutContext::window(self.window_size));
    }
}

impl Screen for Splash {
    fn title(&self) -> &str {
        Demo::Navigation.title()
    }

    fn resized(&mut self, size: Vec2) {
        self.window_size = size;
        self.ctx.window_size = size;
        self.layout();
    }

    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch {
        if self.delay.tick(ctx.delta_time) {
            log::debug!("Splash finished, showing the first page");
            return ScreenSwitch::Replace(Box::new(ColorPage::new(1, &self.ctx)));
        }
        ScreenSwitch::None
    }

    fn draw(&self, list: &mut DrawList) {
        draw_background(list, Vec4::new(0.05, 0.05, 0.07, 1.0));
        self.container.draw(list);
    }
}

/// One numbered page with its own background color.
pub struct ColorPage {
    index: usize,
    color: Vec4,
    title: String,
    header: Header,
    container: Column,
    ctx: DemoContext,
    window_size: Vec2,
}

impl ColorPage {
    pub fn new(index: usize, ctx: &DemoContext) -> Self {
        let font: &Rc<Font> = &ctx.font;
        let title = format!("Page {}", index);
        let color = PALETTE[(index.max(1) - 1) % PALETTE.len()];

        let mut container = Column::new(24.0, Alignment::Center, Vec4::ZERO, Justification::Center);
        container.add_widget(Label::new(&title, 48.0, TEXT, font));
        container.add_widget(Label::new(
            &format!("{} page{} deep", index, if index == 1 { "" } else { "s" }),
            16.0,
            MUTED_TEXT,
            font,
        ));
        container.add_widget(Button::new("Next >", TEXT, 16.0, Vec2::new(160.0, 44.0), font));

        let mut page = Self {
            index,
            color,
            header: Header::new(&title, font),
            title,
            container,
            ctx: ctx.clone(),
            window_size: ctx.window_size,
        };
        page.layout();
        page
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);
        self.container.layout(&content_area(self.window_size));
    }
}

impl Screen for ColorPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn resized(&mut self, size: Vec2) {
        self.window_size = size;
        self.ctx.window_size = size;
        self.layout();
    }

    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch {
        if self.header.update(ctx) {
            return ScreenSwitch::Pop;
        }
        self.container.update(ctx);

        let next = self
            .container
            .get_widget::<Button>(2)
            .is_some_and(|button| button.is_clicked());
        if next {
            return ScreenSwitch::Push(Box::new(ColorPage::new(self.index + 1, &self.ctx)));
        }
        ScreenSwitch::None
    }

    fn draw(&self, list: &mut DrawList) {
        draw_background(list, self.color);
        self.container.draw(list);
        self.header.draw(list);
    }
}
