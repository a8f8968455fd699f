//! Three channel sliders mixing a preview color.

use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Screen, ScreenSwitch, UpdateContext,
    widgets::{Alignment, Column, Justification, Label, Panel, Row, Slider, Widget},
};

use super::{BACKGROUND, Demo, DemoContext, Header, TEXT, content_area, draw_background};

const CHANNELS: [(&str, Vec4); 3] = [
    ("Red", Vec4::new(0.85, 0.25, 0.25, 1.0)),
    ("Green", Vec4::new(0.25, 0.75, 0.3, 1.0)),
    ("Blue", Vec4::new(0.3, 0.45, 0.9, 1.0)),
];
const PREVIEW: usize = 3;

pub struct SlidersScreen {
    header: Header,
    container: Column,
    window_size: Vec2,
}

impl SlidersScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let font = &ctx.font;
        let mut container = Column::new(
            20.0,
            Alignment::Center,
            Vec4::new(20.0, 20.0, 40.0, 20.0),
            Justification::Start,
        );
        for (name, color) in CHANNELS {
            let mut row = Row::new(16.0, Alignment::Center, Vec4::ZERO, Justification::Start);
            row.add_widget(Label::new(&format!("{:<6}", name), 16.0, TEXT, font));
            row.add_widget(
                Slider::new(0.0, 255.0, 128.0, Vec2::new(360.0, 24.0))
                    .with_step(1.0)
                    .with_fill_color(color),
            );
            row.add_widget(Label::new("128", 16.0, TEXT, font));
            container.add_widget(row);
        }
        container.add_widget(Panel::new(Vec2::new(320.0, 140.0), Vec4::ONE).with_border(2.0, TEXT));

        let mut screen = Self {
            header: Header::new(Demo::Sliders.title(), font),
            container,
            window_size: ctx.window_size,
        };
        screen.sync_preview();
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);
        self.container.layout(&content_area(self.window_size));
    }

    /// The mixed color, each channel from 0 to 1.
    pub fn color(&self) -> Vec4 {
        let channel = |i: usize| {
            self.container
                .find_widget::<Slider>(&[i, 1])
                .map_or(0.0, |slider| slider.value() / 255.0)
        };
        Vec4::new(channel(0), channel(1), channel(2), 1.0)
    }

    fn sync_preview(&mut self) {
        for i in 0..CHANNELS.len() {
            let Some(value) = self
                .container
                .find_widget::<Slider>(&[i, 1])
                .map(|slider| slider.value())
            else {
                continue;
            };
            if let Some(label) = self.container.find_widget_mut::<Label>(&[i, 2]) {
                label.set_text(&format!("{:>3}", value as u32));
            }
        }
        let color = self.color();
        if let Some(preview) = self.container.find_widget_mut::<Panel>(&[PREVIEW]) {
            preview.color = color;
        }
    }
}

impl Screen for SlidersScreen {
    fn title(&self) -> &str {
        Demo::Sliders.title()
    }

    fn resized(&mut self, size: Vec2) {
        self.window_size = size;
        self.layout();
    }

    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch {
        if self.header.update(ctx) {
            return ScreenSwitch::Pop;
        }
        self.container.update(ctx);

        let changed = (0..CHANNELS.len()).any(|i| {
            self.container
                .find_widget::<Slider>(&[i, 1])
                .is_some_and(|slider| slider.is_changed())
        });
        if changed {
            self.sync_preview();
        }

        self.layout();
        ScreenSwitch::None
    }

    fn draw(&self, list: &mut DrawList) {
        draw_background(list, BACKGROUND);
        self.container.draw(list);
        self.header.draw(list);
    }
}
