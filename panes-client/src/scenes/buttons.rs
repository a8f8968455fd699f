//! Buttons with callbacks, hover and pressed colors, and a disabled state.

use std::{cell::Cell, rc::Rc};

use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Screen, ScreenSwitch, UpdateContext,
    widgets::{
        Alignment, Button, ButtonColors, Column, Justification, Label, Panel, Row, Widget,
    },
};
use rand::Rng;

use super::{BACKGROUND, Demo, DemoContext, Header, MUTED_TEXT, TEXT, content_area, draw_background};

const COUNTER: [usize; 2] = [0, 0];
const RANDOM: [usize; 2] = [0, 1];
const TOGGLE: [usize; 2] = [0, 2];
const TARGET: [usize; 2] = [0, 3];
const STATUS: [usize; 1] = [1];
const SWATCH: [usize; 1] = [2];

pub struct ButtonsScreen {
    header: Header,
    container: Column,
    clicks: Rc<Cell<u32>>,
    window_size: Vec2,
}

fn random_color() -> Vec4 {
    let mut rng = rand::rng();
    Vec4::new(
        rng.random_range(0.15..0.9),
        rng.random_range(0.15..0.9),
        rng.random_range(0.15..0.9),
        1.0,
    )
}

impl ButtonsScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let font = &ctx.font;
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let size = Vec2::new(160.0, 44.0);

        let mut row = Row::new(16.0, Alignment::Center, Vec4::ZERO, Justification::Center);
        row.add_widget(
            Button::new("Click me", TEXT, 16.0, size, font)
                .on_click(move || counter.set(counter.get() + 1)),
        );
        row.add_widget(
            Button::new("Random color", TEXT, 16.0, size, font)
                .with_colors(ButtonColors::from_base(Vec4::new(0.2, 0.4, 0.3, 1.0))),
        );
        row.add_widget(Button::new("Disable", TEXT, 16.0, size, font));
        row.add_widget(Button::new("Target", TEXT, 16.0, size, font));

        let mut container = Column::new(
            24.0,
            Alignment::Center,
            Vec4::new(20.0, 20.0, 40.0, 20.0),
            Justification::Start,
        );
        container.add_widget(row);
        container.add_widget(Label::new("Clicked 0 times", 16.0, MUTED_TEXT, font));
        container.add_widget(Panel::new(Vec2::new(240.0, 120.0), random_color()).with_border(2.0, TEXT));

        let mut screen = Self {
            header: Header::new(Demo::Buttons.title(), font),
            container,
            clicks,
            window_size: ctx.window_size,
        };
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);
        self.container.layout(&content_area(self.window_size));
    }

    fn clicked(&self, path: &[usize]) -> bool {
        self.container
            .find_widget::<Button>(path)
            .is_some_and(|button| button.is_clicked())
    }

    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }
}

impl Screen for ButtonsScreen {
    fn title(&self) -> &str {
        Demo::Buttons.title()
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

        if self.clicked(&RANDOM) {
            if let Some(swatch) = self.container.find_widget_mut::<Panel>(&SWATCH) {
                swatch.color = random_color();
            }
        }
        if self.clicked(&TOGGLE) {
            if let Some(target) = self.container.find_widget_mut::<Button>(&TARGET) {
                target.disabled = !target.disabled;
                let label = if target.disabled { "Enable" } else { "Disable" };
                if let Some(toggle) = self.container.find_widget_mut::<Button>(&TOGGLE) {
                    toggle.label = label.to_string();
                }
            }
        }
        if self.clicked(&TARGET) {
            log::info!("Target button clicked");
        }
        if self.clicked(&COUNTER) {
            let text = format!("Clicked {} times", self.clicks.get());
            if let Some(status) = self.container.find_widget_mut::<Label>(&STATUS) {
                status.set_text(&text);
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::context;
    use panes_core::{KeyboardState, MouseButton, MouseState};

    fn click_at(screen: &mut ButtonsScreen, point: Vec2) {
        let keyboard = KeyboardState::default();
        let mut mouse = MouseState::default();
        mouse.moved_to(point);
        mouse.button_down(MouseButton::Left);
        screen.update(&UpdateContext::new(&keyboard, &mouse, 0.016, Vec2::new(800.0, 600.0)));
        mouse.begin_frame();
        mouse.button_up(MouseButton::Left);
        screen.update(&UpdateContext::new(&keyboard, &mouse, 0.016, Vec2::new(800.0, 600.0)));
    }

    fn center_of(screen: &ButtonsScreen, path: &[usize]) -> Vec2 {
        screen
            .container
            .find_widget::<Button>(path)
            .unwrap()
            .bounds()
            .center()
    }

    #[test]
    fn test_counter_button_updates_status() {
        let mut screen = ButtonsScreen::new(&context());
        let counter = center_of(&screen, &COUNTER);
        click_at(&mut screen, counter);
        click_at(&mut screen, counter);
        assert_eq!(screen.clicks(), 2);
        let status = screen.container.find_widget::<Label>(&STATUS).unwrap();
        assert_eq!(status.text.stripped(), "Clicked 2 times");
    }

    #[test]
    fn test_disabled_target_does_not_click() {
        let mut screen = ButtonsScreen::new(&context());
        let toggle = center_of(&screen, &TOGGLE);
        click_at(&mut screen, toggle);
        let target = screen.container.find_widget::<Button>(&TARGET).unwrap();
        assert!(target.disabled);

        let target = center_of(&screen, &TARGET);
        click_at(&mut screen, target);
        assert!(!screen.clicked(&TARGET));
    }
}
