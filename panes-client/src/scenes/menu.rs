//! The launcher listing every demo.

use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Key, Screen, ScreenSwitch, UpdateContext,
    widgets::{Alignment, Button, ButtonColors, Column, Justification, Label, LayoutContext, Widget},
};

use super::{BACKGROUND, Demo, DemoContext, MUTED_TEXT, TEXT, draw_background};

pub struct MenuScreen {
    container: Column,
    ctx: DemoContext,
    window_size: Vec2,
}

impl MenuScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let font = &ctx.font;
        let header = Label::new("Panes", 48.0, TEXT, font);
        let subtitle = Label::new("Pick a demo. Escape goes back.", 16.0, MUTED_TEXT, font);

        let mut buttons = Column::new(8.0, Alignment::Center, Vec4::ZERO, Justification::Start);
        for demo in Demo::ALL {
            buttons.add_widget(Button::new(demo.title(), TEXT, 16.0, Vec2::new(320.0, 40.0), font));
        }
        buttons.add_widget(
            Button::new("Quit", TEXT, 16.0, Vec2::new(320.0, 40.0), font)
                .with_colors(ButtonColors::from_base(Vec4::new(0.45, 0.18, 0.2, 1.0))),
        );

        let mut container = Column::new(
            24.0,
            Alignment::Center,
            Vec4::new(20.0, 20.0, 40.0, 20.0),
            Justification::Start,
        );
        container.add_widget(header);
        container.add_widget(subtitle);
        container.add_widget(buttons);

        let mut screen = Self {
            container,
            ctx: ctx.clone(),
            window_size: ctx.window_size,
        };
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.container.layout(&LayoutContext::window(self.window_size));
    }

    fn clicked_demo(&self) -> Option<Demo> {
        Demo::ALL.into_iter().enumerate().find_map(|(i, demo)| {
            self.container
                .find_widget::<Button>(&[2, i])
                .filter(|button| button.is_clicked())
                .map(|_| demo)
        })
    }
}

impl Screen for MenuScreen {
    fn title(&self) -> &str {
        "Demos"
    }

    fn resized(&mut self, size: Vec2) {
        self.window_size = size;
        self.ctx.window_size = size;
        self.layout();
    }

    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch {
        self.container.update(ctx);
        self.layout();

        if let Some(demo) = self.clicked_demo() {
            log::info!("Opening the {} demo", demo.name());
            return ScreenSwitch::Push(demo.create(&self.ctx));
        }
        let quit = self
            .container
            .find_widget::<Button>(&[2, Demo::ALL.len()])
            .is_some_and(|button| button.is_clicked());
        if quit || ctx.keyboard.is_pressed(Key::Escape) {
            return ScreenSwitch::Quit;
        }
        ScreenSwitch::None
    }

    fn draw(&self, list: &mut DrawList) {
        draw_background(list, BACKGROUND);
        self.container.draw(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::context;
    use panes_core::{KeyboardState, MouseButton, MouseState};

    #[test]
    fn test_clicking_a_demo_pushes_it() {
        let mut menu = MenuScreen::new(&context());
        let keyboard = KeyboardState::default();
        let mut mouse = MouseState::default();
        let first = menu.container.find_widget::<Button>(&[2, 1]).unwrap().bounds();

        mouse.moved_to(first.center());
        mouse.button_down(MouseButton::Left);
        let ctx = UpdateContext::new(&keyboard, &mouse, 1.0 / 60.0, Vec2::new(800.0, 600.0));
        assert!(matches!(menu.update(&ctx), ScreenSwitch::None));

        mouse.begin_frame();
        mouse.button_up(MouseButton::Left);
        let ctx = UpdateContext::new(&keyboard, &mouse, 1.0 / 60.0, Vec2::new(800.0, 600.0));
        match menu.update(&ctx) {
            ScreenSwitch::Push(screen) => assert_eq!(screen.title(), "Sliders"),
            _ => panic!("expected a push"),
        }
    }

    #[test]
    fn test_escape_quits() {
        let mut menu = MenuScreen::new(&context());
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Key::Escape, false);
        let mouse = MouseState::default();
        let ctx = UpdateContext::new(&keyboard, &mouse, 1.0 / 60.0, Vec2::new(800.0, 600.0));
        assert!(matches!(menu.update(&ctx), ScreenSwitch::Quit));
    }
}
