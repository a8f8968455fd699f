use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Screen, ScreenSwitch, UpdateContext,
    widgets::{Accordion, Alignment, Button, Column, Justification, Label, Section, Widget},
};

use super::{BACKGROUND, Demo, DemoContext, Header, MUTED_TEXT, TEXT, content_area, draw_background};

const MODE: [usize; 1] = [0];
const HINT: [usize; 1] = [1];
const ACCORDION: [usize; 1] = [2];

const SECTIONS: [(&str, &str); 4] = [
    ("What is this?", "A list of sections. Click a header to open or close it."),
    ("Animation", "Sections grow and shrink over a few frames instead of jumping."),
    ("Exclusive mode", "When on, opening one section closes every other section."),
    ("Nesting", "An accordion is a plain widget, so it sits inside columns and rows."),
];

fn mode_label(exclusive: bool) -> &'static str {
    if exclusive { "Exclusive: on" } else { "Exclusive: off" }
}

pub struct AccordionScreen {
    header: Header,
    container: Column,
    window_size: Vec2,
}

impl AccordionScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let font = &ctx.font;
        let mut accordion = Accordion::new(560.0, 36.0, font);
        for (title, body) in SECTIONS {
            accordion.add_section(Section::new(title, body, 64.0));
        }
        accordion.expand(0);

        let mut container = Column::new(
            16.0,
            Alignment::Center,
            Vec4::new(20.0, 20.0, 32.0, 20.0),
            Justification::Start,
        );
        container.add_widget(Button::new(mode_label(false), TEXT, 16.0, Vec2::new(240.0, 36.0), font));
        container.add_widget(Label::new("0 of 4 open", 16.0, MUTED_TEXT, font));
        container.add_widget(accordion);

        let mut screen = Self {
            header: Header::new(Demo::Accordion.title(), font),
            container,
            window_size: ctx.window_size,
        };
        screen.sync_hint();
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);
        self.container.layout(&content_area(self.window_size));
    }

    fn accordion_mut(&mut self) -> Option<&mut Accordion> {
        self.container.find_widget_mut::<Accordion>(&ACCORDION)
    }

    fn sync_hint(&mut self) {
        let Some(accordion) = self.container.find_widget::<Accordion>(&ACCORDION) else {
            return;
        };
        let open = accordion
            .sections()
            .iter()
            .filter(|section| section.is_expanded())
            .count();
        let text = format!("{} of {} open", open, accordion.sections().len());
        if let Some(hint) = self.container.find_widget_mut::<Label>(&HINT) {
            hint.set_text(&text);
        }
    }
}

impl Screen for AccordionScreen {
    fn title(&self) -> &str {
        Demo::Accordion.title()
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

        let mode_clicked = self
            .container
            .find_widget::<Button>(&MODE)
            .is_some_and(|button| button.is_clicked());
        if mode_clicked {
            let exclusive = match self.accordion_mut() {
                Some(accordion) => {
                    accordion.exclusive = !accordion.exclusive;
                    if accordion.exclusive {
                        // Keep only the first open section.
                        let first = accordion.sections().iter().position(|s| s.is_expanded());
                        if let Some(first) = first {
                            accordion.expand(first);
                        }
                    }
                    accordion.exclusive
                }
                None => false,
            };
            log::debug!("Accordion exclusive mode {}", if exclusive { "on" } else { "off" });
            if let Some(button) = self.container.find_widget_mut::<Button>(&MODE) {
                button.label = mode_label(exclusive).to_string();
            }
        }
        self.sync_hint();

        // Section heights change while animating.
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

    fn click_at(screen: &mut AccordionScreen, point: Vec2) {
        let keyboard = KeyboardState::default();
        let mut mouse = MouseState::default();
        mouse.moved_to(point);
        mouse.button_down(MouseButton::Left);
        screen.update(&UpdateContext::new(&keyboard, &mouse, 0.0, Vec2::new(800.0, 600.0)));
        mouse.begin_frame();
        mouse.button_up(MouseButton::Left);
        screen.update(&UpdateContext::new(&keyboard, &mouse, 0.0, Vec2::new(800.0, 600.0)));
    }

    #[test]
    fn test_exclusive_mode_closes_other_sections() {
        let mut screen = AccordionScreen::new(&context());
        screen.accordion_mut().unwrap().expand(2);

        let mode = screen.container.find_widget::<Button>(&MODE).unwrap().bounds().center();
        click_at(&mut screen, mode);

        let accordion = screen.container.find_widget::<Accordion>(&ACCORDION).unwrap();
        assert!(accordion.exclusive);
        assert!(accordion.is_expanded(0));
        assert!(!accordion.is_expanded(2));
        let hint = screen.container.find_widget::<Label>(&HINT).unwrap();
        assert_eq!(hint.text.stripped(), "1 of 4 open");
    }
}
