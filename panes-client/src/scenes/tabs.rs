//! A tab strip switching between pages of text. Tab and Shift+Tab cycle.

use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Screen, ScreenSwitch, UpdateContext,
    widgets::{Alignment, Column, Justification, Label, TabStrip, Widget},
};

use super::{BACKGROUND, Demo, DemoContext, Header, MUTED_TEXT, TEXT, content_area, draw_background};

const PAGES: [(&str, &str); 4] = [
    ("Home", "Welcome home. Nothing to see yet."),
    ("Profile", "Name: Ada\nRole: Engineer"),
    ("Settings", "Volume: 7\nTheme: Dark"),
    ("About", "A tab strip with four tabs.\nTab and Shift+Tab cycle."),
];

const TABS: [usize; 1] = [0];
const BODY: [usize; 1] = [1];
const FOOTER: [usize; 1] = [2];

pub struct TabsScreen {
    header: Header,
    container: Column,
    window_size: Vec2,
}

impl TabsScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let font = &ctx.font;
        let labels = PAGES.map(|(label, _)| label);

        let mut container = Column::new(
            24.0,
            Alignment::Center,
            Vec4::new(20.0, 20.0, 32.0, 20.0),
            Justification::Start,
        );
        container.add_widget(TabStrip::new(&labels, Vec2::new(150.0, 40.0), font));
        container.add_widget(Label::new(PAGES[0].1, 16.0, TEXT, font));
        container.add_widget(Label::new("", 16.0, MUTED_TEXT, font));

        let mut screen = Self {
            header: Header::new(Demo::Tabs.title(), font),
            container,
            window_size: ctx.window_size,
        };
        screen.show_selected();
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);
        self.container.layout(&content_area(self.window_size));
    }

    pub fn selected(&self) -> usize {
        self.container
            .find_widget::<TabStrip>(&TABS)
            .map_or(0, TabStrip::selected)
    }

    fn show_selected(&mut self) {
        let index = self.selected();
        let Some((_, body)) = PAGES.get(index) else {
            return;
        };
        if let Some(label) = self.container.find_widget_mut::<Label>(&BODY) {
            label.set_text(body);
        }
        if let Some(label) = self.container.find_widget_mut::<Label>(&FOOTER) {
            label.set_text(&format!("Tab {} of {}", index + 1, PAGES.len()));
        }
    }
}

impl Screen for TabsScreen {
    fn title(&self) -> &str {
        Demo::Tabs.title()
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

        let changed = self
            .container
            .find_widget::<TabStrip>(&TABS)
            .is_some_and(TabStrip::is_changed);
        if changed {
            self.show_selected();
            self.layout();
        }
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
    use panes_core::{Key, KeyboardState, MouseState};

    #[test]
    fn test_shift_tab_wraps_to_last_page() {
        let mut screen = TabsScreen::new(&context());
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Key::LShift, false);
        keyboard.key_down(Key::Tab, false);
        let mouse = MouseState::default();
        screen.update(&UpdateContext::new(&keyboard, &mouse, 0.016, Vec2::new(800.0, 600.0)));

        assert_eq!(screen.selected(), 3);
        let footer = screen.container.find_widget::<Label>(&FOOTER).unwrap();
        assert_eq!(footer.text.stripped(), "Tab 4 of 4");
    }
}
