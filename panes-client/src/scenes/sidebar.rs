use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Screen, ScreenSwitch, UpdateContext,
    widgets::{Alignment, Column, Justification, Label, LayoutContext, Sidebar, Widget},
};

use super::{BACKGROUND, Demo, DemoContext, Header, MUTED_TEXT, TEXT, content_area, draw_background};

const ITEMS: [&str; 5] = ["Inbox", "Starred", "Drafts", "Archive", "Trash"];

pub struct SidebarScreen {
    header: Header,
    sidebar: Sidebar,
    content: Column,
    window_size: Vec2,
}

impl SidebarScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let font = &ctx.font;
        let mut content = Column::new(
            12.0,
            Alignment::Start,
            Vec4::new(24.0, 24.0, 24.0, 24.0),
            Justification::Start,
        );
        content.add_widget(Label::new("Nothing selected", 24.0, TEXT, font));
        content.add_widget(Label::new(
            "Click the = button to expand the sidebar,\nthen pick an item.",
            16.0,
            MUTED_TEXT,
            font,
        ));

        let mut screen = Self {
            header: Header::new(Demo::Sidebar.title(), font),
            sidebar: Sidebar::new(&ITEMS, 48.0, 220.0, font),
            content,
            window_size: ctx.window_size,
        };
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);
        let area = content_area(self.window_size);
        self.sidebar.layout(&area);

        let offset = self.sidebar.width();
        self.content.layout(&LayoutContext {
            max_size: Vec2::new((area.max_size.x - offset).max(0.0), area.max_size.y),
            cursor: area.cursor + Vec2::new(offset, 0.0),
        });
    }
}

impl Screen for SidebarScreen {
    fn title(&self) -> &str {
        Demo::Sidebar.title()
    }

    fn resized(&mut self, size: Vec2) {
        self.window_size = size;
        self.layout();
    }

    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch {
        if self.header.update(ctx) {
            return ScreenSwitch::Pop;
        }
        self.sidebar.update(ctx);
        self.content.update(ctx);

        if self.sidebar.is_changed() {
            let item = self.sidebar.selected_item().unwrap_or("Nothing selected").to_string();
            log::debug!("Sidebar item '{}' selected", item);
            if let Some(title) = self.content.get_widget_mut::<Label>(0) {
                title.set_text(&item);
            }
        }

        // The content follows the sidebar edge while it slides.
        self.layout();
        ScreenSwitch::None
    }

    fn draw(&self, list: &mut DrawList) {
        draw_background(list, BACKGROUND);
        self.content.draw(list);
        self.sidebar.draw(list);
        self.header.draw(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::context;
    use panes_core::{KeyboardState, MouseButton, MouseState};

    fn click_at(screen: &mut SidebarScreen, point: Vec2, dt: f32) {
        let keyboard = KeyboardState::default();
        let mut mouse = MouseState::default();
        mouse.moved_to(point);
        mouse.button_down(MouseButton::Left);
        screen.update(&UpdateContext::new(&keyboard, &mouse, dt, Vec2::new(800.0, 600.0)));
        mouse.begin_frame();
        mouse.button_up(MouseButton::Left);
        screen.update(&UpdateContext::new(&keyboard, &mouse, dt, Vec2::new(800.0, 600.0)));
    }

    #[test]
    fn test_content_follows_sidebar_and_shows_selection() {
        let mut screen = SidebarScreen::new(&context());
        let toggle = screen.sidebar.toggle_rect().center();
        click_at(&mut screen, toggle, 1.0);
        assert!(screen.sidebar.is_expanded());
        assert_eq!(screen.sidebar.width(), 220.0);

        let title = screen.content.get_widget::<Label>(0).unwrap();
        assert_eq!(title.position.x, 220.0 + 24.0);

        let item = screen.sidebar.item_rect(2).center();
        click_at(&mut screen, item, 1.0);
        let title = screen.content.get_widget::<Label>(0).unwrap();
        assert_eq!(title.text.stripped(), "Drafts");
    }
}
