//! The demo screens.
//!
//! The launcher menu lists every [`Demo`]. Each demo is a [`Screen`] that pops itself on
//! Escape or its Back button.

use std::rc::Rc;

use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Font, Key, Rect, Screen, UpdateContext,
    responsive::Breakpoints,
    widgets::{Button, Label, LayoutContext, Widget},
};

pub mod accordion;
pub mod buttons;
pub mod menu;
pub mod navigation;
pub mod responsive;
pub mod sidebar;
pub mod sliders;
pub mod tabs;
pub mod textarea;

pub const BACKGROUND: Vec4 = Vec4::new(0.08, 0.09, 0.12, 1.0);
pub const TEXT: Vec4 = Vec4::new(0.92, 0.93, 0.96, 1.0);
pub const MUTED_TEXT: Vec4 = Vec4::new(0.6, 0.62, 0.7, 1.0);

/// Text shown by the text area demo when no file is given.
pub const SAMPLE_TEXT: &str = include_str!("../assets/sample.txt");

/// Everything a demo screen needs to build itself.
#[derive(Clone)]
pub struct DemoContext {
    pub font: Rc<Font>,
    pub window_size: Vec2,
    pub breakpoints: Breakpoints,
    pub text: Rc<str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    Buttons,
    Sliders,
    Accordion,
    Tabs,
    Sidebar,
    Responsive,
    Navigation,
    TextArea,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::Buttons,
        Demo::Sliders,
        Demo::Accordion,
        Demo::Tabs,
        Demo::Sidebar,
        Demo::Responsive,
        Demo::Navigation,
        Demo::TextArea,
    ];

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Demo::Buttons => "buttons",
            Demo::Sliders => "sliders",
            Demo::Accordion => "accordion",
            Demo::Tabs => "tabs",
            Demo::Sidebar => "sidebar",
            Demo::Responsive => "responsive",
            Demo::Navigation => "navigation",
            Demo::TextArea => "textarea",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Buttons => "Buttons",
            Demo::Sliders => "Sliders",
            Demo::Accordion => "Accordion",
            Demo::Tabs => "Tabs",
            Demo::Sidebar => "Sidebar",
            Demo::Responsive => "Responsive layout",
            Demo::Navigation => "Navigation",
            Demo::TextArea => "Text area",
        }
    }

    pub fn from_name(name: &str) -> Option<Demo> {
        Demo::ALL
            .into_iter()
            .find(|demo| demo.name().eq_ignore_ascii_case(name))
    }

    /// All command line names, comma separated.
    pub fn names() -> String {
        Demo::ALL.map(Demo::name).join(", ")
    }

    pub fn create(self, ctx: &DemoContext) -> Box<dyn Screen> {
        match self {
            Demo::Buttons => Box::new(buttons::ButtonsScreen::new(ctx)),
            Demo::Sliders => Box::new(sliders::SlidersScreen::new(ctx)),
            Demo::Accordion => Box::new(accordion::AccordionScreen::new(ctx)),
            Demo::Tabs => Box::new(tabs::TabsScreen::new(ctx)),
            Demo::Sidebar => Box::new(sidebar::SidebarScreen::new(ctx)),
            Demo::Responsive => Box::new(responsive::ResponsiveScreen::new(ctx)),
            Demo::Navigation => Box::new(navigation::Splash::new(ctx)),
            Demo::TextArea => Box::new(textarea::TextAreaScreen::new(ctx)),
        }
    }
}

/// The header bar every demo shares: a Back button and the demo title.
pub struct Header {
    back: Button,
    title: Label,
    width: f32,
}

impl Header {
    pub const HEIGHT: f32 = 56.0;

    pub fn new(title: &str, font: &Rc<Font>) -> Self {
        Self {
            back: Button::new("< Back", TEXT, 16.0, Vec2::new(112.0, 36.0), font),
            title: Label::new(title, 24.0, TEXT, font),
            width: 0.0,
        }
    }

    pub fn layout(&mut self, window_size: Vec2) {
        self.width = window_size.x;
        self.back.layout(&LayoutContext {
            max_size: window_size,
            cursor: Vec2::new(12.0, 10.0),
        });
        self.title.layout(&LayoutContext {
            max_size: window_size,
            cursor: Vec2::new(140.0, 16.0),
        });
    }

    /// Returns true when the user asked to go back.
    pub fn update(&mut self, ctx: &UpdateContext) -> bool {
        self.back.update(ctx);
        self.back.is_clicked() || ctx.keyboard.is_pressed(Key::Escape)
    }

    pub fn draw(&self, list: &mut DrawList) {
        list.rect(
            Rect::from_xywh(0.0, 0.0, self.width, Self::HEIGHT),
            Vec4::new(0.13, 0.14, 0.19, 1.0),
        );
        self.back.draw(list);
        self.title.draw(list);
    }
}

/// Fills the whole surface with the screen background.
pub fn draw_background(list: &mut DrawList, color: Vec4) {
    list.rect(Rect::new(Vec2::ZERO, list.size()), color);
}

/// Layout space below the header.
pub fn content_area(window_size: Vec2) -> LayoutContext {
    LayoutContext {
        max_size: Vec2::new(window_size.x, (window_size.y - Header::HEIGHT).max(0.0)),
        cursor: Vec2::new(0.0, Header::HEIGHT),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub fn context() -> DemoContext {
        DemoContext {
            font: Rc::new(Font::new(Vec2::new(8.0, 8.0))),
            window_size: Vec2::new(800.0, 600.0),
            breakpoints: Breakpoints::default(),
            text: Rc::from("first line\nsecond line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(Demo::from_name(demo.name()), Some(demo));
        }
        assert_eq!(Demo::from_name("TABS"), Some(Demo::Tabs));
        assert_eq!(Demo::from_name("nope"), None);
    }

    #[test]
    fn test_every_demo_draws() {
        let ctx = testing::context();
        for demo in Demo::ALL {
            let screen = demo.create(&ctx);
            let mut list = DrawList::new(ctx.window_size);
            screen.draw(&mut list);
            assert!(!list.is_empty(), "{} drew nothing", demo.name());
        }
    }
}
