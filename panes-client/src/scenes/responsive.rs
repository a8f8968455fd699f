//! Cards reflowing into one to four columns as the window width crosses breakpoints.

use std::rc::Rc;

use glam::{Vec2, Vec4};
use panes_core::{
    DrawList, Font, Rect, Screen, ScreenSwitch, UpdateContext,
    responsive::Breakpoints,
    widgets::{Label, LayoutContext, Widget},
};

use super::{BACKGROUND, Demo, DemoContext, Header, MUTED_TEXT, TEXT, draw_background};

const CARD_COUNT: usize = 9;
const CARD_HEIGHT: f32 = 96.0;
const STATUS_HEIGHT: f32 = 40.0;
const CARD_COLOR: Vec4 = Vec4::new(0.18, 0.21, 0.3, 1.0);

pub struct ResponsiveScreen {
    header: Header,
    status: Label,
    breakpoints: Breakpoints,
    cards: Vec<Rect>,
    font: Rc<Font>,
    window_size: Vec2,
    breakpoint: String,
}

impl ResponsiveScreen {
    pub fn new(ctx: &DemoContext) -> Self {
        let mut screen = Self {
            header: Header::new(Demo::Responsive.title(), &ctx.font),
            status: Label::new("", 16.0, MUTED_TEXT, &ctx.font),
            breakpoints: ctx.breakpoints.clone(),
            cards: Vec::new(),
            font: Rc::clone(&ctx.font),
            window_size: ctx.window_size,
            breakpoint: String::new(),
        };
        screen.layout();
        screen
    }

    fn layout(&mut self) {
        self.header.layout(self.window_size);

        let width = self.window_size.x;
        let bp = self.breakpoints.resolve(width);
        if bp.name != self.breakpoint {
            log::debug!("Breakpoint '{}' at width {}", bp.name, width);
            self.breakpoint = bp.name.clone();
        }
        self.status.set_text(&format!(
            "{:.0}px wide: breakpoint '{}', {} column{}",
            width,
            bp.name,
            bp.columns,
            if bp.columns == 1 { "" } else { "s" }
        ));
        self.status.layout(&LayoutContext {
            max_size: self.window_size,
            cursor: Vec2::new(bp.margin, Header::HEIGHT + 12.0),
        });

        let top = Vec2::new(0.0, Header::HEIGHT + STATUS_HEIGHT);
        self.cards = self
            .breakpoints
            .grid(width, CARD_COUNT, CARD_HEIGHT)
            .into_iter()
            .map(|rect| rect.translate(top))
            .collect();
    }

    pub fn breakpoint(&self) -> &str {
        &self.breakpoint
    }

    pub fn cards(&self) -> &[Rect] {
        &self.cards
    }
}

impl Screen for ResponsiveScreen {
    fn title(&self) -> &str {
        Demo::Responsive.title()
    }

    fn resized(&mut self, size: Vec2) {
        self.window_size = size;
        self.layout();
    }

    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch {
        if self.header.update(ctx) {
            return ScreenSwitch::Pop;
        }
        ScreenSwitch::None
    }

    fn draw(&self, list: &mut DrawList) {
        draw_background(list, BACKGROUND);
        self.status.draw(list);
        for (i, card) in self.cards.iter().enumerate() {
            list.rect(*card, CARD_COLOR);
            list.outline(*card, 1.0, MUTED_TEXT);
            list.text(
                &self.font,
                &format!("Card {}", i + 1),
                card.position + Vec2::splat(12.0),
                16.0,
                TEXT,
            );
        }
        self.header.draw(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::context;

    #[test]
    fn test_cards_reflow_on_resize() {
        let mut screen = ResponsiveScreen::new(&context());
        assert_eq!(screen.breakpoint(), "sm");
        let cards = screen.cards();
        assert_eq!(cards.len(), CARD_COUNT);
        assert_eq!(cards[0].position.y, cards[1].position.y);
        assert!(cards[2].position.y > cards[1].position.y);

        screen.resized(Vec2::new(400.0, 600.0));
        assert_eq!(screen.breakpoint(), "xs");
        let cards = screen.cards();
        assert_eq!(cards[0].size.x, 400.0 - 48.0);
        assert_eq!(cards[0].position.y, Header::HEIGHT + STATUS_HEIGHT + 24.0);
    }
}
