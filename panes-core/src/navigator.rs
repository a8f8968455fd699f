//! The `Screen` trait and the stack based `Navigator` that slides between screens.
//!
//! Only the top screen receives updates. Pushing slides the new screen in from the right;
//! popping slides the top screen out to the left and drops it once the slide finishes.
//!
//! A push or replace that arrives while a transition is running restarts a forward slide from
//! zero. When the running transition was a pop, that pop is committed first so it is never lost,
//! and a replace then pushes on top of the revealed screen.
//! Pops that arrive while a transition is running are ignored.

use glam::Vec2;

use crate::{DrawList, UpdateContext};

/// The default progress added per frame. At 60 frames per second a slide takes a third of a
/// second.
pub const DEFAULT_TRANSITION_STEP: f32 = 0.05;

// Float steps rarely sum to exactly 1.0.
const COMPLETION_EPSILON: f32 = 1e-4;

/// What the navigator should do after a screen's update.
pub enum ScreenSwitch {
    None,
    Push(Box<dyn Screen>),
    Pop,
    Replace(Box<dyn Screen>),
    Quit,
}

/// A self-contained page of UI.
pub trait Screen {
    /// A title for the window while this screen is on top.
    fn title(&self) -> &str {
        "Panes"
    }

    /// Called for every screen on the stack when the window size changes.
    fn resized(&mut self, _size: Vec2) {}

    /// Updates the screen state. Only called while the screen is on top of the stack.
    fn update(&mut self, ctx: &UpdateContext) -> ScreenSwitch;

    /// Records the screen into the draw list. The navigator translates the list while a
    /// transition is running, so screens always draw at their resting position.
    fn draw(&self, list: &mut DrawList);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Manages the stack of screens and the slide between them.
pub struct Navigator {
    stack: Vec<Box<dyn Screen>>,
    /// The screen taken off the stack by a replace, kept until its slide finishes.
    replaced: Option<Box<dyn Screen>>,
    progress: f32,
    animating: bool,
    direction: Direction,
    step: f32,
}

impl Navigator {
    /// Creates a navigator with the initial screen on the stack.
    pub fn new(initial: Box<dyn Screen>) -> Self {
        let mut navigator = Self::empty();
        navigator.push(initial);
        navigator
    }

    /// Creates a navigator with nothing on it. The first push does not animate.
    pub fn empty() -> Self {
        Self {
            stack: Vec::new(),
            replaced: None,
            progress: 1.0,
            animating: false,
            direction: Direction::Forward,
            step: DEFAULT_TRANSITION_STEP,
        }
    }

    /// Sets the progress added per frame. Steps above 1 are clamped to 1; zero, negative and
    /// non-finite steps fall back to the default.
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = if step.is_finite() && step > 0.0 {
            step.min(1.0)
        } else {
            log::warn!("Invalid transition step {}, using {}", step, DEFAULT_TRANSITION_STEP);
            DEFAULT_TRANSITION_STEP
        };
        self
    }

    /// Pushes a screen on top of the stack and starts sliding it in.
    pub fn push(&mut self, screen: Box<dyn Screen>) {
        if self.animating && self.direction == Direction::Backward {
            self.finish_transition();
        }
        self.replaced = None;

        let was_empty = self.stack.is_empty();
        log::debug!("Push '{}' (depth {})", screen.title(), self.stack.len() + 1);
        self.stack.push(screen);
        if !was_empty {
            self.start_transition(Direction::Forward);
        }
    }

    /// Starts sliding the top screen out. Returns false, and does nothing, if the top screen
    /// is the last one or a transition is already running.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 || self.animating {
            return false;
        }
        if let Some(top) = self.stack.last() {
            log::debug!("Pop '{}' (depth {})", top.title(), self.stack.len() - 1);
        }
        self.start_transition(Direction::Backward);
        true
    }

    /// Swaps the top screen for a new one, sliding it in like a push.
    ///
    /// During a pop the top screen is already on its way out, so the pop commits and the new
    /// screen is pushed on top of the one the pop revealed.
    pub fn replace(&mut self, screen: Box<dyn Screen>) {
        if self.animating && self.direction == Direction::Backward {
            self.push(screen);
            return;
        }
        let Some(old) = self.stack.pop() else {
            self.push(screen);
            return;
        };
        log::debug!("Replace '{}' with '{}'", old.title(), screen.title());
        self.stack.push(screen);
        self.replaced = Some(old);
        self.start_transition(Direction::Forward);
    }

    /// Advances the running transition, then updates the top screen and applies the switch
    /// it asks for. Returns false once a screen asked to quit.
    pub fn update(&mut self, ctx: &UpdateContext) -> bool {
        if self.animating {
            self.advance();
        }

        let switch = match self.stack.last_mut() {
            Some(screen) => screen.update(ctx),
            None => ScreenSwitch::None,
        };

        match switch {
            ScreenSwitch::None => {}
            ScreenSwitch::Push(screen) => self.push(screen),
            ScreenSwitch::Pop => {
                self.pop();
            }
            ScreenSwitch::Replace(screen) => self.replace(screen),
            ScreenSwitch::Quit => return false,
        }
        true
    }

    /// Draws the top screen, or both halves of the slide while a transition is running.
    pub fn draw(&self, list: &mut DrawList) {
        let Some(top) = self.stack.last() else {
            return;
        };
        if !self.animating {
            top.draw(list);
            return;
        }

        let width = list.size().x;
        match self.direction {
            Direction::Forward => {
                let offset = (1.0 - self.progress) * width;
                if let Some(outgoing) = self.outgoing() {
                    list.with_offset(Vec2::new(offset - width, 0.0), |list| outgoing.draw(list));
                }
                list.with_offset(Vec2::new(offset, 0.0), |list| top.draw(list));
            }
            Direction::Backward => {
                let offset = -self.progress * width;
                if let Some(incoming) = self.below_top() {
                    list.with_offset(Vec2::new(offset + width, 0.0), |list| incoming.draw(list));
                }
                list.with_offset(Vec2::new(offset, 0.0), |list| top.draw(list));
            }
        }
    }

    /// Forwards a window resize to every screen, including one being replaced.
    pub fn resized(&mut self, size: Vec2) {
        for screen in self.stack.iter_mut() {
            screen.resized(size);
        }
        if let Some(replaced) = self.replaced.as_mut() {
            replaced.resized(size);
        }
    }

    pub fn current(&self) -> Option<&dyn Screen> {
        self.stack.last().map(|screen| screen.as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        self.stack.last_mut().map(|screen| screen.as_mut())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    fn below_top(&self) -> Option<&dyn Screen> {
        let len = self.stack.len();
        if len < 2 {
            return None;
        }
        Some(self.stack[len - 2].as_ref())
    }

    fn outgoing(&self) -> Option<&dyn Screen> {
        match &self.replaced {
            Some(replaced) => Some(replaced.as_ref()),
            None => self.below_top(),
        }
    }

    fn start_transition(&mut self, direction: Direction) {
        self.direction = direction;
        self.progress = 0.0;
        self.animating = true;
    }

    fn advance(&mut self) {
        let next = (self.progress + self.step).min(1.0);
        self.progress = if 1.0 - next <= COMPLETION_EPSILON {
            1.0
        } else {
            next
        };
        if self.progress >= 1.0 {
            self.finish_transition();
        }
    }

    fn finish_transition(&mut self) {
        self.progress = 1.0;
        self.animating = false;
        self.replaced = None;
        if self.direction == Direction::Backward && self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use glam::Vec4;

    use super::*;
    use crate::{KeyboardState, MouseState, Rect, UIRenderMode};

    const WIDTH: f32 = 800.0;

    /// Draws one full screen quad whose red channel identifies the screen.
    struct TestScreen {
        id: u8,
        name: String,
        updates: Rc<Cell<u32>>,
        switch: Option<ScreenSwitch>,
    }

    impl TestScreen {
        fn boxed(id: u8) -> Box<dyn Screen> {
            Box::new(Self::new(id))
        }

        fn new(id: u8) -> Self {
            Self {
                id,
                name: format!("screen {}", id),
                updates: Rc::new(Cell::new(0)),
                switch: None,
            }
        }
    }

    impl Screen for TestScreen {
        fn title(&self) -> &str {
            &self.name
        }

        fn update(&mut self, _ctx: &UpdateContext) -> ScreenSwitch {
            self.updates.set(self.updates.get() + 1);
            self.switch.take().unwrap_or(ScreenSwitch::None)
        }

        fn draw(&self, list: &mut DrawList) {
            list.rect(
                Rect::new(Vec2::ZERO, list.size()),
                Vec4::new(self.id as f32, 0.0, 0.0, 1.0),
            );
        }
    }

    fn frames(navigator: &mut Navigator, count: usize) {
        let keyboard = KeyboardState::default();
        let mouse = MouseState::default();
        let ctx = UpdateContext::new(&keyboard, &mouse, 1.0 / 60.0, Vec2::new(WIDTH, 600.0));
        for _ in 0..count {
            navigator.update(&ctx);
        }
    }

    /// (screen id, x offset) of every quad drawn this frame.
    fn drawn(navigator: &Navigator) -> Vec<(u8, f32)> {
        let mut list = DrawList::new(Vec2::new(WIDTH, 600.0));
        navigator.draw(&mut list);
        list.commands()
            .iter()
            .map(|command| match command.mode {
                UIRenderMode::Color(color) => (color.x as u8, command.rect[0].x),
                UIRenderMode::Glyph(..) => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_push_slides_in_and_settles() {
        let mut navigator = Navigator::empty();
        navigator.push(TestScreen::boxed(1));
        assert!(!navigator.is_animating());
        navigator.push(TestScreen::boxed(2));
        assert!(navigator.is_animating());
        assert_eq!(navigator.direction(), Direction::Forward);
        assert_eq!(drawn(&navigator), vec![(1, 0.0), (2, WIDTH)]);

        frames(&mut navigator, 10);
        let halfway = drawn(&navigator);
        assert_eq!(halfway.len(), 2);
        assert!((halfway[0].1 + WIDTH / 2.0).abs() < 0.5);
        assert!((halfway[1].1 - WIDTH / 2.0).abs() < 0.5);

        frames(&mut navigator, 10);
        assert!(!navigator.is_animating());
        assert_eq!(navigator.progress(), 1.0);
        assert_eq!(drawn(&navigator), vec![(2, 0.0)]);
        assert_eq!(navigator.current().map(|s| s.title()), Some("screen 2"));
    }

    #[test]
    fn test_pop_removes_top_after_slide() {
        let mut navigator = Navigator::new(TestScreen::boxed(1));
        navigator.push(TestScreen::boxed(2));
        frames(&mut navigator, 20);

        assert!(navigator.pop());
        assert_eq!(navigator.depth(), 2);
        assert_eq!(navigator.direction(), Direction::Backward);
        assert_eq!(drawn(&navigator), vec![(1, WIDTH), (2, 0.0)]);

        frames(&mut navigator, 19);
        assert_eq!(navigator.depth(), 2);
        frames(&mut navigator, 1);
        assert_eq!(navigator.depth(), 1);
        assert!(!navigator.is_animating());
        assert_eq!(drawn(&navigator), vec![(1, 0.0)]);
    }

    #[test]
    fn test_pop_last_screen_is_noop() {
        let mut navigator = Navigator::new(TestScreen::boxed(1));
        assert!(!navigator.pop());
        assert_eq!(navigator.depth(), 1);
        assert!(!navigator.is_animating());
    }

    #[test]
    fn test_pop_during_transition_is_ignored() {
        let mut navigator = Navigator::new(TestScreen::boxed(1));
        navigator.push(TestScreen::boxed(2));
        frames(&mut navigator, 3);
        assert!(!navigator.pop());
        assert_eq!(navigator.direction(), Direction::Forward);
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let mut navigator = Navigator::new(TestScreen::boxed(1)).with_step(0.07);
        navigator.push(TestScreen::boxed(2));
        let mut last = navigator.progress();
        for _ in 0..30 {
            frames(&mut navigator, 1);
            let progress = navigator.progress();
            assert!(progress >= last);
            assert!(progress <= 1.0);
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_depth_matches_replayed_operations() {
        let ops = [true, true, false, true, false, false, false, true, false, true];
        let mut navigator = Navigator::new(TestScreen::boxed(0));
        let mut pushes = 0;
        let mut pops = 0;
        for (i, push) in ops.iter().enumerate() {
            if *push {
                navigator.push(TestScreen::boxed(i as u8));
                pushes += 1;
            } else if navigator.pop() {
                pops += 1;
            }
            frames(&mut navigator, 20);
        }
        assert_eq!(navigator.depth(), 1 + pushes - pops);
    }

    #[test]
    fn test_push_during_pop_commits_the_pop() {
        let mut navigator = Navigator::new(TestScreen::boxed(1));
        navigator.push(TestScreen::boxed(2));
        frames(&mut navigator, 20);
        navigator.pop();
        frames(&mut navigator, 5);

        navigator.push(TestScreen::boxed(3));
        assert_eq!(navigator.depth(), 2);
        assert_eq!(navigator.direction(), Direction::Forward);
        assert_eq!(navigator.progress(), 0.0);
        frames(&mut navigator, 20);
        assert_eq!(drawn(&navigator), vec![(3, 0.0)]);
    }

    #[test]
    fn test_push_during_push_restarts() {
        let mut navigator = Navigator::new(TestScreen::boxed(1));
        navigator.push(TestScreen::boxed(2));
        frames(&mut navigator, 5);
        navigator.push(TestScreen::boxed(3));
        assert_eq!(navigator.progress(), 0.0);
        assert_eq!(navigator.depth(), 3);
        assert_eq!(drawn(&navigator), vec![(2, 0.0), (3, WIDTH)]);
    }

    #[test]
    fn test_replace_draws_old_screen_while_sliding() {
        let mut navigator = Navigator::new(TestScreen::boxed(1));
        navigator.replace(TestScreen::boxed(2));
        assert_eq!(navigator.depth(), 1);
        assert_eq!(drawn(&navigator), vec![(1, 0.0), (2, WIDTH)]);
        frames(&mut navigator, 20);
        assert_eq!(drawn(&navigator), vec![(2, 0.0)]);
    }

    #[test]
    fn test_replace_during_pop_keeps_incoming() {
        let mut navigator = Navigator::new(TestScreen::boxed(1));
        navigator.push(TestScreen::boxed(2));
        frames(&mut navigator, 20);
        assert!(navigator.pop());
        frames(&mut navigator, 5);

        navigator.replace(TestScreen::boxed(3));
        assert_eq!(navigator.depth(), 2);
        assert_eq!(navigator.direction(), Direction::Forward);
        assert_eq!(drawn(&navigator), vec![(1, 0.0), (3, WIDTH)]);

        frames(&mut navigator, 20);
        assert_eq!(navigator.depth(), 2);
        assert_eq!(drawn(&navigator), vec![(3, 0.0)]);
        assert!(navigator.pop());
        frames(&mut navigator, 20);
        assert_eq!(navigator.current().map(|s| s.title()), Some("screen 1"));
    }

    #[test]
    fn test_only_top_screen_updates() {
        let bottom = TestScreen::new(1);
        let bottom_updates = Rc::clone(&bottom.updates);
        let top = TestScreen::new(2);
        let top_updates = Rc::clone(&top.updates);

        let mut navigator = Navigator::new(Box::new(bottom));
        navigator.push(Box::new(top));
        frames(&mut navigator, 4);
        assert_eq!(bottom_updates.get(), 0);
        assert_eq!(top_updates.get(), 4);
    }

    #[test]
    fn test_screen_switches_are_applied() {
        let mut first = TestScreen::new(1);
        first.switch = Some(ScreenSwitch::Push(TestScreen::boxed(2)));
        let mut navigator = Navigator::new(Box::new(first));
        frames(&mut navigator, 1);
        assert_eq!(navigator.depth(), 2);

        let mut quitter = TestScreen::new(3);
        quitter.switch = Some(ScreenSwitch::Quit);
        let mut navigator = Navigator::new(Box::new(quitter));
        let keyboard = KeyboardState::default();
        let mouse = MouseState::default();
        let ctx = UpdateContext::new(&keyboard, &mouse, 0.0, Vec2::ONE);
        assert!(!navigator.update(&ctx));
    }

    #[test]
    fn test_invalid_step_falls_back_and_large_step_clamps() {
        let navigator = Navigator::empty().with_step(-1.0);
        assert_eq!(navigator.step(), DEFAULT_TRANSITION_STEP);
        let navigator = Navigator::empty().with_step(3.0);
        assert_eq!(navigator.step(), 1.0);
    }
}
