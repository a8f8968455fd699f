//! Contains all widgets and the `Widget` trait for building user interfaces.

use glam::Vec2;

use crate::{DrawList, UpdateContext};

/// Context provided to widgets during the layout phase.
pub struct LayoutContext {
    pub max_size: Vec2,
    pub cursor: Vec2,
}

impl LayoutContext {
    /// Lays out against the whole window, starting at the top left corner.
    pub fn window(size: Vec2) -> Self {
        Self {
            max_size: size,
            cursor: Vec2::ZERO,
        }
    }
}

/// A widget trait for building user interfaces.
pub trait Widget {
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;

    /// Gives a hint of the desired size of the widget.
    fn size_hint(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Updates the widget state.
    fn update(&mut self, ctx: &UpdateContext);

    /// Updates the widget layout given the available space.
    fn layout(&mut self, ctx: &LayoutContext) -> Vec2;

    /// Records the widget into the draw list.
    fn draw(&self, list: &mut DrawList);

    /// Child widgets, for containers.
    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }
}

impl dyn Widget {
    /// Follows `indices` through nested containers and downcasts the widget found there.
    pub fn find<T: Widget + 'static>(&self, indices: &[usize]) -> Option<&T> {
        let mut current: &dyn Widget = self;
        for &index in indices {
            current = current.children().get(index)?.as_ref();
        }
        current.as_any().downcast_ref::<T>()
    }

    /// Mutable version of [`find`](#method.find).
    pub fn find_mut<T: Widget + 'static>(&mut self, indices: &[usize]) -> Option<&mut T> {
        let mut current: &mut dyn Widget = self;
        for &index in indices {
            current = current.children_mut().get_mut(index)?.as_mut();
        }
        current.as_any_mut().downcast_mut::<T>()
    }
}

pub mod accordion;
pub mod button;
pub mod click;
pub mod containers;
pub mod label;
pub mod panel;
pub mod sidebar;
pub mod slider;
pub mod spacer;
pub mod tabs;
pub mod textarea;

pub use accordion::*;
pub use button::*;
pub use click::*;
pub use containers::*;
pub use label::*;
pub use panel::*;
pub use sidebar::*;
pub use slider::*;
pub use spacer::*;
pub use tabs::*;
pub use textarea::*;

#[cfg(test)]
pub(crate) mod testing {
    use std::rc::Rc;

    use glam::Vec2;

    use crate::{Font, Key, KeyboardState, MouseButton, MouseState, UpdateContext};

    /// Scripted input for driving widgets frame by frame.
    #[derive(Default)]
    pub struct InputScript {
        pub keyboard: KeyboardState,
        pub mouse: MouseState,
    }

    impl InputScript {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn frame(&mut self) -> &mut Self {
            self.keyboard.begin_frame();
            self.mouse.begin_frame();
            self
        }

        pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
            self.mouse.moved_to(Vec2::new(x, y));
            self
        }

        pub fn press(&mut self) -> &mut Self {
            self.mouse.button_down(MouseButton::Left);
            self
        }

        pub fn release(&mut self) -> &mut Self {
            self.mouse.button_up(MouseButton::Left);
            self
        }

        pub fn key(&mut self, key: Key) -> &mut Self {
            self.keyboard.key_down(key, false);
            self.keyboard.key_up(key);
            self
        }

        pub fn text(&mut self, text: &str) -> &mut Self {
            self.keyboard.text(text);
            self
        }

        pub fn ctx(&self) -> UpdateContext<'_> {
            UpdateContext::new(
                &self.keyboard,
                &self.mouse,
                1.0 / 60.0,
                Vec2::new(800.0, 600.0),
            )
        }
    }

    pub fn font() -> Rc<Font> {
        Rc::new(Font::new(Vec2::new(8.0, 8.0)))
    }
}
