//! The core of the Panes widget demos. This crate contains everything that does not need a
//! window or a GPU: input state, draw lists, widgets, responsive layout tables and the
//! sliding screen [`navigator::Navigator`].
//!
//! The host (see `panes-client`) feeds one [`input::UpdateContext`] per frame into the
//! navigator and hands the resulting [`draw::DrawList`] to its renderer.

use glam::Vec2;

pub mod draw;
pub mod input;
pub mod navigator;
pub mod responsive;
pub mod text;
pub mod timer;
pub mod widgets;

pub use draw::{DrawCommand, DrawList, Font, UIRenderMode};
pub use input::{Key, KeyboardState, MouseButton, MouseState, UpdateContext};
pub use navigator::{Direction, Navigator, Screen, ScreenSwitch};

/// An axis aligned rectangle in window coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    pub fn min(&self) -> Vec2 {
        self.position
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Returns true if the point lies inside the rectangle. Edges count as inside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.y
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.position + offset, self.size)
    }

    /// Shrinks the rectangle by `amount` on every side. The size never goes negative.
    pub fn shrink(&self, amount: f32) -> Self {
        Self::new(
            self.position + Vec2::splat(amount),
            (self.size - Vec2::splat(amount * 2.0)).max(Vec2::ZERO),
        )
    }
}
