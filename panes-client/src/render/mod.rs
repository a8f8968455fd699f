//! Module for anything related to rendering.
//!
//! This module contains the bitmap font atlas, the UI renderer that turns a draw list into
//! batched quads, and the shaders it uses.

pub mod font;
pub mod ui;
