//! All UI related utilities.
//!
//! Widgets live in `panes-core` and only record draw lists. This module turns those lists into
//! vertices for the GPU.

use glam::Vec2;
use glow::HasContext;

use crate::abs::Vertex;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UIVertex {
    pub position: Vec2,
    pub uv: Vec2,
}

impl Vertex for UIVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<UIVertex>() as i32;
            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
            // UV attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                stride,
                2 * std::mem::size_of::<f32>() as i32,
            );
        }
    }
}

pub mod uirenderer;
