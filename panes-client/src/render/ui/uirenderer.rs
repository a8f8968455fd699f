//! The UI renderer.

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec4};
use glow::HasContext;
use panes_core::{DrawCommand, DrawList, UIRenderMode};

use crate::{
    abs::{Mesh, ShaderProgram},
    render::{
        font::{FontAtlas, GlyphLayout},
        ui::UIVertex,
    },
};

/// How the quads of a batch are shaded. Glyphs of one color share a batch whatever the
/// character, since they all sample the same atlas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BatchMode {
    Solid(Vec4),
    Glyph(Vec4),
}

impl From<UIRenderMode> for BatchMode {
    fn from(mode: UIRenderMode) -> Self {
        match mode {
            UIRenderMode::Color(color) => BatchMode::Solid(color),
            UIRenderMode::Glyph(_, color) => BatchMode::Glyph(color),
        }
    }
}

/// Consecutive quads drawn with one draw call.
#[derive(Debug)]
pub struct Batch {
    pub mode: BatchMode,
    pub vertices: Vec<UIVertex>,
    pub indices: Vec<u32>,
}

impl Batch {
    fn new(mode: BatchMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Appends a draw command's vertices and indices to the batch.
    fn append(&mut self, rect: [Vec2; 2], uv_rect: [Vec2; 2]) {
        let base_index = self.vertices.len() as u32;
        let [min, max] = rect;
        let [uv_min, uv_max] = uv_rect;

        self.vertices.push(UIVertex {
            position: Vec2::new(max.x, min.y),
            uv: Vec2::new(uv_max.x, uv_min.y),
        });
        self.vertices.push(UIVertex {
            position: Vec2::new(min.x, min.y),
            uv: Vec2::new(uv_min.x, uv_min.y),
        });
        self.vertices.push(UIVertex {
            position: Vec2::new(min.x, max.y),
            uv: Vec2::new(uv_min.x, uv_max.y),
        });
        self.vertices.push(UIVertex {
            position: Vec2::new(max.x, max.y),
            uv: Vec2::new(uv_max.x, uv_max.y),
        });
        self.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);
    }
}

/// Groups draw commands into batches, keeping their order.
pub fn build_batches(commands: &[DrawCommand], layout: &GlyphLayout) -> Vec<Batch> {
    let mut batches: Vec<Batch> = Vec::new();
    for command in commands {
        let mode = BatchMode::from(command.mode);
        let uv_rect = match command.mode {
            UIRenderMode::Glyph(c, _) => layout.uv_rect(c),
            UIRenderMode::Color(_) => [Vec2::ZERO, Vec2::ZERO],
        };
        match batches.last_mut() {
            Some(batch) if batch.mode == mode => batch.append(command.rect, uv_rect),
            _ => {
                let mut batch = Batch::new(mode);
                batch.append(command.rect, uv_rect);
                batches.push(batch);
            }
        }
    }
    batches
}

/// The UI renderer for rendering 2D elements on the screen.
pub struct UIRenderer {
    gl: Arc<glow::Context>,
    shader_program: ShaderProgram,
    pub projection_matrix: Mat4,
    atlas: FontAtlas,
    mesh: Mesh,
}

impl UIRenderer {
    /// Creates a new UI renderer for a window of the given size.
    pub fn new(
        gl: &Arc<glow::Context>,
        shader_program: ShaderProgram,
        atlas: FontAtlas,
        size: Vec2,
    ) -> Result<Self, String> {
        Ok(Self {
            gl: Arc::clone(gl),
            shader_program,
            projection_matrix: Self::projection(size),
            atlas,
            mesh: Mesh::new::<UIVertex>(gl, glow::TRIANGLES)?,
        })
    }

    /// A top-left origin orthographic projection.
    pub fn projection(size: Vec2) -> Mat4 {
        Mat4::orthographic_rh_gl(0.0, size.x, size.y, 0.0, -1.0, 1.0)
    }

    pub fn resize(&mut self, size: Vec2) {
        unsafe {
            self.gl.viewport(0, 0, size.x as i32, size.y as i32);
        }
        self.projection_matrix = Self::projection(size);
    }

    /// Clears the screen and draws every command of the list in order.
    pub fn render(&mut self, list: &DrawList, clear_color: Vec4) {
        unsafe {
            self.gl
                .clear_color(clear_color.x, clear_color.y, clear_color.z, clear_color.w);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.shader_program.use_program();
        self.shader_program
            .set_uniform("u_projection", self.projection_matrix);
        self.atlas.texture.bind(0);
        self.shader_program.set_uniform("u_tex", 0);

        for batch in build_batches(list.commands(), &self.atlas.layout) {
            match batch.mode {
                BatchMode::Solid(color) => {
                    self.shader_program.set_uniform("u_color", color);
                    self.shader_program.set_uniform("u_solid", true);
                }
                BatchMode::Glyph(color) => {
                    self.shader_program.set_uniform("u_color", color);
                    self.shader_program.set_uniform("u_solid", false);
                }
            }
            self.mesh.update(batch.vertices.as_slice(), batch.indices.as_slice());
            self.mesh.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(mode: UIRenderMode) -> DrawCommand {
        DrawCommand {
            rect: [Vec2::ZERO, Vec2::new(8.0, 8.0)],
            mode,
        }
    }

    #[test]
    fn test_same_color_glyphs_share_a_batch() {
        let white = Vec4::ONE;
        let commands = [
            command(UIRenderMode::Color(white)),
            command(UIRenderMode::Glyph('a', white)),
            command(UIRenderMode::Glyph('b', white)),
            command(UIRenderMode::Glyph('c', Vec4::ZERO)),
            command(UIRenderMode::Color(white)),
        ];
        let batches = build_batches(&commands, &GlyphLayout::ASCII);
        let modes: Vec<BatchMode> = batches.iter().map(|b| b.mode).collect();
        assert_eq!(
            modes,
            vec![
                BatchMode::Solid(white),
                BatchMode::Glyph(white),
                BatchMode::Glyph(Vec4::ZERO),
                BatchMode::Solid(white),
            ]
        );
        assert_eq!(batches[1].vertices.len(), 8);
        assert_eq!(batches[1].indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_glyph_quads_carry_atlas_uvs() {
        let commands = [command(UIRenderMode::Glyph('A', Vec4::ONE))];
        let batches = build_batches(&commands, &GlyphLayout::ASCII);
        let [uv_min, uv_max] = GlyphLayout::ASCII.uv_rect('A');
        let vertex = batches[0].vertices[1];
        assert_eq!(vertex.position, Vec2::ZERO);
        assert_eq!(vertex.uv, uv_min);
        assert_eq!(batches[0].vertices[3].uv, uv_max);
    }
}
