//! The bundled bitmap font.

use std::sync::Arc;

use glam::Vec2;
use panes_core::Font;

use crate::abs::Texture;

/// Where each character sits in the atlas image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphLayout {
    pub columns: u32,
    pub rows: u32,
    /// The character in the top left cell. Cells follow in codepoint order.
    pub first: char,
    /// Drawn in place of characters the atlas does not have.
    pub fallback: char,
}

impl GlyphLayout {
    /// ASCII from space to DEL in 16 columns.
    pub const ASCII: Self = Self {
        columns: 16,
        rows: 6,
        first: ' ',
        fallback: '?',
    };

    fn cell(&self, c: char) -> Option<u32> {
        let index = (c as u32).checked_sub(self.first as u32)?;
        (index < self.columns * self.rows).then_some(index)
    }

    /// Normalized texture coordinates of the cell holding `c`.
    pub fn uv_rect(&self, c: char) -> [Vec2; 2] {
        let index = self
            .cell(c)
            .or_else(|| self.cell(self.fallback))
            .unwrap_or(0);
        let cell = Vec2::new(1.0 / self.columns as f32, 1.0 / self.rows as f32);
        let min = Vec2::new((index % self.columns) as f32, (index / self.columns) as f32) * cell;
        [min, min + cell]
    }
}

/// The font texture together with its layout.
pub struct FontAtlas {
    pub texture: Texture,
    pub layout: GlyphLayout,
    cell_size: Vec2,
}

impl FontAtlas {
    pub fn new(gl: &Arc<glow::Context>, png: &[u8], layout: GlyphLayout) -> Result<Self, String> {
        let texture = Texture::from_png(gl, png)?;
        if texture.width() % layout.columns != 0 || texture.height() % layout.rows != 0 {
            return Err(format!(
                "font atlas of {}x{} does not split into {}x{} cells",
                texture.width(),
                texture.height(),
                layout.columns,
                layout.rows
            ));
        }
        let cell_size = Vec2::new(
            (texture.width() / layout.columns) as f32,
            (texture.height() / layout.rows) as f32,
        );
        log::debug!("Loaded font atlas with {}x{} cells", cell_size.x, cell_size.y);
        Ok(Self {
            texture,
            layout,
            cell_size,
        })
    }

    /// Loads the 8x8 ASCII font compiled into the binary.
    pub fn bundled(gl: &Arc<glow::Context>) -> Result<Self, String> {
        Self::new(gl, include_bytes!("../assets/font.png"), GlyphLayout::ASCII)
    }

    /// Metrics for laying out text in this font.
    pub fn font(&self) -> Font {
        Font::new(self.cell_size)
    }
}
