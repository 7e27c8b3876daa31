//! CPU-side display list
//!
//! `FrameBuilder` implements both drawing traits by recording what was asked
//! for: shapes are expanded into vertices ready for upload, text draws are
//! kept as positioned strings for whatever rasterizes glyphs.

use glam::Vec2;

use super::shapes::Shape;
use super::vertex::{Color, Vertex, colors};
use super::{Renderer, TextRenderer};

/// Fixed-advance font model used for `measure_text`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance per character
    pub glyph_advance: f32,
    /// Height of one line
    pub line_height: f32,
}

impl Default for TextMetrics {
    // Roughly a 13px monospace face
    fn default() -> Self {
        Self {
            glyph_advance: 7.0,
            line_height: 13.0,
        }
    }
}

/// One shape draw, as requested
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDraw {
    pub shape: Shape,
    pub color: Color,
}

/// One text draw; `pos` is the baseline origin
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub pos: Vec2,
}

/// Everything drawn during one frame, in submission order
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color,
    pub shapes: Vec<ShapeDraw>,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextDraw>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            shapes: Vec::new(),
            vertices: Vec::new(),
            texts: Vec::new(),
        }
    }
}

impl Frame {
    /// Vertex data as raw bytes for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// True if a text draw with exactly this content was recorded
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t.text == text)
    }
}

/// Records draw calls into a [`Frame`]
#[derive(Debug, Clone, Default)]
pub struct FrameBuilder {
    metrics: TextMetrics,
    frame: Frame,
}

impl FrameBuilder {
    pub fn new(metrics: TextMetrics) -> Self {
        Self {
            metrics,
            frame: Frame::default(),
        }
    }

    /// Frame recorded so far
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Take the recorded frame and start an empty one
    pub fn finish(&mut self) -> Frame {
        std::mem::take(&mut self.frame)
    }
}

impl Renderer for FrameBuilder {
    fn draw_shape(&mut self, shape: &Shape, color: Color) {
        self.frame.vertices.extend(shape.vertices(color));
        self.frame.shapes.push(ShapeDraw {
            shape: *shape,
            color,
        });
    }
}

impl TextRenderer for FrameBuilder {
    fn render_text(&mut self, text: &str, x: f32, y: f32) {
        self.frame.texts.push(TextDraw {
            text: text.to_string(),
            pos: Vec2::new(x, y),
        });
    }

    fn measure_text(&self, text: &str) -> (f32, f32) {
        let width = text.chars().count() as f32 * self.metrics.glyph_advance;
        (width, self.metrics.line_height)
    }
}
