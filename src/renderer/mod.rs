//! Rendering boundary
//!
//! The game only ever asks to fill a shape in a color or put text somewhere.
//! A GPU/font backend implements [`Renderer`] and [`TextRenderer`];
//! [`FrameBuilder`] implements them on the CPU by recording a display list.

pub mod frame;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, FrameBuilder, ShapeDraw, TextDraw, TextMetrics};
pub use scene::draw_scene;
pub use shapes::Shape;
pub use vertex::{Color, Vertex, colors};

/// Draws filled primitives
pub trait Renderer {
    fn draw_shape(&mut self, shape: &Shape, color: Color);
}

/// Draws and measures text
pub trait TextRenderer {
    /// Render `text` with its baseline origin at (x, y)
    fn render_text(&mut self, text: &str, x: f32, y: f32);
    /// Width and height `text` would occupy
    fn measure_text(&self, text: &str) -> (f32, f32);
}
