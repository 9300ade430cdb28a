//! The drawing target of a render.
//!
//! A [`Surface`] is a fixed-size canvas with a 2D drawing context: a current
//! [`DrawState`] (fill, stroke, font, text alignment, text baseline, shadow)
//! and primitive operations that paint with it. Every operation is appended
//! to a display list of [`Command`]s in call order; [`Surface::encode_png`]
//! replays the list onto a raster and encodes it.
//!
//! # Scoped state
//!
//! Drawers never rely on whoever ran before them to leave the context in a
//! particular state. They acquire a [`SurfaceScope`] with [`Surface::scoped`],
//! change what they need through it, and the previous state comes back when
//! the scope is dropped:
//!
//! ```
//! # use mingpan::surface::Surface;
//! # use mingpan_core::{draw::TextAlign, geometry::{Point, Size}};
//! let mut surface = Surface::new(Size::new(200.0, 100.0));
//! {
//!     let mut scope = surface.scoped();
//!     scope.set_text_align(TextAlign::Center);
//!     scope.fill_text("centered", Point::new(100.0, 50.0));
//! }
//! assert_eq!(surface.state().text_align(), TextAlign::Left);
//! ```
//!
//! Surfaces are created per render and never shared or reused.

mod command;
mod encode;
mod state;

pub use command::Command;
pub use state::{DrawState, SurfaceScope};

use log::debug;

use mingpan_core::{
    color::Color,
    draw::{FontDefinition, Shadow, StrokeDefinition, TextAlign, TextBaseline},
    geometry::{Bounds, Point, Size},
};

use crate::error::RenderError;

/// A fixed-size canvas and its drawing context.
#[derive(Debug)]
pub struct Surface {
    size: Size,
    state: DrawState,
    saved: Vec<DrawState>,
    commands: Vec<Command>,
}

impl Surface {
    /// Creates an empty surface of the given pixel size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            state: DrawState::default(),
            saved: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the current drawing state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Returns everything drawn so far, in call order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Saves the drawing state and returns a guard that restores it on drop.
    pub fn scoped(&mut self) -> SurfaceScope<'_> {
        self.saved.push(self.state.clone());
        SurfaceScope::new(self)
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    pub fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.state.stroke = stroke;
    }

    pub fn set_font(&mut self, font: FontDefinition) {
        self.state.font = font;
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    /// Sets the shadow cast by subsequent rectangles. `None` disables it.
    pub fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.state.shadow = shadow;
    }

    /// Fills `bounds` with the current fill color.
    pub fn fill_rect(&mut self, bounds: Bounds) {
        self.commands.push(Command::FillRect {
            bounds,
            color: self.state.fill,
            shadow: self.state.shadow,
        });
    }

    /// Outlines `bounds` with the current stroke.
    pub fn stroke_rect(&mut self, bounds: Bounds) {
        self.commands.push(Command::StrokeRect {
            bounds,
            stroke: self.state.stroke,
            shadow: self.state.shadow,
        });
    }

    /// Fills and outlines a rectangle with rounded corners.
    ///
    /// The radius is clamped to half of the shorter side, so a radius at
    /// least that large yields a pill.
    pub fn round_rect(&mut self, bounds: Bounds, radius: f32) {
        let max_radius = bounds.width().min(bounds.height()) / 2.0;
        self.commands.push(Command::RoundRect {
            bounds,
            radius: radius.clamp(0.0, max_radius.max(0.0)),
            fill: self.state.fill,
            stroke: self.state.stroke,
            shadow: self.state.shadow,
        });
    }

    /// Draws a single run of text anchored at `origin`.
    ///
    /// The run is neither measured nor wrapped. Empty content records
    /// nothing.
    pub fn fill_text(&mut self, content: &str, origin: Point) {
        if content.is_empty() {
            return;
        }
        self.commands.push(Command::Text {
            content: content.to_string(),
            origin,
            font: self.state.font.clone(),
            color: self.state.fill,
            align: self.state.text_align,
            baseline: self.state.text_baseline,
        });
    }

    /// Converts the display list into an SVG document of the surface size.
    pub fn to_svg_document(&self) -> svg::Document {
        encode::to_svg_document(self.size, &self.commands)
    }

    /// Rasterizes the display list and encodes it as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encoding`] if the raster cannot be allocated,
    /// the scene is rejected by the rasterizer, or PNG encoding fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let default_family = self.default_font_family();
        let png = encode::rasterize(&self.to_svg_document(), self.size, default_family)?;
        debug!(bytes = png.len(), commands = self.commands.len(); "Surface encoded");
        Ok(png)
    }

    /// The font family of the first text run, used as the rasterizer fallback.
    fn default_font_family(&self) -> &str {
        self.commands
            .iter()
            .find_map(|command| match command {
                Command::Text { font, .. } => Some(font.family()),
                _ => None,
            })
            .unwrap_or_else(|| self.state.font.family())
    }
}
