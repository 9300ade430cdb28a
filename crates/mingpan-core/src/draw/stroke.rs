//! Outlines for panels and detail buttons.
//!
//! Strokes are always solid; a zero width draws nothing.

use crate::color::Color;

/// Color and width of an outline, in pixels.
///
/// ```
/// use mingpan_core::{color::Color, draw::StrokeDefinition};
///
/// let border = StrokeDefinition::solid(Color::new("#FFF6DE").unwrap(), 2.0);
/// assert_eq!(border.width(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.color.alpha() > 0.0
    }
}

impl Default for StrokeDefinition {
    /// One pixel of black, the canvas default.
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Sets `stroke`, `stroke-opacity` and `stroke-width` on an SVG element.
///
/// ```
/// use mingpan_core::{apply_stroke, color::Color, draw::StrokeDefinition};
/// use svg::node::element::Rectangle;
///
/// let outline = StrokeDefinition::solid(Color::new("#9B9490").unwrap(), 2.0);
/// let pill = apply_stroke!(Rectangle::new().set("rx", 20), &outline);
/// assert!(pill.to_string().contains("stroke-width"));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        $element
            .set("stroke", stroke.color().to_hex())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
    }};
}
