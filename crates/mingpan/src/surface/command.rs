//! Display-list entries recorded by a [`Surface`](super::Surface).

use svg::node::element as svg_element;

use mingpan_core::{
    apply_stroke,
    color::Color,
    draw::{FontDefinition, Shadow, StrokeDefinition, TextAlign, TextBaseline},
    geometry::{Bounds, Point},
};

/// Type alias for boxed SVG nodes.
pub(super) type SvgNode = Box<dyn svg::Node>;

/// One recorded drawing operation, with the state it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FillRect {
        bounds: Bounds,
        color: Color,
        shadow: Option<Shadow>,
    },
    StrokeRect {
        bounds: Bounds,
        stroke: StrokeDefinition,
        shadow: Option<Shadow>,
    },
    RoundRect {
        bounds: Bounds,
        radius: f32,
        fill: Color,
        stroke: StrokeDefinition,
        shadow: Option<Shadow>,
    },
    Text {
        content: String,
        origin: Point,
        font: FontDefinition,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

impl Command {
    /// Returns a short name for the kind of operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FillRect { .. } => "fill-rect",
            Self::StrokeRect { .. } => "stroke-rect",
            Self::RoundRect { .. } => "round-rect",
            Self::Text { .. } => "text",
        }
    }

    /// Returns the text content if this is a text run.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Returns the shadow this operation casts, if any.
    pub fn shadow(&self) -> Option<Shadow> {
        match self {
            Self::FillRect { shadow, .. }
            | Self::StrokeRect { shadow, .. }
            | Self::RoundRect { shadow, .. } => *shadow,
            Self::Text { .. } => None,
        }
    }

    pub(super) fn to_svg_node(&self) -> SvgNode {
        match self {
            Self::FillRect {
                bounds,
                color,
                shadow,
            } => {
                let rect = rectangle(*bounds)
                    .set("fill", color)
                    .set("fill-opacity", color.alpha());
                Box::new(with_shadow(rect, *shadow))
            }
            Self::StrokeRect {
                bounds,
                stroke,
                shadow,
            } => {
                let rect = apply_stroke!(rectangle(*bounds).set("fill", "none"), stroke);
                Box::new(with_shadow(rect, *shadow))
            }
            Self::RoundRect {
                bounds,
                radius,
                fill,
                stroke,
                shadow,
            } => {
                let rect = rectangle(*bounds)
                    .set("rx", *radius)
                    .set("ry", *radius)
                    .set("fill", fill)
                    .set("fill-opacity", fill.alpha());
                let rect = if stroke.is_visible() {
                    apply_stroke!(rect, stroke)
                } else {
                    rect.set("stroke", "none")
                };
                Box::new(with_shadow(rect, *shadow))
            }
            Self::Text {
                content,
                origin,
                font,
                color,
                align,
                baseline,
            } => {
                // The serializer wraps text in newlines that the rasterizer
                // trims, so spaces inside the run are kept as no-break spaces.
                let text = svg_element::Text::new(content.replace(' ', NO_BREAK_SPACE))
                    .set("x", origin.x())
                    .set("y", origin.y())
                    .set("font-family", font.to_svg_family())
                    .set("font-size", font.size())
                    .set("font-weight", font.weight().to_svg_value())
                    .set("text-anchor", align.to_svg_value())
                    .set("dominant-baseline", baseline.to_svg_value())
                    .set("fill", color)
                    .set("fill-opacity", color.alpha());
                Box::new(text)
            }
        }
    }
}

const NO_BREAK_SPACE: &str = "\u{a0}";

fn rectangle(bounds: Bounds) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
}

fn with_shadow(rect: svg_element::Rectangle, shadow: Option<Shadow>) -> svg_element::Rectangle {
    match shadow {
        Some(shadow) => rect.set("filter", format!("url(#{})", shadow.filter_id())),
        None => rect,
    }
}
