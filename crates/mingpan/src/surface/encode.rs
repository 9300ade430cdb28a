//! Replays a display list as SVG and rasterizes it to PNG.

use std::{
    collections::BTreeMap,
    sync::{Arc, OnceLock},
};

use log::{debug, info};
use resvg::{
    tiny_skia,
    usvg::{self, fontdb},
};
use svg::node::element as svg_element;

use mingpan_core::{draw::Shadow, geometry::Size};

use super::Command;
use crate::error::RenderError;

/// System fonts, loaded once per process and shared by every render.
static FONT_DATABASE: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

fn font_database() -> Arc<fontdb::Database> {
    FONT_DATABASE
        .get_or_init(|| {
            let mut database = fontdb::Database::new();
            database.load_system_fonts();
            info!(faces = database.len(); "Loaded system fonts");
            Arc::new(database)
        })
        .clone()
}

/// Builds an SVG document of `size` that draws `commands` in order.
///
/// Every distinct shadow becomes one filter in a leading `<defs>` block.
pub(super) fn to_svg_document(size: Size, commands: &[Command]) -> svg::Document {
    let mut document = svg::Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", size.width(), size.height()),
        )
        .set("width", size.width())
        .set("height", size.height());

    let shadows: BTreeMap<String, Shadow> = commands
        .iter()
        .filter_map(Command::shadow)
        .map(|shadow| (shadow.filter_id(), shadow))
        .collect();

    if !shadows.is_empty() {
        let definitions = shadows
            .iter()
            .fold(svg_element::Definitions::new(), |defs, (id, shadow)| {
                defs.add(shadow_filter(id, shadow))
            });
        document = document.add(definitions);
    }

    commands
        .iter()
        .fold(document, |document, command| document.add(command.to_svg_node()))
}

fn shadow_filter(id: &str, shadow: &Shadow) -> svg_element::Filter {
    let drop_shadow = svg_element::FilterEffectDropShadow::new()
        .set("dx", 0)
        .set("dy", 0)
        .set("stdDeviation", shadow.std_deviation())
        .set("flood-color", shadow.color().to_hex())
        .set("flood-opacity", shadow.color().alpha());

    svg_element::Filter::new()
        .set("id", id)
        .set("x", "-20%")
        .set("y", "-20%")
        .set("width", "140%")
        .set("height", "140%")
        .add(drop_shadow)
}

/// Rasterizes `document` onto a pixmap of `size` and encodes it as PNG.
///
/// Text whose family is not installed falls back to `default_family`, and
/// from there to whatever the font database resolves.
pub(super) fn rasterize(
    document: &svg::Document,
    size: Size,
    default_family: &str,
) -> Result<Vec<u8>, RenderError> {
    if size.is_empty() {
        return Err(RenderError::Encoding(format!(
            "cannot rasterize an empty canvas of {}x{}",
            size.width(),
            size.height()
        )));
    }

    let width = size.width().round() as u32;
    let height = size.height().round() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        RenderError::Encoding(format!("cannot allocate a {width}x{height} pixmap"))
    })?;

    let mut options = usvg::Options::default();
    options.font_family = default_family.to_string();
    options.fontdb = font_database();

    let source = document.to_string();
    let tree = usvg::Tree::from_str(&source, &options)
        .map_err(|err| RenderError::Encoding(format!("rejected scene: {err}")))?;
    debug!(width, height, svg_bytes = source.len(); "Rasterizing scene");

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| RenderError::Encoding(err.to_string()))
}

#[cfg(test)]
mod tests {
    use mingpan_core::{
        color::Color,
        geometry::{Bounds, Point},
    };

    use super::*;

    fn shadowed_rect(y: f32, shadow: Shadow) -> Command {
        Command::FillRect {
            bounds: Bounds::new_from_top_left(Point::new(10.0, y), Size::new(50.0, 20.0)),
            color: Color::new("#EBE8E5").unwrap(),
            shadow: Some(shadow),
        }
    }

    #[test]
    fn test_document_has_canvas_dimensions() {
        let document = to_svg_document(Size::new(750.0, 1334.0), &[]).to_string();
        assert!(document.contains(r#"viewBox="0 0 750 1334""#));
        assert!(document.contains(r#"width="750""#));
        assert!(!document.contains("<defs"));
    }

    #[test]
    fn test_equal_shadows_share_one_filter() {
        let shadow = Shadow::new(Color::new("rgba(93, 88, 85, 0.8)").unwrap(), 6.0);
        let other = Shadow::new(Color::new("black").unwrap(), 2.0);
        let commands = [
            shadowed_rect(0.0, shadow),
            shadowed_rect(30.0, shadow),
            shadowed_rect(60.0, other),
        ];

        let document = to_svg_document(Size::new(100.0, 100.0), &commands).to_string();
        assert_eq!(document.matches("<filter").count(), 2);
        assert_eq!(document.matches("<feDropShadow").count(), 2);
        assert!(document.contains(r#"stdDeviation="3""#));
        assert_eq!(document.matches(r#"dx="0""#).count(), 2);
        assert_eq!(document.matches(r#"dy="0""#).count(), 2);
    }

    #[test]
    fn test_commands_keep_document_order() {
        let commands = [
            Command::FillRect {
                bounds: Bounds::new_from_top_left(Point::default(), Size::new(10.0, 10.0)),
                color: Color::default(),
                shadow: None,
            },
            Command::Text {
                content: "后".to_string(),
                origin: Point::new(0.0, 10.0),
                font: Default::default(),
                color: Color::default(),
                align: Default::default(),
                baseline: Default::default(),
            },
        ];

        let document = to_svg_document(Size::new(10.0, 10.0), &commands).to_string();
        let rect_at = document.find("<rect").unwrap();
        let text_at = document.find("<text").unwrap();
        assert!(rect_at < text_at);
    }

    #[test]
    fn test_rasterize_rejects_empty_size() {
        let size = Size::new(10.0, 0.0);
        let document = to_svg_document(size, &[]);
        assert!(matches!(
            rasterize(&document, size, "sans-serif"),
            Err(RenderError::Encoding(_))
        ));
    }
}
