//! The "查看详情" call-to-action button.

use mingpan_core::{
    draw::{FontWeight, StrokeDefinition, TextAlign, TextBaseline},
    geometry::{Bounds, Point, Size},
};

use crate::{surface::Surface, theme::Theme};

const LABEL: &str = "查看详情";
const WIDTH: f32 = 120.0;
const HEIGHT: f32 = 40.0;
const BORDER_WIDTH: f32 = 2.0;
const LABEL_SIZE: f32 = 22.0;

/// Draws a pill-shaped button with its top-left corner at `top_left`.
///
/// The label is centered in the pill. Everything runs in its own scope, so
/// text alignment and baseline are back to what they were when this returns.
///
/// Returns the bounds of the pill.
pub(super) fn draw_detail_button(surface: &mut Surface, top_left: Point, theme: &Theme) -> Bounds {
    let palette = theme.palette();
    let bounds = Bounds::new_from_top_left(top_left, Size::new(WIDTH, HEIGHT));

    let mut scope = surface.scoped();
    scope.set_shadow(None);
    scope.set_fill(palette.button_fill());
    scope.set_stroke(StrokeDefinition::solid(palette.button_text(), BORDER_WIDTH));
    scope.round_rect(bounds, HEIGHT / 2.0);

    scope.set_font(theme.font(LABEL_SIZE, FontWeight::Medium));
    scope.set_fill(palette.button_text());
    scope.set_text_align(TextAlign::Center);
    scope.set_text_baseline(TextBaseline::Middle);
    scope.fill_text(LABEL, bounds.center());

    bounds
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::surface::Command;

    #[test]
    fn test_button_geometry_and_label() {
        let theme = Theme::default();
        let mut surface = Surface::new(theme.canvas_size());
        let bounds = draw_detail_button(&mut surface, Point::new(60.0, 550.0), &theme);

        assert_eq!(bounds.center(), Point::new(120.0, 570.0));
        match surface.commands() {
            [
                Command::RoundRect {
                    bounds: pill,
                    radius,
                    fill,
                    stroke,
                    shadow,
                },
                Command::Text {
                    content,
                    origin,
                    font,
                    color,
                    align,
                    baseline,
                },
            ] => {
                assert_eq!(*pill, bounds);
                assert_approx_eq!(f32, *radius, 20.0);
                assert_eq!(*fill, theme.palette().button_fill());
                assert_eq!(stroke.color(), theme.palette().button_text());
                assert_approx_eq!(f32, stroke.width(), 2.0);
                assert!(shadow.is_none());

                assert_eq!(content, "查看详情");
                assert_eq!(*origin, bounds.center());
                assert_approx_eq!(f32, font.size(), 22.0);
                assert_eq!(font.weight(), FontWeight::Medium);
                assert_eq!(*color, theme.palette().button_text());
                assert_eq!(*align, TextAlign::Center);
                assert_eq!(*baseline, TextBaseline::Middle);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn test_button_restores_alignment() {
        let theme = Theme::default();
        let mut surface = Surface::new(theme.canvas_size());
        surface.set_shadow(Some(theme.panel_shadow()));

        draw_detail_button(&mut surface, Point::new(60.0, 550.0), &theme);

        assert_eq!(surface.state().text_align(), TextAlign::Left);
        assert_eq!(surface.state().text_baseline(), TextBaseline::Alphabetic);
        assert_eq!(surface.state().shadow(), Some(theme.panel_shadow()));
    }
}
