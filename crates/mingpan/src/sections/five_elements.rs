//! Five element scores, each with a swatch in the element's accent color.

use log::warn;

use mingpan_core::{
    draw::{FontWeight, StrokeDefinition},
    geometry::{Bounds, Size},
};

use super::{CONTENT_INSET, PLACEHOLDER, SectionDrawer, button, set_text_style};
use crate::{
    layout::SectionSlot,
    report::{Element, ReportData},
    surface::Surface,
    theme::Theme,
};

const ROW_SIZE: f32 = 24.0;
const FIRST_ROW_BASELINE: f32 = 85.0;
const ROW_STEP: f32 = 30.0;
const SWATCH_SIZE: f32 = 12.0;
/// Height of the swatch's lower edge above the row baseline.
const SWATCH_RISE: f32 = 3.0;
/// Offset of the row text from the swatch's left edge.
const TEXT_OFFSET: f32 = 20.0;
/// Distance from the last row's baseline to the top of the button.
const BUTTON_SPACING: f32 = 18.0;

#[derive(Debug)]
pub(super) struct FiveElements<'a> {
    report: &'a ReportData,
}

impl<'a> FiveElements<'a> {
    pub(super) fn new(report: &'a ReportData) -> Self {
        Self { report }
    }

    /// `label：score`, with the shortest formatting that round-trips.
    fn row_text(&self, element: Element) -> String {
        match self.report.score(element) {
            Some(score) => format!("{}：{score}", element.label()),
            None => {
                warn!(
                    element:? = element,
                    found = self.report.five_elements.len();
                    "Missing element score, drawing placeholder"
                );
                format!("{}：{PLACEHOLDER}", element.label())
            }
        }
    }
}

impl SectionDrawer for FiveElements<'_> {
    fn draw_content(&self, surface: &mut Surface, slot: &SectionSlot, theme: &Theme) {
        let palette = theme.palette();
        let font = theme.font(ROW_SIZE, FontWeight::Medium);

        let mut baseline = FIRST_ROW_BASELINE;
        {
            let mut scope = surface.scoped();
            for (row, element) in Element::ALL.into_iter().enumerate() {
                baseline = FIRST_ROW_BASELINE + ROW_STEP * row as f32;

                let accent = palette.element(element);
                let swatch_top = slot.at(CONTENT_INSET, baseline - SWATCH_RISE - SWATCH_SIZE);
                scope.set_shadow(None);
                scope.set_fill(accent);
                scope.set_stroke(StrokeDefinition::solid(accent, 0.0));
                scope.round_rect(
                    Bounds::new_from_top_left(swatch_top, Size::new(SWATCH_SIZE, SWATCH_SIZE)),
                    SWATCH_SIZE / 2.0,
                );

                set_text_style(&mut scope, font.clone(), palette.text_primary());
                scope.fill_text(
                    &self.row_text(element),
                    slot.at(CONTENT_INSET + TEXT_OFFSET, baseline),
                );
            }
        }

        button::draw_detail_button(
            surface,
            slot.at(CONTENT_INSET, baseline + BUTTON_SPACING),
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::SectionKind,
        sections::tests::{draw_section, sample_report, texts},
        surface::Command,
    };

    fn rows(surface: &Surface) -> Vec<String> {
        texts(surface)
            .into_iter()
            .skip(1)
            .take(5)
            .map(|(t, _)| t.to_string())
            .collect()
    }

    #[test]
    fn test_rows_use_shortest_formatting() {
        let report = ReportData {
            five_elements: vec![9.0, 12.5, 11.0, 0.25, 5.0],
            ..sample_report()
        };
        let (surface, _) = draw_section(SectionKind::FiveElements, &report);
        assert_eq!(rows(&surface), ["金：9", "木：12.5", "水：11", "火：0.25", "土：5"]);
    }

    #[test]
    fn test_row_positions() {
        let (surface, slot) = draw_section(SectionKind::FiveElements, &sample_report());
        let texts = texts(&surface);
        assert_eq!(texts[1].1, slot.at(40.0, 85.0));
        assert_eq!(texts[5].1, slot.at(40.0, 205.0));
    }

    #[test]
    fn test_swatches_use_accent_colors() {
        let theme = Theme::default();
        let (surface, slot) = draw_section(SectionKind::FiveElements, &sample_report());
        let swatches: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::RoundRect { bounds, fill, .. } if bounds.width() == SWATCH_SIZE => {
                    Some((*bounds, *fill))
                }
                _ => None,
            })
            .collect();

        assert_eq!(swatches.len(), 5);
        for ((bounds, fill), element) in swatches.into_iter().zip(Element::ALL) {
            assert_eq!(fill, theme.palette().element(element));
            assert_eq!(bounds.min_x(), slot.at(20.0, 0.0).x());
        }
    }

    #[test]
    fn test_short_scores_render_placeholders() {
        let report = ReportData {
            five_elements: vec![9.0, 12.0, 11.0],
            ..sample_report()
        };
        let (surface, _) = draw_section(SectionKind::FiveElements, &report);
        assert_eq!(rows(&surface), ["金：9", "木：12", "水：11", "火：-", "土：-"]);
    }

    #[test]
    fn test_button_inside_slot() {
        let (surface, slot) = draw_section(SectionKind::FiveElements, &sample_report());
        let pill = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::RoundRect { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .last()
            .unwrap();

        assert_eq!(pill.min_point(), slot.at(20.0, 223.0));
        assert!(slot.bounds().contains(pill));
    }
}
