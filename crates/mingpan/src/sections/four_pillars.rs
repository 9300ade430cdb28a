//! The four pillars of the birth chart.

use log::warn;

use mingpan_core::draw::FontWeight;

use super::{CONTENT_INSET, PLACEHOLDER, SectionDrawer, button, set_text_style};
use crate::{
    layout::SectionSlot,
    report::{Pillar, ReportData},
    surface::Surface,
    theme::Theme,
};

const LABEL_SIZE: f32 = 30.0;
const CODE_SIZE: f32 = 40.0;
/// Offset of the code column from the slot's left edge.
const CODE_COLUMN: f32 = 100.0;
const FIRST_ROW_BASELINE: f32 = 95.0;
const ROW_STEP: f32 = 42.0;
/// Distance from the last row's baseline to the top of the button.
const BUTTON_SPACING: f32 = 20.0;

#[derive(Debug)]
pub(super) struct FourPillars<'a> {
    report: &'a ReportData,
}

impl<'a> FourPillars<'a> {
    pub(super) fn new(report: &'a ReportData) -> Self {
        Self { report }
    }

    fn code(&self, pillar: Pillar) -> &'a str {
        self.report.pillar(pillar).unwrap_or_else(|| {
            warn!(
                pillar:? = pillar,
                found = self.report.four_pillars.len();
                "Missing pillar code, drawing placeholder"
            );
            PLACEHOLDER
        })
    }
}

impl SectionDrawer for FourPillars<'_> {
    fn draw_content(&self, surface: &mut Surface, slot: &SectionSlot, theme: &Theme) {
        let palette = theme.palette();
        let label_font = theme.font(LABEL_SIZE, FontWeight::Medium);
        let code_font = theme.font(CODE_SIZE, FontWeight::Bold);

        let mut baseline = FIRST_ROW_BASELINE;
        {
            let mut scope = surface.scoped();
            for (row, pillar) in Pillar::ALL.into_iter().enumerate() {
                baseline = FIRST_ROW_BASELINE + ROW_STEP * row as f32;

                set_text_style(&mut scope, label_font.clone(), palette.text_secondary());
                scope.fill_text(pillar.label(), slot.at(CONTENT_INSET, baseline));

                set_text_style(&mut scope, code_font.clone(), palette.text_primary());
                scope.fill_text(self.code(pillar), slot.at(CODE_COLUMN, baseline));
            }
        }

        button::draw_detail_button(
            surface,
            slot.at(CONTENT_INSET, baseline + BUTTON_SPACING),
            theme,
        );
    }
}
