//! Basic information: gender, life palace, fetal origin and true solar time.

use log::trace;

use mingpan_core::draw::FontWeight;

use super::{SectionDrawer, set_text_style};
use crate::{layout::SectionSlot, report::ReportData, surface::Surface, theme::Theme};

const TITLE_SIZE: f32 = 40.0;
const TITLE_BASELINE: f32 = 40.0;
const ROW_SIZE: f32 = 30.0;
const FIRST_ROW_BASELINE: f32 = 90.0;
const ROW_STEP: f32 = 45.0;
/// Offset of the value column from the slot's left edge.
const VALUE_COLUMN: f32 = 160.0;

/// Label/value rows drawn directly on the page background, without a panel.
#[derive(Debug)]
pub(super) struct BasicInfo<'a> {
    report: &'a ReportData,
}

impl<'a> BasicInfo<'a> {
    pub(super) fn new(report: &'a ReportData) -> Self {
        Self { report }
    }

    fn rows(&self) -> [(&'static str, &'a str); 4] {
        [
            ("性别：", self.report.gender.as_str()),
            ("命宫：", self.report.life_palace.as_str()),
            ("胎元：", self.report.fetal_origin.as_str()),
            ("真太阳时：", self.report.true_solar_time.as_str()),
        ]
    }
}

impl SectionDrawer for BasicInfo<'_> {
    fn draw_content(&self, surface: &mut Surface, slot: &SectionSlot, theme: &Theme) {
        let primary = theme.palette().text_primary();
        let mut scope = surface.scoped();

        set_text_style(&mut scope, theme.font(TITLE_SIZE, FontWeight::Bold), primary);
        scope.fill_text(slot.kind().title(), slot.at(0.0, TITLE_BASELINE));

        let label_font = theme.font(ROW_SIZE, FontWeight::Bold);
        let value_font = theme.font(ROW_SIZE, FontWeight::Medium);

        for (row, (label, value)) in self.rows().into_iter().enumerate() {
            let baseline = FIRST_ROW_BASELINE + ROW_STEP * row as f32;
            trace!(label, baseline; "Basic info row");

            scope.set_font(label_font.clone());
            scope.fill_text(label, slot.at(0.0, baseline));
            scope.set_font(value_font.clone());
            scope.fill_text(value, slot.at(VALUE_COLUMN, baseline));
        }
    }
}
