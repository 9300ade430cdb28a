//! Drawers for the individual report sections.
//!
//! Each [`SectionKind`] has one drawer. A drawer receives the slot reserved
//! for it by [`SectionLayout`](crate::layout::SectionLayout) and places its
//! content at fixed offsets from the slot's top-left corner. Drawers set every
//! piece of drawing state they depend on and leave the surface state as they
//! found it.

mod basic_info;
mod button;
mod five_elements;
mod four_pillars;
mod text_panel;

use mingpan_core::{
    color::Color,
    draw::{FontDefinition, FontWeight, StrokeDefinition, TextAlign, TextBaseline},
};

use crate::{
    layout::{SectionKind, SectionSlot},
    report::ReportData,
    surface::Surface,
    theme::Theme,
};

use basic_info::BasicInfo;
use five_elements::FiveElements;
use four_pillars::FourPillars;
use text_panel::TextPanel;

/// Horizontal inset of panel content from the panel edge.
const CONTENT_INSET: f32 = 20.0;
/// Baseline of a panel title below the panel top.
const TITLE_BASELINE: f32 = 45.0;
const TITLE_SIZE: f32 = 36.0;
const PANEL_BORDER_WIDTH: f32 = 2.0;

/// Drawn in place of a value the report record does not have.
const PLACEHOLDER: &str = "-";

/// Paints one section of the report into its slot.
pub(crate) trait SectionDrawer: std::fmt::Debug {
    /// Draws everything the section shows on top of its panel.
    fn draw_content(&self, surface: &mut Surface, slot: &SectionSlot, theme: &Theme);

    /// Draws the panel and title when the section has one, then the content.
    fn draw(&self, surface: &mut Surface, slot: &SectionSlot, theme: &Theme) {
        if slot.kind().has_panel() {
            draw_panel(surface, slot, theme);
        }
        self.draw_content(surface, slot, theme);
    }
}

/// Returns the drawer for `kind`, reading its content from `report`.
pub(crate) fn drawer_for(kind: SectionKind, report: &ReportData) -> Box<dyn SectionDrawer + '_> {
    match kind {
        SectionKind::BasicInfo => Box::new(BasicInfo::new(report)),
        SectionKind::FourPillars => Box::new(FourPillars::new(report)),
        SectionKind::FiveElements => Box::new(FiveElements::new(report)),
        SectionKind::PatternAnalysis => Box::new(TextPanel::new(&report.pattern_analysis)),
        SectionKind::LifeInterpretation => Box::new(TextPanel::new(&report.life_interpretation)),
    }
}

/// Draws the bordered, shadowed panel behind a section and its title.
fn draw_panel(surface: &mut Surface, slot: &SectionSlot, theme: &Theme) {
    let palette = theme.palette();
    {
        let mut scope = surface.scoped();
        scope.set_shadow(Some(theme.panel_shadow()));
        scope.set_fill(palette.section_fill());
        scope.fill_rect(slot.bounds());
        scope.set_stroke(StrokeDefinition::solid(
            palette.section_border(),
            PANEL_BORDER_WIDTH,
        ));
        scope.stroke_rect(slot.bounds());
    }

    let mut scope = surface.scoped();
    set_text_style(
        &mut scope,
        theme.font(TITLE_SIZE, FontWeight::Medium),
        palette.text_primary(),
    );
    scope.fill_text(
        slot.kind().title(),
        slot.at(CONTENT_INSET, TITLE_BASELINE),
    );
}

/// Left-aligned, alphabetic-baseline text in `font` and `color`, no shadow.
fn set_text_style(surface: &mut Surface, font: FontDefinition, color: Color) {
    surface.set_font(font);
    surface.set_fill(color);
    surface.set_text_align(TextAlign::Left);
    surface.set_text_baseline(TextBaseline::Alphabetic);
    surface.set_shadow(None);
}
