//! Single-run free text sections: pattern analysis and life interpretation.

use mingpan_core::draw::FontWeight;

use super::{CONTENT_INSET, SectionDrawer, button, set_text_style};
use crate::{layout::SectionSlot, surface::Surface, theme::Theme};

const BODY_SIZE: f32 = 24.0;
const BODY_BASELINE: f32 = 85.0;
const BUTTON_TOP: f32 = 105.0;

/// A panel with a title, one run of body text and a button.
///
/// The body is neither measured nor wrapped; long text runs past the panel.
#[derive(Debug)]
pub(super) struct TextPanel<'a> {
    body: &'a str,
}

impl<'a> TextPanel<'a> {
    pub(super) fn new(body: &'a str) -> Self {
        Self { body }
    }
}

impl SectionDrawer for TextPanel<'_> {
    fn draw_content(&self, surface: &mut Surface, slot: &SectionSlot, theme: &Theme) {
        {
            let mut scope = surface.scoped();
            set_text_style(
                &mut scope,
                theme.font(BODY_SIZE, FontWeight::Medium),
                theme.palette().text_primary(),
            );
            scope.fill_text(self.body, slot.at(CONTENT_INSET, BODY_BASELINE));
        }

        button::draw_detail_button(surface, slot.at(CONTENT_INSET, BUTTON_TOP), theme);
    }
}
