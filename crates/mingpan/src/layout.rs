//! Vertical placement of the report sections.
//!
//! Sections are stacked top to bottom in [`SectionKind::ALL`] order, starting
//! at the theme padding and separated by the theme gap. Every section has a
//! fixed height budget sized for its expected content; nothing is measured.
//! Text that is longer than expected is not clipped and may run past its
//! section. Adding or removing a section only touches [`SectionKind`].
//!
//! ```text
//!  padding ┌──────────────────────────┐
//!          │ Basic Info        (240)  │
//!      gap └──────────────────────────┘
//!          ┌──────────────────────────┐
//!          │ Four Pillars      (295)  │
//!          └──────────────────────────┘
//!                       ⋮
//! ```

use log::debug;

use mingpan_core::geometry::{Bounds, Point, Size};

use crate::theme::Theme;

/// The sections of a report card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    BasicInfo,
    FourPillars,
    FiveElements,
    PatternAnalysis,
    LifeInterpretation,
}

impl SectionKind {
    /// Every section, in the order it is stacked and drawn.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::BasicInfo,
        SectionKind::FourPillars,
        SectionKind::FiveElements,
        SectionKind::PatternAnalysis,
        SectionKind::LifeInterpretation,
    ];

    /// Returns the title printed at the top of the section.
    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "基本信息",
            Self::FourPillars => "四柱排盘",
            Self::FiveElements => "五行分数",
            Self::PatternAnalysis => "格局分析",
            Self::LifeInterpretation => "命理解读",
        }
    }

    /// Returns the fixed height reserved for the section.
    pub fn height_budget(self) -> f32 {
        match self {
            Self::BasicInfo => 240.0,
            Self::FourPillars => 295.0,
            Self::FiveElements => 277.0,
            Self::PatternAnalysis => 160.0,
            Self::LifeInterpretation => 160.0,
        }
    }

    /// Returns true if the section sits on a bordered, shadowed panel.
    pub fn has_panel(self) -> bool {
        !matches!(self, Self::BasicInfo)
    }
}

/// The box reserved for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSlot {
    kind: SectionKind,
    bounds: Bounds,
}

impl SectionSlot {
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the top-left corner of the slot.
    pub fn origin(&self) -> Point {
        self.bounds.min_point()
    }

    /// Returns a point at the given offset from the slot's top-left corner.
    pub fn at(&self, dx: f32, dy: f32) -> Point {
        self.origin().add_point(Point::new(dx, dy))
    }
}

/// Positions of all sections for one theme.
///
/// # Examples
///
/// ```
/// # use mingpan::{layout::{SectionKind, SectionLayout}, theme::Theme};
/// let layout = SectionLayout::new(&Theme::default());
/// let pillars = layout.slot(SectionKind::FourPillars);
/// assert_eq!(pillars.bounds().min_y(), 310.0);
/// assert_eq!(pillars.bounds().width(), 670.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    slots: [SectionSlot; SectionKind::ALL.len()],
}

impl SectionLayout {
    /// Stacks the sections using the theme's padding and gap.
    pub fn new(theme: &Theme) -> Self {
        let left = theme.padding();
        let width = theme.content_width();
        let mut top = theme.padding();

        let slots = SectionKind::ALL.map(|kind| {
            let height = kind.height_budget();
            let bounds = Bounds::new_from_top_left(Point::new(left, top), Size::new(width, height));
            top += height + theme.gap();
            debug!(
                section:? = kind,
                top = bounds.min_y(),
                height;
                "Placed section"
            );
            SectionSlot { kind, bounds }
        });

        Self { slots }
    }

    /// Returns all slots in drawing order.
    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    /// Returns the slot reserved for `kind`.
    pub fn slot(&self, kind: SectionKind) -> &SectionSlot {
        self.slots
            .iter()
            .find(|slot| slot.kind == kind)
            .expect("every section kind has a slot")
    }

    /// Returns the lower edge of the last section.
    pub fn bottom(&self) -> f32 {
        self.slots
            .last()
            .map_or(0.0, |slot| slot.bounds.max_y())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default_offsets() {
        let layout = SectionLayout::new(&Theme::default());
        let tops: Vec<f32> = layout.slots().iter().map(|s| s.bounds().min_y()).collect();
        assert_eq!(tops, [40.0, 310.0, 635.0, 942.0, 1132.0]);
        assert_approx_eq!(f32, layout.bottom(), 1292.0);
    }

    #[test]
    fn test_slots_follow_section_order() {
        let layout = SectionLayout::new(&Theme::default());
        let kinds: Vec<SectionKind> = layout.slots().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, SectionKind::ALL);
    }

    #[test]
    fn test_horizontal_extent() {
        let theme = Theme::default();
        let layout = SectionLayout::new(&theme);
        for slot in layout.slots() {
            assert_approx_eq!(f32, slot.bounds().min_x(), theme.padding());
            assert_approx_eq!(f32, slot.bounds().width(), theme.content_width());
        }
    }

    #[test]
    fn test_default_stack_fits_canvas() {
        let theme = Theme::default();
        let layout = SectionLayout::new(&theme);
        assert!(layout.bottom() <= theme.canvas_height() as f32 - theme.padding());
    }

    #[test]
    fn test_only_basic_info_has_no_panel() {
        let panelled: Vec<bool> = SectionKind::ALL.iter().map(|k| k.has_panel()).collect();
        assert_eq!(panelled, [false, true, true, true, true]);
    }

    #[test]
    fn test_slot_at_offsets_from_origin() {
        let layout = SectionLayout::new(&Theme::default());
        let slot = layout.slot(SectionKind::FiveElements);
        assert_eq!(slot.at(20.0, 45.0), Point::new(60.0, 680.0));
    }

    proptest! {
        #[test]
        fn prop_sections_never_overlap(padding in 0.0f32..200.0, gap in 0.0f32..100.0) {
            let mut theme = Theme::default();
            theme.padding = padding;
            theme.gap = gap;

            let layout = SectionLayout::new(&theme);
            for pair in layout.slots().windows(2) {
                let gap_between = pair[1].bounds().min_y() - pair[0].bounds().max_y();
                prop_assert!((gap_between - gap).abs() < 1e-2);
            }
            prop_assert!((layout.slots()[0].bounds().min_y() - padding).abs() < 1e-3);
        }
    }
}
