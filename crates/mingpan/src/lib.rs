//! Mingpan - Renders fortune report records into shareable PNG report cards.
//!
//! A [`ReportData`](report::ReportData) record is painted onto a fixed-size
//! canvas as five stacked sections (basic information, four pillars, five
//! element scores, pattern analysis and life interpretation) and encoded as
//! PNG. Everything about the look lives in a [`Theme`](theme::Theme).

pub mod config;
pub mod layout;
pub mod report;
pub mod surface;
pub mod theme;

mod error;
mod sections;

pub use mingpan_core::{color, draw, geometry};

pub use error::{ConfigError, MingpanError, RenderError, ValidationError};

use log::{debug, info, trace};

use mingpan_core::geometry::{Bounds, Point};

use layout::SectionLayout;
use report::ReportData;
use surface::Surface;
use theme::Theme;

/// Paints report records with one theme.
///
/// A renderer is immutable once built and can be shared between threads;
/// every call to [`ReportRenderer::render`] works on a surface of its own.
///
/// # Examples
///
/// ```rust,no_run
/// use mingpan::{ReportRenderer, report::ReportData, theme::Theme};
///
/// let report = ReportData::from_json(&std::fs::read_to_string("report.json").unwrap())
///     .expect("Failed to parse report");
/// report.validate().expect("Malformed report");
///
/// let renderer = ReportRenderer::new(Theme::default());
/// let png = renderer.render(&report).expect("Failed to render");
/// std::fs::write("report.png", png).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    theme: Theme,
    layout: SectionLayout,
}

impl ReportRenderer {
    /// Creates a renderer for `theme`.
    pub fn new(theme: Theme) -> Self {
        let layout = SectionLayout::new(&theme);
        Self { theme, layout }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns where each section is placed.
    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Paints `report` onto a new surface without encoding it.
    ///
    /// The background is filled first, then every section is drawn in
    /// layout order. The record is not validated: missing positions are
    /// drawn as placeholders and surplus positions are ignored.
    pub fn paint(&self, report: &ReportData) -> Surface {
        let canvas = self.theme.canvas_size();
        let mut surface = Surface::new(canvas);

        {
            let mut scope = surface.scoped();
            scope.set_fill(self.theme.palette().background());
            scope.fill_rect(Bounds::new_from_top_left(Point::default(), canvas));
        }

        for slot in self.layout.slots() {
            trace!(section:? = slot.kind(), top = slot.bounds().min_y(); "Drawing section");
            sections::drawer_for(slot.kind(), report).draw(&mut surface, slot, &self.theme);
        }

        debug!(commands = surface.commands().len(); "Report painted");
        surface
    }

    /// Renders `report` to PNG bytes of the theme's canvas size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encoding`] if the painted surface cannot be
    /// rasterized or encoded. No other failure escapes a render.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use mingpan::{ReportRenderer, report::ReportData};
    ///
    /// let renderer = ReportRenderer::default();
    /// let png = renderer.render(&ReportData::default())
    ///     .expect("Failed to render report");
    /// assert!(png.starts_with(b"\x89PNG"));
    /// ```
    pub fn render(&self, report: &ReportData) -> Result<Vec<u8>, RenderError> {
        info!(
            width = self.theme.canvas_width(),
            height = self.theme.canvas_height();
            "Rendering report"
        );

        let png = self.paint(report).encode_png()?;

        info!(bytes = png.len(); "Report rendered");
        Ok(png)
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
