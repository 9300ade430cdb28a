//! Drop shadow definition.

use crate::color::Color;

/// A drop shadow painted behind a shape, centered under it.
///
/// `blur` follows the 2D-canvas convention (`shadowBlur`): the gaussian
/// standard deviation used by raster backends is half of it.
///
/// # Examples
///
/// ```
/// # use mingpan_core::{color::Color, draw::Shadow};
/// let shadow = Shadow::new(Color::new("rgba(93, 88, 85, 0.8)").unwrap(), 6.0);
/// assert_eq!(shadow.std_deviation(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    color: Color,
    blur: f32,
}

impl Shadow {
    pub fn new(color: Color, blur: f32) -> Self {
        Self { color, blur }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn blur(&self) -> f32 {
        self.blur
    }

    /// Gaussian standard deviation equivalent to [`Shadow::blur`].
    pub fn std_deviation(&self) -> f32 {
        self.blur / 2.0
    }

    /// Returns an identifier that is equal for equal shadows.
    ///
    /// Used to share a single filter definition between every shape that
    /// casts the same shadow.
    pub fn filter_id(&self) -> String {
        format!(
            "shadow-{}-{}",
            self.color.to_id_safe_string(),
            id_number(self.blur),
        )
    }
}

fn id_number(value: f32) -> String {
    format!("{value}").replace('-', "m").replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_shadow() -> Shadow {
        Shadow::new(Color::new("rgba(93, 88, 85, 0.8)").unwrap(), 6.0)
    }

    #[test]
    fn test_filter_id_is_stable() {
        assert_eq!(panel_shadow().filter_id(), panel_shadow().filter_id());
    }

    #[test]
    fn test_filter_id_distinguishes_shadows() {
        let base = panel_shadow();
        let blurrier = Shadow::new(base.color(), 12.5);
        let darker = Shadow::new(Color::new("rgba(0, 0, 0, 0.8)").unwrap(), 6.0);

        assert_ne!(base.filter_id(), blurrier.filter_id());
        assert_ne!(base.filter_id(), darker.filter_id());
        assert!(
            blurrier
                .filter_id()
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        );
    }
}
