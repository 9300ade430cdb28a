//! Typography definitions for text runs.
//!
//! # Overview
//!
//! - [`FontDefinition`] - Font family, size and weight of a text run
//! - [`FontWeight`] - The weights used by report cards
//! - [`TextAlign`] - Horizontal anchoring of a text run relative to its origin
//! - [`TextBaseline`] - Vertical anchoring of a text run relative to its origin
//!
//! # Quick Start
//!
//! ```
//! # use mingpan_core::draw::{FontDefinition, FontWeight};
//! let title = FontDefinition::new("Noto Sans SC", 36.0, FontWeight::Medium);
//! assert_eq!(title.size(), 36.0);
//! assert_eq!(title.weight().to_svg_value(), "500");
//! ```

/// Font weight of a text run.
///
/// Maps to the SVG/CSS `font-weight` property.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    /// Weight 400
    #[default]
    Regular,
    /// Weight 500, used for body copy and section titles
    Medium,
    /// Weight 700
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Regular => "normal",
            Self::Medium => "500",
            Self::Bold => "bold",
        }
    }
}

/// Horizontal anchoring of text relative to its origin point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// The run starts at the origin x-coordinate
    #[default]
    Left,
    /// The run is centered on the origin x-coordinate
    Center,
}

impl TextAlign {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
        }
    }
}

/// Vertical anchoring of text relative to its origin point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// The origin y-coordinate is the alphabetic baseline
    #[default]
    Alphabetic,
    /// The origin y-coordinate is the vertical middle of the em box
    Middle,
}

impl TextBaseline {
    /// Returns the SVG `dominant-baseline` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Middle => "central",
        }
    }
}

/// Font family, pixel size and weight of a text run.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `10` |
/// | Weight | [`FontWeight::Regular`] |
#[derive(Debug, Clone, PartialEq)]
pub struct FontDefinition {
    family: String,
    size: f32,
    weight: FontWeight,
}

impl FontDefinition {
    /// Creates a new font definition.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name (e.g., "Noto Sans SC")
    /// * `size` - The font size in pixels
    /// * `weight` - The font weight
    pub fn new(family: &str, size: f32, weight: FontWeight) -> Self {
        Self {
            family: family.to_string(),
            size,
            weight,
        }
    }

    /// Returns the font family name
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the font size in pixels
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the font weight
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Returns the SVG `font-family` value, quoted so multi-word names survive.
    pub fn to_svg_family(&self) -> String {
        format!("'{}'", self.family.replace('\'', ""))
    }
}

impl Default for FontDefinition {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 10.0,
            weight: FontWeight::Regular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_definition_default() {
        let font = FontDefinition::default();
        assert_eq!(font.family(), "sans-serif");
        assert_eq!(font.size(), 10.0);
        assert_eq!(font.weight(), FontWeight::Regular);
    }

    #[test]
    fn test_font_definition_new() {
        let font = FontDefinition::new("Noto Sans SC", 40.0, FontWeight::Bold);
        assert_eq!(font.family(), "Noto Sans SC");
        assert_eq!(font.size(), 40.0);
        assert_eq!(font.weight(), FontWeight::Bold);
    }

    #[test]
    fn test_font_weight_svg_values() {
        assert_eq!(FontWeight::Regular.to_svg_value(), "normal");
        assert_eq!(FontWeight::Medium.to_svg_value(), "500");
        assert_eq!(FontWeight::Bold.to_svg_value(), "bold");
    }

    #[test]
    fn test_text_anchor_svg_values() {
        assert_eq!(TextAlign::default(), TextAlign::Left);
        assert_eq!(TextAlign::Left.to_svg_value(), "start");
        assert_eq!(TextAlign::Center.to_svg_value(), "middle");

        assert_eq!(TextBaseline::default(), TextBaseline::Alphabetic);
        assert_eq!(TextBaseline::Alphabetic.to_svg_value(), "alphabetic");
        assert_eq!(TextBaseline::Middle.to_svg_value(), "central");
    }

    #[test]
    fn test_svg_family_is_quoted() {
        let font = FontDefinition::new("Noto Sans SC", 24.0, FontWeight::Medium);
        assert_eq!(font.to_svg_family(), "'Noto Sans SC'");

        let odd = FontDefinition::new("It's", 24.0, FontWeight::Medium);
        assert_eq!(odd.to_svg_family(), "'Its'");
    }
}
