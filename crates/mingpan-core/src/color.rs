//! Palette colors.
//!
//! [`Color`] keeps whatever CSS color text a theme supplied (hex, `rgb()`,
//! `rgba()` or a named color) parsed into a `DynamicColor`, and hands it to
//! the SVG encoder as a hex fill plus a separate opacity.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// A parsed CSS color.
///
/// Equality and hashing follow the CSS serialization, so two colors written
/// the same way in a theme compare equal.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input when it is not a CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use mingpan_core::color::Color;
    ///
    /// let paper = Color::new("#F2F2F2").unwrap();
    /// let shadow = Color::new("rgba(93, 88, 85, 0.8)").unwrap();
    /// assert!(shadow.alpha() < paper.alpha());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Lowercase `#rrggbb` in sRGB, without alpha.
    ///
    /// ```
    /// use mingpan_core::color::Color;
    ///
    /// assert_eq!(Color::new("#5D5855").unwrap().to_hex(), "#5d5855");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// A token usable inside an XML id, alpha included.
    ///
    /// Always `c` followed by eight hex digits.
    pub fn to_id_safe_string(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("c{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }

    /// Opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("named CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_hex())
    }
}
