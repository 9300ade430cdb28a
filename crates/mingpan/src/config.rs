//! Configuration types for Mingpan report rendering.
//!
//! All types implement [`serde::Deserialize`] so a configuration can be
//! loaded from any serde format; the CLI reads TOML. Every field is optional
//! and falls back to the [`Theme`] defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`ThemeConfig`] - Overrides for canvas size, spacing and font family.
//! - [`PaletteConfig`] / [`ElementColorsConfig`] - Overrides for color roles,
//!   as CSS color strings.
//!
//! # Example
//!
//! ```
//! # use mingpan::config::AppConfig;
//! let config = AppConfig::default();
//! let theme = config.theme().to_theme().unwrap();
//! assert_eq!(theme.canvas_width(), 750);
//! ```

use serde::Deserialize;

use mingpan_core::color::Color;

use crate::{error::ConfigError, theme::Theme};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Theme configuration section.
    #[serde(default)]
    theme: ThemeConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given theme section.
    pub fn new(theme: ThemeConfig) -> Self {
        Self { theme }
    }

    /// Returns the theme configuration.
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }
}

/// Overrides applied on top of [`Theme::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    canvas_width: Option<u32>,

    #[serde(default)]
    canvas_height: Option<u32>,

    #[serde(default)]
    padding: Option<f32>,

    #[serde(default)]
    gap: Option<f32>,

    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    colors: PaletteConfig,
}

/// Color role overrides, as CSS color strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    text_primary: Option<String>,
    #[serde(default)]
    text_secondary: Option<String>,
    #[serde(default)]
    section_fill: Option<String>,
    #[serde(default)]
    section_border: Option<String>,
    #[serde(default)]
    button_fill: Option<String>,
    #[serde(default)]
    button_text: Option<String>,
    #[serde(default)]
    shadow: Option<String>,
    #[serde(default)]
    elements: ElementColorsConfig,
}

/// Element accent overrides, as CSS color strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementColorsConfig {
    #[serde(default)]
    metal: Option<String>,
    #[serde(default)]
    wood: Option<String>,
    #[serde(default)]
    water: Option<String>,
    #[serde(default)]
    fire: Option<String>,
    #[serde(default)]
    earth: Option<String>,
}

impl ThemeConfig {
    /// Builds the [`Theme`] described by this configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidColor`] if a color string cannot be parsed.
    /// - [`ConfigError::InvalidDimension`] if the canvas is empty, a spacing
    ///   value is negative or not finite, or the padding leaves no room for
    ///   content.
    pub fn to_theme(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::default();

        if let Some(width) = self.canvas_width {
            theme.canvas_width = positive_dimension("canvas_width", width)?;
        }
        if let Some(height) = self.canvas_height {
            theme.canvas_height = positive_dimension("canvas_height", height)?;
        }
        if let Some(padding) = self.padding {
            theme.padding = spacing("padding", padding)?;
        }
        if let Some(gap) = self.gap {
            theme.gap = spacing("gap", gap)?;
        }
        if let Some(family) = &self.font_family {
            theme.font_family = family.clone();
        }

        if theme.content_width() <= 0.0 {
            return Err(ConfigError::InvalidDimension {
                name: "padding",
                value: theme.padding,
            });
        }

        let colors = &self.colors;
        let palette = &mut theme.palette;
        override_color(&mut palette.background, &colors.background, "background")?;
        override_color(&mut palette.text_primary, &colors.text_primary, "text_primary")?;
        override_color(
            &mut palette.text_secondary,
            &colors.text_secondary,
            "text_secondary",
        )?;
        override_color(&mut palette.section_fill, &colors.section_fill, "section_fill")?;
        override_color(
            &mut palette.section_border,
            &colors.section_border,
            "section_border",
        )?;
        override_color(&mut palette.button_fill, &colors.button_fill, "button_fill")?;
        override_color(&mut palette.button_text, &colors.button_text, "button_text")?;
        override_color(&mut palette.shadow, &colors.shadow, "shadow")?;

        let elements = &colors.elements;
        let accents = &mut palette.elements;
        override_color(&mut accents.metal, &elements.metal, "elements.metal")?;
        override_color(&mut accents.wood, &elements.wood, "elements.wood")?;
        override_color(&mut accents.water, &elements.water, "elements.water")?;
        override_color(&mut accents.fire, &elements.fire, "elements.fire")?;
        override_color(&mut accents.earth, &elements.earth, "elements.earth")?;

        Ok(theme)
    }
}

fn positive_dimension(name: &'static str, value: u32) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidDimension { name, value: 0.0 });
    }
    Ok(value)
}

fn spacing(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidDimension { name, value });
    }
    Ok(value)
}

fn override_color(
    target: &mut Color,
    value: &Option<String>,
    role: &'static str,
) -> Result<(), ConfigError> {
    if let Some(value) = value {
        *target = Color::new(value).map_err(|message| ConfigError::InvalidColor { role, message })?;
    }
    Ok(())
}
