//! Canvas dimensions, spacing, typography and colors of the report card.
//!
//! A [`Theme`] is built once, usually from [`ThemeConfig`](crate::config::ThemeConfig),
//! and then only read. It is `Send + Sync` and can be shared between
//! concurrent renders.

use mingpan_core::{
    color::Color,
    draw::{FontDefinition, FontWeight, Shadow},
    geometry::Size,
};

use crate::report::Element;

/// Blur of the drop shadow cast by section panels.
const PANEL_SHADOW_BLUR: f32 = 6.0;

/// Named color roles of the report card.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub(crate) background: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) section_fill: Color,
    pub(crate) section_border: Color,
    pub(crate) button_fill: Color,
    pub(crate) button_text: Color,
    pub(crate) shadow: Color,
    pub(crate) elements: ElementColors,
}

impl Palette {
    /// Page background behind every section.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Titles, labels and body text.
    pub fn text_primary(&self) -> Color {
        self.text_primary
    }

    /// De-emphasized labels.
    pub fn text_secondary(&self) -> Color {
        self.text_secondary
    }

    pub fn section_fill(&self) -> Color {
        self.section_fill
    }

    pub fn section_border(&self) -> Color {
        self.section_border
    }

    pub fn button_fill(&self) -> Color {
        self.button_fill
    }

    /// Button label and outline.
    pub fn button_text(&self) -> Color {
        self.button_text
    }

    /// Color of the drop shadow under section panels.
    pub fn shadow(&self) -> Color {
        self.shadow
    }

    /// Accent color of `element`.
    pub fn element(&self, element: Element) -> Color {
        self.elements.get(element)
    }
}

/// Accent colors keyed by element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementColors {
    pub(crate) metal: Color,
    pub(crate) wood: Color,
    pub(crate) water: Color,
    pub(crate) fire: Color,
    pub(crate) earth: Color,
}

impl ElementColors {
    pub fn get(&self, element: Element) -> Color {
        match element {
            Element::Metal => self.metal,
            Element::Wood => self.wood,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
        }
    }
}

/// Immutable look of the report card.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Canvas | 750 × 1334 |
/// | Padding | 40 |
/// | Section gap | 30 |
/// | Font family | `"Noto Sans SC"` |
///
/// # Examples
///
/// ```
/// # use mingpan::theme::Theme;
/// let theme = Theme::default();
/// assert_eq!(theme.canvas_width(), 750);
/// assert_eq!(theme.content_width(), 670.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub(crate) canvas_width: u32,
    pub(crate) canvas_height: u32,
    pub(crate) padding: f32,
    pub(crate) gap: f32,
    pub(crate) font_family: String,
    pub(crate) palette: Palette,
}

impl Theme {
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Returns the canvas dimensions in pixels.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width as f32, self.canvas_height as f32)
    }

    /// Outer padding between the canvas edge and the sections.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Vertical gap between consecutive sections.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Width available to sections: `canvas_width − 2 × padding`.
    pub fn content_width(&self) -> f32 {
        self.canvas_width as f32 - 2.0 * self.padding
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns a font of the theme's family at the given size and weight.
    pub fn font(&self, size: f32, weight: FontWeight) -> FontDefinition {
        FontDefinition::new(&self.font_family, size, weight)
    }

    /// Returns the drop shadow cast by section panels.
    pub fn panel_shadow(&self) -> Shadow {
        Shadow::new(self.palette.shadow, PANEL_SHADOW_BLUR)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            canvas_width: 750,
            canvas_height: 1334,
            padding: 40.0,
            gap: 30.0,
            font_family: "Noto Sans SC".to_string(),
            palette: Palette {
                background: builtin("#F2F2F2"),
                text_primary: builtin("#5D5855"),
                text_secondary: builtin("#948D89"),
                section_fill: builtin("#EBE8E5"),
                section_border: builtin("#FFF6DE"),
                button_fill: builtin("#DCD8D4"),
                button_text: builtin("#9B9490"),
                shadow: builtin("rgba(93, 88, 85, 0.8)"),
                elements: ElementColors {
                    metal: builtin("#FEEAA4"),
                    wood: builtin("#8CC18A"),
                    water: builtin("#63C9C3"),
                    fire: builtin("#B7695E"),
                    earth: builtin("#948D89"),
                },
            },
        }
    }
}

fn builtin(color: &str) -> Color {
    Color::new(color).expect("built-in palette colors are valid CSS colors")
}
