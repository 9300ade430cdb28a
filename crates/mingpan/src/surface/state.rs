//! Drawing-context state and its scoped acquisition.

use std::ops::{Deref, DerefMut};

use mingpan_core::{
    color::Color,
    draw::{FontDefinition, Shadow, StrokeDefinition, TextAlign, TextBaseline},
};

use super::Surface;

/// The paint settings used by the next drawing operation.
///
/// A fresh surface starts with black fill and stroke, a 10px sans-serif
/// font, left alignment, alphabetic baseline and no shadow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawState {
    pub(super) fill: Color,
    pub(super) stroke: StrokeDefinition,
    pub(super) font: FontDefinition,
    pub(super) text_align: TextAlign,
    pub(super) text_baseline: TextBaseline,
    pub(super) shadow: Option<Shadow>,
}

impl DrawState {
    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> StrokeDefinition {
        self.stroke
    }

    pub fn font(&self) -> &FontDefinition {
        &self.font
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn text_baseline(&self) -> TextBaseline {
        self.text_baseline
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }
}

/// Exclusive access to a [`Surface`] that restores its drawing state on drop.
///
/// Created by [`Surface::scoped`]. Dereferences to the surface, so every
/// drawing operation is available through the guard.
#[derive(Debug)]
pub struct SurfaceScope<'a> {
    surface: &'a mut Surface,
}

impl<'a> SurfaceScope<'a> {
    pub(super) fn new(surface: &'a mut Surface) -> Self {
        Self { surface }
    }
}

impl Deref for SurfaceScope<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        self.surface
    }
}

impl DerefMut for SurfaceScope<'_> {
    fn deref_mut(&mut self) -> &mut Surface {
        self.surface
    }
}

impl Drop for SurfaceScope<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
