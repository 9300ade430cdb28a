//! Geometric primitives for placing things on the report canvas.
//!
//! - [`Point`] - A position in device pixels
//! - [`Size`] - Width and height
//! - [`Bounds`] - An axis-aligned box
//!
//! The origin is the top-left corner of the canvas. X grows to the right and
//! Y grows downward. Layout and raster share the same unit, so nothing here
//! is ever scaled.

/// A position on the canvas.
///
/// # Examples
///
/// ```
/// # use mingpan_core::geometry::Point;
/// let slot_origin = Point::new(40.0, 310.0);
/// let title = slot_origin.add_point(Point::new(20.0, 45.0));
/// assert_eq!(title, Point::new(60.0, 355.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns this point moved by `offset`.
    pub fn add_point(self, offset: Point) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

/// Width and height in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// True when nothing can be drawn into an area of this size.
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// An axis-aligned box, stored as its top-left and bottom-right corners.
///
/// # Examples
///
/// ```
/// # use mingpan_core::geometry::{Bounds, Point, Size};
/// let pill = Bounds::new_from_top_left(Point::new(60.0, 551.0), Size::new(120.0, 40.0));
/// assert_eq!(pill.center(), Point::new(120.0, 571.0));
/// assert_eq!(pill.max_y(), 591.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min: top_left,
            max: top_left.add_point(Point::new(size.width, size.height)),
        }
    }

    pub fn min_x(self) -> f32 {
        self.min.x
    }

    pub fn min_y(self) -> f32 {
        self.min.y
    }

    pub fn max_x(self) -> f32 {
        self.max.x
    }

    pub fn max_y(self) -> f32 {
        self.max.y
    }

    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Top-left corner.
    pub fn min_point(self) -> Point {
        self.min
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns true if `other` lies entirely inside these bounds, edges included.
    pub fn contains(self, other: Bounds) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_offsets() {
        let point = Point::new(40.0, 635.0).add_point(Point::new(20.0, -5.5));
        assert_approx_eq!(f32, point.x(), 60.0);
        assert_approx_eq!(f32, point.y(), 629.5);
        assert_eq!(Point::default().add_point(point), point);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(!Size::new(750.0, 1334.0).is_empty());
        assert!(Size::new(0.0, 1334.0).is_empty());
        assert!(Size::new(750.0, -1.0).is_empty());
        assert!(Size::new(f32::NAN, 10.0).is_empty());
    }

    #[test]
    fn test_bounds_edges() {
        let panel = Bounds::new_from_top_left(Point::new(40.0, 310.0), Size::new(670.0, 295.0));
        assert_approx_eq!(f32, panel.min_x(), 40.0);
        assert_approx_eq!(f32, panel.max_x(), 710.0);
        assert_approx_eq!(f32, panel.max_y(), 605.0);
        assert_eq!(panel.min_point(), Point::new(40.0, 310.0));
        assert_eq!(panel.to_size(), Size::new(670.0, 295.0));
        assert_eq!(panel.center(), Point::new(375.0, 457.5));
    }

    #[test]
    fn test_bounds_contains() {
        let panel = Bounds::new_from_top_left(Point::new(40.0, 310.0), Size::new(670.0, 295.0));
        let button = Bounds::new_from_top_left(Point::new(60.0, 551.0), Size::new(120.0, 40.0));
        let overflowing =
            Bounds::new_from_top_left(Point::new(60.0, 590.0), Size::new(120.0, 40.0));

        assert!(panel.contains(button));
        assert!(panel.contains(panel));
        assert!(!panel.contains(overflowing));
    }

    proptest! {
        #[test]
        fn prop_bounds_keep_size(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 0.0f32..1000.0,
            h in 0.0f32..1000.0,
        ) {
            let bounds = Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h));
            prop_assert!((bounds.width() - w).abs() < 1e-3);
            prop_assert!((bounds.height() - h).abs() < 1e-3);
            prop_assert!(bounds.contains(bounds));
        }
    }
}
