//! Points, sizes and bounding boxes in map space.
//!
//! The root of a mind map sits at the origin and the map grows outwards in
//! every direction, so coordinates are routinely negative. The axes follow
//! SVG: +X to the right, +Y down. Angles are measured from +X towards +Y,
//! which is clockwise on screen.
//!
//! [`Point`] doubles as a 2D vector. It implements the arithmetic operators
//! the layout needs (`+`, `-`, `* f32`, `+=`).

use std::ops::{Add, AddAssign, Mul, Sub};

/// Converts an angle in degrees to radians.
///
/// ```
/// # use arbor_core::geometry::degrees_to_radians;
/// let half_turn = degrees_to_radians(180.0);
/// assert!((half_turn - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// A position, or displacement, in map coordinates.
///
/// ```
/// # use arbor_core::geometry::Point;
/// let parent = Point::new(10.0, 20.0);
/// let child = parent + Point::new(5.0, 5.0);
///
/// assert_eq!(child, Point::new(15.0, 25.0));
/// assert_eq!(parent.midpoint(child), Point::new(12.5, 22.5));
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

    /// The vector of length `radius` pointing along `angle` (radians).
    ///
    /// ```
    /// # use arbor_core::geometry::Point;
    /// assert_eq!(Point::from_polar(500.0, 0.0), Point::new(500.0, 0.0));
    /// ```
    pub fn from_polar(radius: f32, angle: f32) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Length of this vector.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f32 {
        (other - self).length()
    }

    /// Direction of this vector in radians; `0.0` for the zero vector.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// This vector turned a quarter towards +Y (clockwise on screen).
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Width and height of a node or canvas.
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
}

/// An axis-aligned rectangle given by its corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// The rectangle of `size` centred on `center`.
    ///
    /// ```
    /// # use arbor_core::geometry::{Bounds, Point, Size};
    /// let node = Bounds::around(Point::default(), Size::new(100.0, 60.0));
    /// assert_eq!(node.min(), Point::new(-50.0, -30.0));
    /// assert_eq!(node.size(), Size::new(100.0, 60.0));
    /// ```
    pub fn around(center: Point, size: Size) -> Self {
        let half = Point::new(size.width / 2.0, size.height / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Top-left corner.
    pub fn min(self) -> Point {
        self.min
    }

    /// Bottom-right corner.
    pub fn max(self) -> Point {
        self.max
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

    pub fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Bounds) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Grows the rectangle by `margin` on every side.
    pub fn inflate(self, margin: f32) -> Self {
        let margin = Point::new(margin, margin);
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (point_strategy(), 1.0f32..500.0, 1.0f32..500.0)
            .prop_map(|(center, w, h)| Bounds::around(center, Size::new(w, h)))
    }

    fn check_perpendicular_is_orthogonal(p: Point) -> Result<(), TestCaseError> {
        let perp = p.perpendicular();
        let dot = p.x() * perp.x() + p.y() * perp.y();

        prop_assert!(approx_eq!(f32, dot, 0.0, epsilon = 0.01));
        prop_assert!(approx_eq!(f32, perp.length(), p.length(), epsilon = 0.01));
        Ok(())
    }

    fn check_from_polar_length(radius: f32, angle: f32) -> Result<(), TestCaseError> {
        let p = Point::from_polar(radius, angle);
        prop_assert!(approx_eq!(f32, p.length(), radius, epsilon = 0.01));
        Ok(())
    }

    fn check_union_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.union(b2);
        for b in [b1, b2] {
            prop_assert!(merged.min_x() <= b.min_x());
            prop_assert!(merged.min_y() <= b.min_y());
            prop_assert!(merged.max_x() >= b.max_x());
            prop_assert!(merged.max_y() >= b.max_y());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn perpendicular_is_orthogonal(p in point_strategy()) {
            check_perpendicular_is_orthogonal(p)?;
        }

        #[test]
        fn from_polar_length(radius in 0.0f32..1000.0, angle in -10.0f32..10.0) {
            check_from_polar_length(radius, angle)?;
        }

        #[test]
        fn union_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_union_contains_both(b1, b2)?;
        }
    }
}
