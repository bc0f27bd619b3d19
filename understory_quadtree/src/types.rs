// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign};

/// Numeric scalar abstraction for positions and extents.
///
/// This trait provides the minimal arithmetic the quadtree needs to derive
/// edges, centers, and quadrant boxes from a left/top/width/height box.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Divide two scalar values: a / b.
    fn div(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// The value two, used to halve extents.
    fn two() -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline(always)]
    fn two() -> Self {
        2.0
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline(always)]
    fn two() -> Self {
        2.0
    }
}

impl Scalar for i32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn div(a: Self, b: Self) -> Self {
        a.div_euclid(b)
    }

    #[inline(always)]
    fn zero() -> Self {
        0
    }

    #[inline(always)]
    fn two() -> Self {
        2
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn div(a: Self, b: Self) -> Self {
        a.div_euclid(b)
    }

    #[inline(always)]
    fn zero() -> Self {
        0
    }

    #[inline(always)]
    fn two() -> Self {
        2
    }
}

/// A 2D vector used for positions and sizes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vec2<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component (grows downwards).
    pub y: T,
}

impl<T> Vec2<T> {
    /// Create a new vector.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(T::add(self.x, rhs.x), T::add(self.y, rhs.y))
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(T::div(self.x, rhs), T::div(self.y, rhs))
    }
}

impl<T: Scalar> DivAssign<T> for Vec2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

/// Axis-aligned bounding box in 2D, stored as top-left corner and extent.
///
/// Width and height must be strictly positive; degenerate boxes are not
/// supported by the quadtree and debug builds assert on them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox<T> {
    /// Minimum x.
    pub left: T,
    /// Minimum y.
    pub top: T,
    /// Horizontal extent, strictly positive.
    pub width: T,
    /// Vertical extent, strictly positive.
    pub height: T,
}

impl<T> BoundingBox<T> {
    /// Create a box from its top-left corner and extent.
    #[inline(always)]
    pub const fn new(left: T, top: T, width: T, height: T) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a box from a position (top-left corner) and a size.
    #[inline]
    pub fn from_position_size(position: Vec2<T>, size: Vec2<T>) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }
}

impl<T: Scalar> BoundingBox<T> {
    /// Maximum x: `left + width`.
    #[inline]
    pub fn right(&self) -> T {
        T::add(self.left, self.width)
    }

    /// Maximum y: `top + height`.
    #[inline]
    pub fn bottom(&self) -> T {
        T::add(self.top, self.height)
    }

    /// The top-left corner.
    #[inline]
    pub fn top_left(&self) -> Vec2<T> {
        Vec2::new(self.left, self.top)
    }

    /// The extent as a vector.
    #[inline]
    pub fn size(&self) -> Vec2<T> {
        Vec2::new(self.width, self.height)
    }

    /// The center point: `(left + width / 2, top + height / 2)`.
    ///
    /// For integer scalars the halves are rounded down.
    #[inline]
    pub fn center(&self) -> Vec2<T> {
        self.top_left() + self.size() / T::two()
    }

    /// Whether both extents are strictly positive. Assumes no NaN.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > T::zero() && self.height > T::zero()
    }

    /// Whether `other` lies entirely within this box.
    ///
    /// Edges are inclusive on all four sides, so a box contains itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_quadtree::BoundingBox;
    ///
    /// let outer = BoundingBox::new(-1, -1, 11, 11);
    /// let inner = BoundingBox::new(0, 0, 10, 10);
    /// assert!(outer.contains(&inner));
    /// assert!(!inner.contains(&outer));
    /// assert!(inner.contains(&inner));
    /// ```
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.left <= other.left
            && other.right() <= self.right()
            && self.top <= other.top
            && other.bottom() <= self.bottom()
    }

    /// Determines whether this box overlaps another.
    ///
    /// Overlap is strict on both axes: two boxes that only share an edge do
    /// not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_quadtree::BoundingBox;
    ///
    /// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.intersects(&BoundingBox::new(9.0, 0.0, 10.0, 10.0)));
    /// assert!(!a.intersects(&BoundingBox::new(10.0, 0.0, 10.0, 10.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let outside = self.left >= other.right()
            || self.right() <= other.left
            || self.top >= other.bottom()
            || self.bottom() <= other.top;
        !outside
    }
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    use super::{BoundingBox, Vec2};

    impl From<kurbo::Rect> for BoundingBox<f64> {
        fn from(rect: kurbo::Rect) -> Self {
            let rect = rect.abs();
            Self::new(rect.x0, rect.y0, rect.width(), rect.height())
        }
    }

    impl From<BoundingBox<f64>> for kurbo::Rect {
        fn from(bbox: BoundingBox<f64>) -> Self {
            Self::from_origin_size((bbox.left, bbox.top), (bbox.width, bbox.height))
        }
    }

    impl From<kurbo::Vec2> for Vec2<f64> {
        fn from(v: kurbo::Vec2) -> Self {
            Self::new(v.x, v.y)
        }
    }

    impl From<Vec2<f64>> for kurbo::Vec2 {
        fn from(v: Vec2<f64>) -> Self {
            Self::new(v.x, v.y)
        }
    }

    impl From<kurbo::Point> for Vec2<f64> {
        fn from(p: kurbo::Point) -> Self {
            Self::new(p.x, p.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, Vec2};

    fn b(left: i32, top: i32, width: i32, height: i32) -> BoundingBox<i32> {
        BoundingBox::new(left, top, width, height)
    }

    #[test]
    fn derived_edges_and_center() {
        let bbox = BoundingBox::new(100.0_f32, 100.0, 100.0, 50.0);
        assert_eq!(bbox.right(), 200.0);
        assert_eq!(bbox.bottom(), 150.0);
        assert_eq!(bbox.top_left(), Vec2::new(100.0, 100.0));
        assert_eq!(bbox.size(), Vec2::new(100.0, 50.0));
        assert_eq!(bbox.center(), Vec2::new(150.0, 125.0));

        // Integer halves round down.
        assert_eq!(b(0, 0, 5, 7).center(), Vec2::new(2, 3));
    }

    #[test]
    fn vector_arithmetic() {
        let mut v = Vec2::new(1.0_f64, 2.0);
        v += Vec2::new(3.0, 4.0);
        assert_eq!(v, Vec2::new(4.0, 6.0));
        v /= 2.0;
        assert_eq!(v, Vec2::new(2.0, 3.0));
        assert_eq!(Vec2::new(9, 4) / 2, Vec2::new(4, 2));
    }

    #[test]
    fn containment() {
        let a = b(0, 0, 10, 10);
        let outer = b(-1, -1, 11, 11);
        assert!(!a.contains(&outer));
        assert!(outer.contains(&a));

        let far = b(100, 100, 10, 10);
        assert!(!a.contains(&far));
        assert!(!far.contains(&a));
    }

    #[test]
    fn mutual_containment_means_equal() {
        let boxes = [
            b(0, 0, 10, 10),
            b(0, 0, 10, 11),
            b(0, 1, 10, 10),
            b(1, 0, 9, 10),
            b(-5, -5, 20, 20),
        ];
        for x in &boxes {
            for y in &boxes {
                assert_eq!(
                    x.contains(y) && y.contains(x),
                    x == y,
                    "mutual containment must match equality for {x:?} and {y:?}"
                );
            }
        }
    }

    #[test]
    fn overlapping_sides_intersect() {
        let a = b(0, 0, 10, 10);
        for other in [
            b(-1, -1, 11, 11),
            b(0, 0, 10, 10),
            b(9, 0, 10, 10),
            b(-9, 0, 10, 10),
            b(0, -9, 10, 10),
            b(0, 9, 10, 10),
        ] {
            assert!(a.intersects(&other), "{a:?} should intersect {other:?}");
            assert!(other.intersects(&a), "{other:?} should intersect {a:?}");
        }
    }

    #[test]
    fn separated_or_touching_sides_do_not_intersect() {
        let a = b(0, 0, 10, 10);
        for other in [
            b(100, 100, 10, 10),
            b(11, 0, 10, 10),
            b(-11, 0, 10, 10),
            b(0, -11, 10, 10),
            b(0, 11, 10, 10),
            // Shared edges only.
            b(10, 0, 10, 10),
            b(-10, 0, 10, 10),
            b(0, -10, 10, 10),
            b(0, 10, 10, 10),
        ] {
            assert!(!a.intersects(&other), "{a:?} should not intersect {other:?}");
            assert!(!other.intersects(&a), "{other:?} should not intersect {a:?}");
            assert!(!a.contains(&other));
            assert!(!other.contains(&a));
        }
    }

    #[test]
    fn degenerate_boxes_have_no_area() {
        assert!(b(0, 0, 1, 1).has_area());
        assert!(!b(0, 0, 0, 1).has_area());
        assert!(!b(0, 0, 1, -1).has_area());
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn kurbo_rect_conversion() {
        let rect = kurbo::Rect::new(10.0, 20.0, 30.0, 60.0);
        let bbox: BoundingBox<f64> = rect.into();
        assert_eq!(bbox, BoundingBox::new(10.0, 20.0, 20.0, 40.0));
        assert_eq!(kurbo::Rect::from(bbox), rect);

        // Inverted rects are normalized first.
        let flipped = kurbo::Rect::new(30.0, 60.0, 10.0, 20.0);
        assert_eq!(BoundingBox::from(flipped), bbox);
    }
}
