// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant partitioning of a node's box.

use crate::types::{BoundingBox, Scalar, Vec2};

/// One of the four equal sub-rectangles of a node's box.
///
/// The discriminant is the child slot the quadrant maps to. A box that cannot
/// be assigned to a single quadrant is represented as `None` by
/// [`BoundingBox::quadrant_of`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top-left quarter.
    NorthWest = 0,
    /// Top-right quarter.
    NorthEast = 1,
    /// Bottom-left quarter.
    SouthWest = 2,
    /// Bottom-right quarter.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child-slot order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Child slot of this quadrant.
    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl<T: Scalar> BoundingBox<T> {
    /// The quadrant of `self` that fully contains `other`, if any.
    ///
    /// `other` is west when its right edge lies strictly left of the center,
    /// east when its left edge is at or right of the center, and likewise
    /// north/south on the vertical axis. A quadrant is returned only when the
    /// box is on exactly one side of both axes; anything that straddles or
    /// touches a center line from the low side yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_quadtree::{BoundingBox, Quadrant};
    ///
    /// let node = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
    /// assert_eq!(
    ///     node.quadrant_of(&BoundingBox::new(60.0, 10.0, 10.0, 10.0)),
    ///     Some(Quadrant::NorthEast)
    /// );
    /// assert_eq!(node.quadrant_of(&BoundingBox::new(40.0, 40.0, 20.0, 20.0)), None);
    /// ```
    pub fn quadrant_of(&self, other: &Self) -> Option<Quadrant> {
        Region::from(*self).quadrant_of(other)
    }

    /// The box of the given quadrant.
    ///
    /// The split lines pass through the center of `self`. For odd integer
    /// extents the east and south quarters absorb the remainder.
    ///
    /// For floating-point scalars the returned `width`/`height` are
    /// re-derived from edges, so `right()` of an east quarter may differ from
    /// `self.right()` by rounding. The tree itself descends on exact edges and
    /// is not affected.
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        Region::from(*self).quadrant(quadrant).to_box()
    }
}

/// A node's area as min/max edges.
///
/// Child regions share their split edges with each other and their outer
/// edges with the parent bit for bit, so a box inside a region stays inside
/// the child it is routed to regardless of float rounding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Region<T> {
    pub(crate) min_x: T,
    pub(crate) min_y: T,
    pub(crate) max_x: T,
    pub(crate) max_y: T,
}

impl<T: Scalar> From<BoundingBox<T>> for Region<T> {
    #[inline]
    fn from(bbox: BoundingBox<T>) -> Self {
        Self {
            min_x: bbox.left,
            min_y: bbox.top,
            max_x: bbox.right(),
            max_y: bbox.bottom(),
        }
    }
}

impl<T: Scalar> Region<T> {
    pub(crate) fn to_box(self) -> BoundingBox<T> {
        BoundingBox::new(
            self.min_x,
            self.min_y,
            T::sub(self.max_x, self.min_x),
            T::sub(self.max_y, self.min_y),
        )
    }

    /// Split point; integer halves round down.
    #[inline]
    pub(crate) fn center(&self) -> Vec2<T> {
        let half = Vec2::new(
            T::sub(self.max_x, self.min_x),
            T::sub(self.max_y, self.min_y),
        ) / T::two();
        Vec2::new(self.min_x, self.min_y) + half
    }

    /// Inclusive on all four edges.
    #[inline]
    pub(crate) fn contains(&self, bbox: &BoundingBox<T>) -> bool {
        self.min_x <= bbox.left
            && bbox.right() <= self.max_x
            && self.min_y <= bbox.top
            && bbox.bottom() <= self.max_y
    }

    /// Strict on both axes, like [`BoundingBox::intersects`].
    #[inline]
    pub(crate) fn intersects(&self, bbox: &BoundingBox<T>) -> bool {
        bbox.left < self.max_x
            && self.min_x < bbox.right()
            && bbox.top < self.max_y
            && self.min_y < bbox.bottom()
    }

    pub(crate) fn quadrant_of(&self, bbox: &BoundingBox<T>) -> Option<Quadrant> {
        let center = self.center();
        let west = bbox.right() < center.x;
        let east = bbox.left >= center.x;
        let north = bbox.bottom() < center.y;
        let south = bbox.top >= center.y;

        match ((west, east), (north, south)) {
            ((true, false), (true, false)) => Some(Quadrant::NorthWest),
            ((false, true), (true, false)) => Some(Quadrant::NorthEast),
            ((true, false), (false, true)) => Some(Quadrant::SouthWest),
            ((false, true), (false, true)) => Some(Quadrant::SouthEast),
            _ => None,
        }
    }

    pub(crate) fn quadrant(&self, quadrant: Quadrant) -> Self {
        let Vec2 { x: mid_x, y: mid_y } = self.center();
        let (min_x, max_x) = match quadrant {
            Quadrant::NorthWest | Quadrant::SouthWest => (self.min_x, mid_x),
            Quadrant::NorthEast | Quadrant::SouthEast => (mid_x, self.max_x),
        };
        let (min_y, max_y) = match quadrant {
            Quadrant::NorthWest | Quadrant::NorthEast => (self.min_y, mid_y),
            Quadrant::SouthWest | Quadrant::SouthEast => (mid_y, self.max_y),
        };
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}
