// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Quadtree` API over the recursive node implementation.

use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::debug;

use crate::config::QuadtreeConfig;
use crate::error::QuadtreeError;
use crate::node::Node;
use crate::quadrant::Region;
use crate::types::{BoundingBox, Scalar};

/// Equality used when none is supplied: the value's [`PartialEq`].
pub type DefaultEq<V> = fn(&V, &V) -> bool;

/// A region quadtree storing values keyed by their bounding boxes.
///
/// The tree never inspects values directly. It asks `box_of` for a value's box
/// (which must stay the same while the value is stored) and uses `equal` only
/// to locate a value on removal.
pub struct Quadtree<T, V, F, E = DefaultEq<V>> {
    bounds: BoundingBox<T>,
    config: QuadtreeConfig,
    root: Node<V>,
    len: usize,
    box_of: F,
    equal: E,
}

impl<T, V, F> Quadtree<T, V, F>
where
    T: Scalar,
    V: PartialEq,
    F: Fn(&V) -> BoundingBox<T>,
{
    /// Create an empty tree covering `bounds`, comparing values with `==`.
    pub fn new(bounds: BoundingBox<T>, box_of: F) -> Self {
        Self::with_equality(bounds, box_of, <V as PartialEq>::eq)
    }
}

impl<T, V, F, E> Quadtree<T, V, F, E>
where
    T: Scalar,
    F: Fn(&V) -> BoundingBox<T>,
    E: Fn(&V, &V) -> bool,
{
    /// Create an empty tree covering `bounds` with a custom equality.
    pub fn with_equality(bounds: BoundingBox<T>, box_of: F, equal: E) -> Self {
        Self::with_config(bounds, box_of, equal, QuadtreeConfig::default())
    }

    /// Create an empty tree covering `bounds` with explicit limits.
    pub fn with_config(bounds: BoundingBox<T>, box_of: F, equal: E, config: QuadtreeConfig) -> Self {
        debug_assert!(bounds.has_area(), "quadtree bounds must have positive extent");
        Self {
            bounds,
            config,
            root: Node::new(),
            len: 0,
            box_of,
            equal,
        }
    }

    /// The box covered by the tree.
    pub fn bounds(&self) -> BoundingBox<T> {
        self.bounds
    }

    fn region(&self) -> Region<T> {
        Region::from(self.bounds)
    }

    /// The capacity and depth limits.
    pub fn config(&self) -> QuadtreeConfig {
        self.config
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Depth of the deepest node; 0 while the root is a leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Drop every stored value.
    pub fn clear(&mut self) {
        self.root = Node::new();
        self.len = 0;
    }

    /// Insert a value.
    ///
    /// The value's box must lie inside [`bounds`](Self::bounds) and have
    /// positive extent. Debug builds panic otherwise; release builds store the
    /// value anyway, and later queries or removals involving it may miss it.
    /// Use [`try_add`](Self::try_add) to check first.
    pub fn add(&mut self, value: V) {
        let value_box = (self.box_of)(&value);
        debug_assert!(value_box.has_area(), "value box must have positive extent");
        self.root
            .add(&self.config, &self.box_of, 0, self.region(), value, value_box);
        self.len += 1;
    }

    /// Insert a value after checking its box.
    ///
    /// Returns [`QuadtreeError::EmptyBox`] or [`QuadtreeError::OutOfBounds`]
    /// instead of storing a value that [`add`](Self::add) would reject.
    pub fn try_add(&mut self, value: V) -> Result<(), QuadtreeError> {
        let value_box = (self.box_of)(&value);
        if !value_box.has_area() {
            debug!(?value_box, "rejected quadtree value without area");
            return Err(QuadtreeError::EmptyBox);
        }
        if !self.bounds.contains(&value_box) {
            debug!(?value_box, bounds = ?self.bounds, "rejected out-of-bounds quadtree value");
            return Err(QuadtreeError::OutOfBounds);
        }
        self.root
            .add(&self.config, &self.box_of, 0, self.region(), value, value_box);
        self.len += 1;
        Ok(())
    }

    /// Remove a stored value equal to `value` and return it.
    ///
    /// The stored value is found by descending along `value`'s own box, so it
    /// must be the box the value had when it was added. Debug builds panic if
    /// nothing equal is found; release builds return `None`.
    pub fn remove(&mut self, value: &V) -> Option<V> {
        let value_box = (self.box_of)(value);
        let removed = self
            .root
            .remove(&self.config, &self.equal, self.region(), value, &value_box)
            .into_value();
        debug_assert!(removed.is_some(), "removed value must be stored in the quadtree");
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Remove a stored value equal to `value`, reporting why if it cannot.
    pub fn try_remove(&mut self, value: &V) -> Result<V, QuadtreeError> {
        let value_box = (self.box_of)(value);
        if !self.bounds.contains(&value_box) {
            debug!(?value_box, bounds = ?self.bounds, "cannot remove out-of-bounds quadtree value");
            return Err(QuadtreeError::OutOfBounds);
        }
        let removed = self
            .root
            .remove(&self.config, &self.equal, self.region(), value, &value_box)
            .into_value()
            .ok_or(QuadtreeError::NotFound)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Visit stored values whose box intersects `rect` (does not allocate
    /// result storage).
    ///
    /// Calls `f(value)` in depth-first order: a node's own values before its
    /// children, children in [`Quadrant::ALL`][crate::Quadrant::ALL] order.
    /// Order among the values of one node is unspecified.
    pub fn visit_rect<'a, G: FnMut(&'a V)>(&'a self, rect: BoundingBox<T>, mut f: G) {
        if rect.intersects(&self.bounds) {
            self.root.visit(&self.box_of, self.region(), &rect, &mut f);
        }
    }

    /// Query for stored values whose box intersects `rect`.
    ///
    /// Boxes that only touch `rect` along an edge are not reported. See
    /// [`visit_rect`](Self::visit_rect) for the ordering.
    pub fn query(&self, rect: BoundingBox<T>) -> impl Iterator<Item = &V> + '_ {
        let mut out = Vec::new();
        self.visit_rect(rect, |v| out.push(v));
        out.into_iter()
    }
}

impl<T: Debug, V, F, E> Debug for Quadtree<T, V, F, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("bounds", &self.bounds)
            .field("config", &self.config)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
