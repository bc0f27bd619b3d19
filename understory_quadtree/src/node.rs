// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive quadtree node: split, merge, routing, and window traversal.
//!
//! A node never stores its own area; callers pass its [`Region`] down and
//! derive child regions from it. Nodes also never point at their
//! parent. Removal instead reports back whether it erased from a leaf, and
//! the caller one level up decides whether to fold its children.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use tracing::trace;

use crate::config::QuadtreeConfig;
use crate::quadrant::{Quadrant, Region};
use crate::types::{BoundingBox, Scalar};

/// A leaf (no children) or an interior node (exactly four children).
///
/// Values stored on an interior node straddle one of its center lines, or
/// were added after the node reached the maximum depth.
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) values: Vec<V>,
    pub(crate) children: Option<Box<[Self; 4]>>,
}

/// Where [`Node::remove`] found the value, as seen by its caller.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Removed<V> {
    /// No equal value along the path of the value's box.
    Missing,
    /// Erased from a leaf; the caller should try to merge its children.
    Leaf(V),
    /// Erased from an interior node's own list or further down.
    Interior(V),
}

impl<V> Removed<V> {
    pub(crate) fn into_value(self) -> Option<V> {
        match self {
            Self::Missing => None,
            Self::Leaf(v) | Self::Interior(v) => Some(v),
        }
    }
}

impl<V> Node<V> {
    pub(crate) const fn new() -> Self {
        Self {
            values: Vec::new(),
            children: None,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Insert `value` whose box is `value_box` below this node.
    pub(crate) fn add<T, F>(
        &mut self,
        config: &QuadtreeConfig,
        box_of: &F,
        depth: usize,
        region: Region<T>,
        value: V,
        value_box: BoundingBox<T>,
    ) where
        T: Scalar,
        F: Fn(&V) -> BoundingBox<T>,
    {
        debug_assert!(
            region.contains(&value_box),
            "value box {value_box:?} must lie inside node box {region:?}"
        );
        if self.is_leaf() {
            if depth >= config.max_depth || self.values.len() < config.max_values {
                self.values.push(value);
                return;
            }
            self.split(box_of, depth, region);
        }

        match (self.children.as_deref_mut(), region.quadrant_of(&value_box)) {
            (Some(children), Some(q)) => children[q.index()].add(
                config,
                box_of,
                depth + 1,
                region.quadrant(q),
                value,
                value_box,
            ),
            _ => self.values.push(value),
        }
    }

    /// Turn this leaf into an interior node, pushing down every value that
    /// fits a single quadrant.
    fn split<T, F>(&mut self, box_of: &F, depth: usize, region: Region<T>)
    where
        T: Scalar,
        F: Fn(&V) -> BoundingBox<T>,
    {
        debug_assert!(self.is_leaf(), "only leaves can be split");
        let mut children: Box<[Self; 4]> = Box::new(core::array::from_fn(|_| Self::new()));
        let values = mem::take(&mut self.values);
        let total = values.len();
        for value in values {
            match region.quadrant_of(&box_of(&value)) {
                Some(q) => children[q.index()].values.push(value),
                None => self.values.push(value),
            }
        }
        self.children = Some(children);
        trace!(
            depth,
            moved = total - self.values.len(),
            kept = self.values.len(),
            "split quadtree node"
        );
    }

    /// Remove a value equal to `value` from the path selected by `value_box`.
    pub(crate) fn remove<T, E>(
        &mut self,
        config: &QuadtreeConfig,
        equal: &E,
        region: Region<T>,
        value: &V,
        value_box: &BoundingBox<T>,
    ) -> Removed<V>
    where
        T: Scalar,
        E: Fn(&V, &V) -> bool,
    {
        debug_assert!(
            region.contains(value_box),
            "value box {value_box:?} must lie inside node box {region:?}"
        );
        match (self.children.as_deref_mut(), region.quadrant_of(value_box)) {
            (None, _) => self.erase(equal, value).map_or(Removed::Missing, Removed::Leaf),
            (Some(children), Some(q)) => {
                let removed =
                    children[q.index()].remove(config, equal, region.quadrant(q), value, value_box);
                match removed {
                    Removed::Missing => Removed::Missing,
                    Removed::Leaf(v) => {
                        self.try_merge(config.max_values);
                        Removed::Interior(v)
                    }
                    Removed::Interior(v) => Removed::Interior(v),
                }
            }
            (Some(_), None) => self
                .erase(equal, value)
                .map_or(Removed::Missing, Removed::Interior),
        }
    }

    /// Swap-remove the first own value equal to `value`.
    fn erase<E>(&mut self, equal: &E, value: &V) -> Option<V>
    where
        E: Fn(&V, &V) -> bool,
    {
        let pos = self.values.iter().position(|stored| equal(value, stored))?;
        Some(self.values.swap_remove(pos))
    }

    /// Fold all four children into this node if none of them is interior and
    /// the combined count fits in `max_values`. Returns whether it merged.
    ///
    /// Leaves are left untouched.
    pub(crate) fn try_merge(&mut self, max_values: usize) -> bool {
        let Some(children) = self.children.as_deref() else {
            return false;
        };
        if children.iter().any(|child| !child.is_leaf()) {
            return false;
        }
        let total = self.values.len() + children.iter().map(|c| c.values.len()).sum::<usize>();
        if total > max_values {
            return false;
        }

        let Some(children) = self.children.take() else {
            return false;
        };
        self.values.reserve(total - self.values.len());
        for child in *children {
            self.values.extend(child.values);
        }
        trace!(values = total, "merged quadtree node");
        true
    }

    /// Call `f` for every value below this node whose box intersects
    /// `query_box`, own values first, then children in quadrant order.
    pub(crate) fn visit<'a, T, F, G>(
        &'a self,
        box_of: &F,
        region: Region<T>,
        query_box: &BoundingBox<T>,
        f: &mut G,
    ) where
        T: Scalar,
        F: Fn(&V) -> BoundingBox<T>,
        G: FnMut(&'a V),
    {
        debug_assert!(
            region.intersects(query_box),
            "traversal must only enter nodes that intersect the query"
        );
        for value in &self.values {
            if query_box.intersects(&box_of(value)) {
                f(value);
            }
        }

        if let Some(children) = self.children.as_deref() {
            for q in Quadrant::ALL {
                let child = region.quadrant(q);
                if child.intersects(query_box) {
                    children[q.index()].visit(box_of, child, query_box, f);
                }
            }
        }
    }

    /// Depth of the deepest node below this one; 0 for a leaf.
    pub(crate) fn depth(&self) -> usize {
        self.children.as_deref().map_or(0, |children| {
            1 + children.iter().map(Self::depth).max().unwrap_or(0)
        })
    }

    /// Number of values stored in this subtree.
    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.values.len()
            + self
                .children
                .as_deref()
                .map_or(0, |children| children.iter().map(Self::count).sum())
    }
}
