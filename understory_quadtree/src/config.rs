// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-tree settings.

/// Default number of values a leaf holds before it splits.
pub const DEFAULT_MAX_VALUES: usize = 16;

/// Default depth below which leaves stop splitting.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Capacity and depth limits shared by every node of a [`Quadtree`][crate::Quadtree].
///
/// A leaf at depth `d` holding `max_values` values splits on the next insertion
/// unless `d >= max_depth`, in which case it keeps growing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadtreeConfig {
    /// Values a leaf holds before splitting; also the merge threshold.
    pub max_values: usize,
    /// Depth at which leaves stop splitting. The root is at depth 0.
    pub max_depth: usize,
}

impl QuadtreeConfig {
    /// Create a config with the default limits.
    pub const fn new() -> Self {
        Self {
            max_values: DEFAULT_MAX_VALUES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the per-node capacity.
    pub const fn with_max_values(mut self, max_values: usize) -> Self {
        self.max_values = max_values;
        self
    }

    /// Set the maximum split depth.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
