// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recoverable precondition failures.

use thiserror::Error;

/// Why a checked quadtree operation rejected a value.
///
/// Only [`Quadtree::try_add`][crate::Quadtree::try_add] and
/// [`Quadtree::try_remove`][crate::Quadtree::try_remove] report these; the
/// unchecked operations treat the same conditions as logic errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum QuadtreeError {
    /// The value's box has zero or negative width or height.
    #[error("value box has no area")]
    EmptyBox,
    /// The value's box is not fully contained in the tree bounds.
    #[error("value box is not contained in the quadtree bounds")]
    OutOfBounds,
    /// No equal value is stored along the path of the value's box.
    #[error("value is not stored in the quadtree")]
    NotFound,
}
