// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a generic region quadtree over 2D bounding boxes.
//!
//! Understory Quadtree is an embeddable building block for broad-phase collision
//! detection, visibility culling, and map-feature lookup.
//!
//! - Store arbitrary values keyed by an axis-aligned bounding box.
//! - Query every value whose box intersects a window.
//! - Nodes split when they overflow and merge back when removals bring them
//!   under capacity.
//!
//! The tree does not require values to implement any trait. You hand it two
//! capabilities at construction: a function from value to its
//! [`BoundingBox`], and (optionally) an equality used to locate a value on
//! removal. It is generic over the scalar type `T` ([`Scalar`]) and does not
//! depend on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{BoundingBox, Quadtree};
//!
//! #[derive(Debug, PartialEq)]
//! struct Feature {
//!     name: &'static str,
//!     bbox: BoundingBox<f64>,
//! }
//!
//! let mut tree = Quadtree::new(BoundingBox::new(0.0, 0.0, 100.0, 100.0), |f: &Feature| f.bbox);
//! tree.add(Feature { name: "a", bbox: BoundingBox::new(10.0, 10.0, 10.0, 10.0) });
//! tree.add(Feature { name: "b", bbox: BoundingBox::new(60.0, 10.0, 10.0, 10.0) });
//! tree.add(Feature { name: "c", bbox: BoundingBox::new(10.0, 60.0, 10.0, 10.0) });
//!
//! let hits: Vec<_> = tree
//!     .query(BoundingBox::new(15.0, 15.0, 50.0, 1.0))
//!     .map(|f| f.name)
//!     .collect();
//! assert_eq!(hits, ["a", "b"]);
//!
//! let b = Feature { name: "b", bbox: BoundingBox::new(60.0, 10.0, 10.0, 10.0) };
//! assert!(tree.remove(&b).is_some());
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! ## How values are placed
//!
//! Each node covers a box and, once split, has exactly four children covering
//! its quarters. A value lives at exactly one node: the deepest one whose
//! quadrant fully contains its box. Values that straddle a center line stay on
//! the node where they straddle, so queries never need to deduplicate.
//!
//! - A leaf holds up to [`QuadtreeConfig::max_values`] values. The next
//!   insertion splits it, unless it is at [`QuadtreeConfig::max_depth`].
//! - Removing a value from a leaf lets its parent fold all four children
//!   back in, provided none of them is split and the combined count fits.
//!
//! ## Preconditions
//!
//! [`Quadtree::add`] and [`Quadtree::remove`] treat misuse (a box outside the
//! tree bounds, a box without area, removing a value that is not stored) as a
//! logic error: debug builds panic, release builds do their best and carry on.
//! [`Quadtree::try_add`] and [`Quadtree::try_remove`] check the same conditions
//! and return a [`QuadtreeError`] instead.
//!
//! A value's box must not change while it is stored. To move a value, remove it
//! and add it again.
//!
//! ## Features
//!
//! - `kurbo`: conversions between [`BoundingBox<f64>`] and `kurbo::Rect`, and
//!   between [`Vec2<f64>`] and `kurbo::Vec2`/`kurbo::Point`.
//! - `std`: turns on `std` support in `tracing` and `thiserror`, and in Kurbo
//!   when that feature is enabled.
//! - `libm`: forwarded to Kurbo for `no_std` float math.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds may assert.
//!
//! ### Logging
//!
//! Splits and merges are reported as `tracing` events at `TRACE` level, and
//! rejected `try_*` calls at `DEBUG` level. No subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod node;
mod quadrant;
mod tree;
mod types;

pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_VALUES, QuadtreeConfig};
pub use error::QuadtreeError;
pub use quadrant::Quadrant;
pub use tree::{DefaultEq, Quadtree};
pub use types::{BoundingBox, Scalar, Vec2};
