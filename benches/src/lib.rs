// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared workloads for the Understory benchmarks.

use understory_quadtree::BoundingBox;

/// Side length of the square world the generated boxes live in.
pub const WORLD_SIZE: f64 = 4096.0;

/// The world box covering every generated box.
pub const WORLD: BoundingBox<f64> = BoundingBox::new(0.0, 0.0, WORLD_SIZE, WORLD_SIZE);

/// Deterministic xorshift generator so runs are comparable.
#[derive(Clone, Debug)]
pub struct XorShift(u64);

impl XorShift {
    /// Create a generator; `seed` must be non-zero.
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Generate `count` boxes inside [`WORLD`] with extents up to `max_extent`.
pub fn random_boxes(count: usize, max_extent: f64, seed: u64) -> Vec<BoundingBox<f64>> {
    let mut rng = XorShift::new(seed);
    (0..count)
        .map(|_| {
            let width = rng.next_unit() * max_extent + 0.5;
            let height = rng.next_unit() * max_extent + 0.5;
            let left = rng.next_unit() * (WORLD_SIZE - width);
            let top = rng.next_unit() * (WORLD_SIZE - height);
            BoundingBox::new(left, top, width, height)
        })
        .collect()
}
