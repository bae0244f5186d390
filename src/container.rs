//! Occupancy container: the single source of truth for which cells are
//! filled, the running bounding box, and the configuration hash.
//!
//! The grid is oversized to side `2n - 1` so a connected shape of `n` cubes
//! grown from the midpoint can never leave the buffer. The hash table covers
//! only the logical `n^3` window, because a shape of `n` cells spans at most
//! `n` positions per axis; `calc_hash` indexes it relative to the bounding
//! box minimum, which makes the hash invariant under translation.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::array3d::Array3d;
use crate::coords::{Axis, CubeCoords, Region3};

/// Fixed seed for the positional hash table. Totals are only reproducible
/// run-to-run because this never changes.
const HASH_SEED: u64 = 1042;

pub struct Container {
    grid: Array3d<bool>,
    cubes: Vec<CubeCoords>,
    hash3d: Array3d<u64>,
    bbox: Region3,
    size: usize,
    midpoint: CubeCoords,
}

impl Container {
    /// Allocates the grid and hash table for shapes of exactly `count` cubes.
    ///
    /// Both allocations happen once here; nothing is resized afterwards.
    pub fn new(count: usize) -> Self {
        let side = 2 * count - 1;
        let mut hash3d = Array3d::new(count, count, count);
        let mut rng = ChaCha8Rng::seed_from_u64(HASH_SEED);
        for x in 0..count as i32 {
            for y in 0..count as i32 {
                for z in 0..count as i32 {
                    hash3d[CubeCoords::new(x, y, z)] = rng.next_u64();
                }
            }
        }

        Self {
            grid: Array3d::new(side, side, side),
            cubes: Vec::with_capacity(count),
            hash3d,
            // sentinel: min past the last valid index, max below the first
            bbox: Region3::new(CubeCoords::splat(side as i32), CubeCoords::ZERO),
            size: count,
            midpoint: CubeCoords::splat(count as i32 - 1),
        }
    }

    /// Target cube count this container was sized for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The seed position, with `size - 1` cells of headroom in every
    /// direction.
    pub fn midpoint(&self) -> CubeCoords {
        self.midpoint
    }

    /// Number of cubes currently placed.
    pub fn cube_count(&self) -> usize {
        self.cubes.len()
    }

    /// Currently placed cubes in placement order.
    pub fn cubes(&self) -> &[CubeCoords] {
        &self.cubes
    }

    /// Current bounding box of the occupied cells.
    pub fn bounding_box(&self) -> Region3 {
        self.bbox
    }

    /// Whether `cube` is occupied.
    #[inline]
    pub fn occupied(&self, cube: CubeCoords) -> bool {
        self.grid[cube]
    }

    /// Whether `(x, y, z)` is occupied.
    #[inline]
    pub fn occupied_at(&self, x: i32, y: i32, z: i32) -> bool {
        self.grid[(x, y, z)]
    }

    /// Marks `cube` occupied, appends it to the placed list, and widens the
    /// bounding box on any axis where it falls outside.
    ///
    /// Callers must ensure the cell is in bounds and currently empty; an
    /// out-of-bounds placement panics via the grid's bounds check.
    pub fn add_cube(&mut self, cube: CubeCoords) {
        debug_assert!(!self.grid[cube], "cell already occupied: {cube:?}");
        self.grid[cube] = true;
        self.cubes.push(cube);

        for axis in Axis::ALL {
            if cube[axis] < self.bbox.min[axis] {
                self.bbox.min[axis] = cube[axis];
            }
            if cube[axis] > self.bbox.max[axis] {
                self.bbox.max[axis] = cube[axis];
            }
        }
    }

    /// Removes the most recently placed cube.
    pub fn remove_last_cube(&mut self) {
        self.remove_cube_at(self.cubes.len() - 1);
    }

    /// Removes the cube at `idx` in placement order, preserving the relative
    /// order of the rest, and shrinks the bounding box where the removed cube
    /// was the last occupant of a boundary face.
    ///
    /// A single one-step shrink per axis is sufficient: under the generator's
    /// add/remove stack discipline a retraction can never leave a gap of more
    /// than one cell at the old boundary.
    pub fn remove_cube_at(&mut self, idx: usize) {
        let cube = self.cubes[idx];
        self.grid[cube] = false;
        self.cubes.remove(idx);

        let old_bbox = self.bbox;
        for axis in Axis::ALL {
            if cube[axis] != old_bbox.min[axis] && cube[axis] != old_bbox.max[axis] {
                continue;
            }
            if self.face_occupied(axis, cube[axis], &old_bbox) {
                continue;
            }
            if cube[axis] == old_bbox.min[axis] {
                self.bbox.min[axis] += 1;
            }
            if cube[axis] == old_bbox.max[axis] {
                self.bbox.max[axis] -= 1;
            }
        }
    }

    /// Whether any occupied cell remains in the box's cross-section at `pos`
    /// along `axis`.
    fn face_occupied(&self, axis: Axis, pos: i32, bbox: &Region3) -> bool {
        let (axis1, axis2) = axis.others();
        let base = self.grid.axis_offset(axis, pos);
        for (off1, off2) in self.grid.range_offsets_2d(axis1, axis2, bbox) {
            if *self.grid.at_offset(base + off1 + off2) {
                return true;
            }
        }
        false
    }

    /// 64-bit fingerprint of the current configuration.
    ///
    /// XORs the hash-table entry for every occupied cell, indexed by the
    /// cell's position relative to the bounding-box minimum. Two placements
    /// of the same shape at different lattice offsets therefore collide;
    /// rotated or mirrored shapes do not.
    pub fn calc_hash(&self) -> u64 {
        debug_assert!(!self.cubes.is_empty());

        let window = Region3::new(CubeCoords::ZERO, self.bbox.max - self.bbox.min);
        let grid_offsets = self.grid.range_offsets_3d(&self.bbox);
        let hash_offsets = self.hash3d.range_offsets_3d(&window);

        let mut sum = 0;
        for ((gx, gy, gz), (hx, hy, hz)) in grid_offsets.zip(hash_offsets) {
            if *self.grid.at_offset(gx + gy + gz) {
                sum ^= *self.hash3d.at_offset(hx + hy + hz);
            }
        }
        sum
    }
}
