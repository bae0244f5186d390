//! Lattice coordinates, axes, and axis-aligned regions.
//!
//! Everything here is plain value arithmetic; the grid storage that these
//! types address lives in [`crate::array3d`].

use std::ops::{Add, Index, IndexMut, Sub};

/// One of the three lattice axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The two axes perpendicular to this one, in index order.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// A position on the 3D integer lattice, identifying one unit cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CubeCoords {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// The six axis-aligned unit directions a shape can grow in.
pub const DIRECTIONS: [CubeCoords; 6] = [
    CubeCoords::new(0, 0, 1),
    CubeCoords::new(0, 0, -1),
    CubeCoords::new(0, 1, 0),
    CubeCoords::new(0, -1, 0),
    CubeCoords::new(1, 0, 0),
    CubeCoords::new(-1, 0, 0),
];

impl CubeCoords {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Same coordinate on all three axes.
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

impl From<(i32, i32, i32)> for CubeCoords {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for CubeCoords {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for CubeCoords {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Index<Axis> for CubeCoords {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for CubeCoords {
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// An inclusive axis-aligned box of lattice positions.
///
/// While at least one cell is tracked, `min[a] <= max[a]` holds on every
/// axis. An empty region is represented by a sentinel where `min` exceeds
/// `max` component-wise.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Region3 {
    pub min: CubeCoords,
    pub max: CubeCoords,
}

impl Region3 {
    pub const fn new(min: CubeCoords, max: CubeCoords) -> Self {
        Self { min, max }
    }

    /// Collapses one axis to a single position, keeping the other two ranges.
    ///
    /// The result describes the cross-section of the region at `pos`.
    pub fn project(mut self, axis: Axis, pos: i32) -> Self {
        self.min[axis] = pos;
        self.max[axis] = pos;
        self
    }

    /// `max - min` along one axis (0 for a single-cell-thick region).
    pub fn extent(&self, axis: Axis) -> i32 {
        self.max[axis] - self.min[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indexing() {
        let mut c = CubeCoords::new(1, 2, 3);
        assert_eq!(c[Axis::X], 1);
        assert_eq!(c[Axis::Y], 2);
        assert_eq!(c[Axis::Z], 3);
        c[Axis::Y] = 7;
        assert_eq!(c, CubeCoords::new(1, 7, 3));
    }

    #[test]
    fn test_axis_others_are_perpendicular() {
        for axis in Axis::ALL {
            let (a, b) = axis.others();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_component_arithmetic() {
        let a = CubeCoords::new(1, -2, 3);
        let b = CubeCoords::new(4, 5, -6);
        assert_eq!(a + b, CubeCoords::new(5, 3, -3));
        assert_eq!(b - a, CubeCoords::new(3, 7, -9));
        assert_eq!(a.min(b), CubeCoords::new(1, -2, -6));
        assert_eq!(a.max(b), CubeCoords::new(4, 5, 3));
    }

    #[test]
    fn test_directions_are_unit_steps() {
        assert_eq!(DIRECTIONS.len(), 6);
        for dir in DIRECTIONS {
            let manhattan = dir.x.abs() + dir.y.abs() + dir.z.abs();
            assert_eq!(manhattan, 1);
        }
        // every direction's opposite is also present
        for dir in DIRECTIONS {
            let opposite = CubeCoords::ZERO - dir;
            assert!(DIRECTIONS.contains(&opposite));
        }
    }

    #[test]
    fn test_region_project() {
        let region = Region3::new(CubeCoords::new(1, 2, 3), CubeCoords::new(4, 5, 6));
        let slice = region.project(Axis::Y, 5);
        assert_eq!(slice.min, CubeCoords::new(1, 5, 3));
        assert_eq!(slice.max, CubeCoords::new(4, 5, 6));
        assert_eq!(slice.extent(Axis::Y), 0);
        assert_eq!(slice.extent(Axis::X), 3);
    }
}
