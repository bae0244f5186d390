//! Dense 3D storage with stride-based offset sequences.
//!
//! The hot loops of the occupancy container repeatedly scan axis-aligned
//! sub-ranges of the backing buffer (a boundary strip after a removal, the
//! bounding-box volume when hashing). [`Array3d`] precomputes the per-axis
//! strides once and hands out lazy offset sequences that step by those
//! strides, so the scans never redo multiply/index arithmetic per cell.
//!
//! All three sequence types share the same contract: both endpoints are
//! inclusive, completion is reported exactly once, and a further `next`
//! call after completion panics rather than returning stale offsets.
//! `reset` rewinds a sequence to its first element.

use std::ops::{Index, IndexMut};

use crate::coords::{Axis, CubeCoords, Region3};

/// A flat buffer addressed as a 3D array, x-major.
///
/// Strides are `[size_y * size_z, size_z, 1]`, so the linear index of
/// `(x, y, z)` is `x * size_y * size_z + y * size_z + z`.
pub struct Array3d<T> {
    pub size_x: usize,
    pub size_y: usize,
    pub size_z: usize,
    stride: [i32; 3],
    data: Vec<T>,
}

impl<T: Clone + Default> Array3d<T> {
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        let size_yz = size_y * size_z;
        Self {
            size_x,
            size_y,
            size_z,
            stride: [size_yz as i32, size_z as i32, 1],
            data: vec![T::default(); size_x * size_yz],
        }
    }
}

impl<T> Array3d<T> {
    #[inline]
    fn linear_index(&self, c: CubeCoords) -> usize {
        (c.x * self.stride[0] + c.y * self.stride[1] + c.z) as usize
    }

    /// Element access by a precomputed linear offset (sum of per-axis
    /// partial offsets produced by the sequences below).
    #[inline]
    pub fn at_offset(&self, offset: i32) -> &T {
        &self.data[offset as usize]
    }

    /// The linear offset contributed by position `pos` on one axis.
    #[inline]
    pub fn axis_offset(&self, axis: Axis, pos: i32) -> i32 {
        self.stride[axis as usize] * pos
    }

    /// Offsets of the cells `start..=end` along `axis`, direction inferred
    /// from the sign of `end - start`.
    pub fn offsets_1d(&self, axis: Axis, start: i32, end: i32) -> Offsets1D {
        let stride = self.stride[axis as usize];
        let step = if end < start { -stride } else { stride };
        Offsets1D::new(start * stride, end * stride, step)
    }

    /// Like [`offsets_1d`](Self::offsets_1d), with the direction forced.
    pub fn offsets_1d_directed(
        &self,
        axis: Axis,
        start: i32,
        end: i32,
        backwards: bool,
    ) -> Offsets1D {
        if backwards {
            self.offsets_1d(axis, end, start)
        } else {
            self.offsets_1d(axis, start, end)
        }
    }

    /// Offsets of `region`'s inclusive range along `axis`.
    pub fn range_offsets_1d(&self, axis: Axis, region: &Region3, backwards: bool) -> Offsets1D {
        self.offsets_1d_directed(axis, region.min[axis], region.max[axis], backwards)
    }

    /// Partial-offset pairs over two axis ranges, `axis2` varying fastest.
    pub fn offsets_2d(
        &self,
        axis1: Axis,
        start1: i32,
        end1: i32,
        axis2: Axis,
        start2: i32,
        end2: i32,
    ) -> Offsets2D {
        Offsets2D::new(
            self.offsets_1d(axis1, start1, end1),
            self.offsets_1d(axis2, start2, end2),
        )
    }

    /// Partial-offset pairs over `region`'s ranges on two axes.
    pub fn range_offsets_2d(&self, axis1: Axis, axis2: Axis, region: &Region3) -> Offsets2D {
        self.offsets_2d(
            axis1,
            region.min[axis1],
            region.max[axis1],
            axis2,
            region.min[axis2],
            region.max[axis2],
        )
    }

    /// Partial-offset triples over three axis ranges, last axis fastest.
    #[allow(clippy::too_many_arguments)]
    pub fn offsets_3d(
        &self,
        axis1: Axis,
        start1: i32,
        end1: i32,
        axis2: Axis,
        start2: i32,
        end2: i32,
        axis3: Axis,
        start3: i32,
        end3: i32,
    ) -> Offsets3D {
        Offsets3D::new(
            self.offsets_1d(axis1, start1, end1),
            self.offsets_1d(axis2, start2, end2),
            self.offsets_1d(axis3, start3, end3),
        )
    }

    /// Partial-offset triples over `region`'s full volume in X, Y, Z order.
    pub fn range_offsets_3d(&self, region: &Region3) -> Offsets3D {
        self.offsets_3d(
            Axis::X,
            region.min.x,
            region.max.x,
            Axis::Y,
            region.min.y,
            region.max.y,
            Axis::Z,
            region.min.z,
            region.max.z,
        )
    }
}

impl<T> Index<CubeCoords> for Array3d<T> {
    type Output = T;

    #[inline]
    fn index(&self, c: CubeCoords) -> &T {
        &self.data[self.linear_index(c)]
    }
}

impl<T> IndexMut<CubeCoords> for Array3d<T> {
    #[inline]
    fn index_mut(&mut self, c: CubeCoords) -> &mut T {
        let idx = self.linear_index(c);
        &mut self.data[idx]
    }
}

impl<T> Index<(i32, i32, i32)> for Array3d<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y, z): (i32, i32, i32)) -> &T {
        &self.data[self.linear_index(CubeCoords::new(x, y, z))]
    }
}

/// Iteration state shared by the offset sequences.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SeqState {
    Fresh,
    Active,
    Done,
}

/// Lazy inclusive sequence of linear offsets along one axis.
#[derive(Clone, Debug)]
pub struct Offsets1D {
    start: i32,
    end: i32,
    step: i32,
    current: i32,
    state: SeqState,
}

impl Offsets1D {
    pub fn new(start: i32, end: i32, step: i32) -> Self {
        Self {
            start,
            end,
            step,
            current: start,
            state: SeqState::Fresh,
        }
    }

    /// Rewinds to the first element.
    pub fn reset(&mut self) {
        self.state = SeqState::Fresh;
    }
}

impl Iterator for Offsets1D {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        match self.state {
            SeqState::Fresh => {
                self.current = self.start;
                self.state = SeqState::Active;
                Some(self.current)
            }
            SeqState::Active => {
                if self.current == self.end {
                    self.state = SeqState::Done;
                    None
                } else {
                    self.current += self.step;
                    Some(self.current)
                }
            }
            SeqState::Done => panic!("offset sequence already exhausted"),
        }
    }
}

/// Cartesian product of two 1D offset sequences, second axis fastest.
///
/// Yields per-axis partial offsets; callers sum them (plus any fixed base
/// offset) to form the linear index.
#[derive(Clone, Debug)]
pub struct Offsets2D {
    outer: Offsets1D,
    inner: Offsets1D,
    current_outer: i32,
}

impl Offsets2D {
    fn new(outer: Offsets1D, inner: Offsets1D) -> Self {
        Self {
            outer,
            inner,
            current_outer: 0,
        }
    }

    pub fn reset(&mut self) {
        self.outer.reset();
        self.inner.reset();
    }
}

impl Iterator for Offsets2D {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.outer.state == SeqState::Fresh {
            self.current_outer = self.outer.next()?;
        }
        match self.inner.next() {
            Some(inner) => Some((self.current_outer, inner)),
            None => {
                // inner range finished: advance the outer axis and restart
                match self.outer.next() {
                    Some(outer) => {
                        self.current_outer = outer;
                        self.inner.reset();
                        let inner = self.inner.next().unwrap();
                        Some((self.current_outer, inner))
                    }
                    None => None,
                }
            }
        }
    }
}

/// Cartesian product of three 1D offset sequences, last axis fastest.
#[derive(Clone, Debug)]
pub struct Offsets3D {
    outer: Offsets1D,
    rest: Offsets2D,
    current_outer: i32,
}

impl Offsets3D {
    fn new(outer: Offsets1D, mid: Offsets1D, inner: Offsets1D) -> Self {
        Self {
            outer,
            rest: Offsets2D::new(mid, inner),
            current_outer: 0,
        }
    }

    pub fn reset(&mut self) {
        self.outer.reset();
        self.rest.reset();
    }
}

impl Iterator for Offsets3D {
    type Item = (i32, i32, i32);

    fn next(&mut self) -> Option<(i32, i32, i32)> {
        if self.outer.state == SeqState::Fresh {
            self.current_outer = self.outer.next()?;
        }
        match self.rest.next() {
            Some((mid, inner)) => Some((self.current_outer, mid, inner)),
            None => match self.outer.next() {
                Some(outer) => {
                    self.current_outer = outer;
                    self.rest.reset();
                    let (mid, inner) = self.rest.next().unwrap();
                    Some((self.current_outer, mid, inner))
                }
                None => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Array3d<bool> {
        // strides: x=12, y=4, z=1
        Array3d::new(3, 3, 4)
    }

    #[test]
    fn test_linear_indexing_is_x_major() {
        let mut g: Array3d<u32> = Array3d::new(3, 3, 4);
        g[CubeCoords::new(2, 1, 3)] = 99;
        assert_eq!(g[(2, 1, 3)], 99);
        assert_eq!(*g.at_offset(2 * 12 + 1 * 4 + 3), 99);
    }

    #[test]
    fn test_offsets_1d_forward() {
        let g = grid();
        let offsets: Vec<i32> = g.offsets_1d(Axis::Y, 0, 2).collect();
        assert_eq!(offsets, vec![0, 4, 8]);
    }

    #[test]
    fn test_offsets_1d_infers_backward_direction() {
        let g = grid();
        let offsets: Vec<i32> = g.offsets_1d(Axis::Z, 3, 1).collect();
        assert_eq!(offsets, vec![3, 2, 1]);
    }

    #[test]
    fn test_offsets_1d_directed_backwards() {
        let g = grid();
        let offsets: Vec<i32> = g.offsets_1d_directed(Axis::X, 0, 2, true).collect();
        assert_eq!(offsets, vec![24, 12, 0]);
    }

    #[test]
    fn test_offsets_1d_single_element() {
        let g = grid();
        let offsets: Vec<i32> = g.offsets_1d(Axis::X, 1, 1).collect();
        assert_eq!(offsets, vec![12]);
    }

    #[test]
    #[should_panic(expected = "already exhausted")]
    fn test_offsets_1d_next_after_completion_panics() {
        let g = grid();
        let mut seq = g.offsets_1d(Axis::Z, 0, 1);
        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        seq.next(); // misuse
    }

    #[test]
    fn test_offsets_1d_reset_restarts() {
        let g = grid();
        let mut seq = g.offsets_1d(Axis::Y, 0, 1);
        assert_eq!(seq.by_ref().collect::<Vec<_>>(), vec![0, 4]);
        seq.reset();
        assert_eq!(seq.collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn test_offsets_2d_last_axis_fastest() {
        let g = grid();
        let pairs: Vec<(i32, i32)> = g.offsets_2d(Axis::Y, 0, 1, Axis::Z, 0, 2).collect();
        assert_eq!(
            pairs,
            vec![(0, 0), (0, 1), (0, 2), (4, 0), (4, 1), (4, 2)]
        );
    }

    #[test]
    fn test_offsets_2d_mixed_directions() {
        let g = grid();
        let pairs: Vec<(i32, i32)> = g.offsets_2d(Axis::X, 1, 0, Axis::Z, 0, 1).collect();
        assert_eq!(pairs, vec![(12, 0), (12, 1), (0, 0), (0, 1)]);
    }

    #[test]
    fn test_offsets_2d_reset_restarts() {
        let g = grid();
        let mut seq = g.offsets_2d(Axis::Y, 0, 1, Axis::Z, 0, 0);
        let first: Vec<_> = seq.by_ref().collect();
        seq.reset();
        let second: Vec<_> = seq.collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![(0, 0), (4, 0)]);
    }

    #[test]
    fn test_offsets_3d_row_major_nesting() {
        let g = grid();
        let triples: Vec<(i32, i32, i32)> = g
            .offsets_3d(Axis::X, 0, 1, Axis::Y, 0, 1, Axis::Z, 0, 1)
            .collect();
        assert_eq!(
            triples,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 4, 0),
                (0, 4, 1),
                (12, 0, 0),
                (12, 0, 1),
                (12, 4, 0),
                (12, 4, 1),
            ]
        );
    }

    #[test]
    fn test_range_offsets_cover_region_volume() {
        let g = grid();
        let region = Region3::new(CubeCoords::new(0, 1, 1), CubeCoords::new(2, 2, 3));
        let cells: Vec<i32> = g
            .range_offsets_3d(&region)
            .map(|(a, b, c)| a + b + c)
            .collect();
        assert_eq!(cells.len(), 3 * 2 * 3);
        // spot-check the corners
        assert_eq!(cells[0], 1 * 4 + 1);
        assert_eq!(*cells.last().unwrap(), 2 * 12 + 2 * 4 + 3);
    }

    #[test]
    fn test_range_offsets_1d_uses_region_bounds() {
        let g = grid();
        let region = Region3::new(CubeCoords::new(0, 1, 0), CubeCoords::new(2, 2, 3));
        let forward: Vec<i32> = g.range_offsets_1d(Axis::Y, &region, false).collect();
        let backward: Vec<i32> = g.range_offsets_1d(Axis::Y, &region, true).collect();
        assert_eq!(forward, vec![4, 8]);
        assert_eq!(backward, vec![8, 4]);
    }

    #[test]
    fn test_axis_offset_matches_stride() {
        let g = grid();
        assert_eq!(g.axis_offset(Axis::X, 2), 24);
        assert_eq!(g.axis_offset(Axis::Y, 2), 8);
        assert_eq!(g.axis_offset(Axis::Z, 2), 2);
    }
}
