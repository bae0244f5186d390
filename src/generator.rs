//! Exhaustive backtracking enumeration of connected cube shapes.
//!
//! The walk grows a shape one cube at a time from a fixed seed and counts
//! distinct translation-invariant hashes at the target size. The same final
//! shape is reached through many growth orders; no structural pruning is
//! attempted, deduplication is entirely the seen-hash set's job.

use rustc_hash::FxHashSet;

use crate::container::Container;
use crate::coords::DIRECTIONS;

pub struct Generator {
    container: Container,
    seen: FxHashSet<u64>,
    counter: usize,
}

impl Generator {
    /// Creates a generator for shapes of exactly `count` cubes.
    pub fn new(count: usize) -> Self {
        assert!(count >= 1, "target cube count must be positive");
        Self {
            container: Container::new(count),
            seen: FxHashSet::default(),
            counter: 0,
        }
    }

    /// Runs the full enumeration. Recursion depth is bounded by the target
    /// count; the walk terminates because every branch strictly grows the
    /// shape inside a finite grid.
    pub fn generate(&mut self) {
        let seed = self.container.midpoint();
        self.container.add_cube(seed);
        self.try_add_next_cube();
    }

    /// Number of distinct shapes seen so far.
    pub fn count(&self) -> usize {
        self.counter
    }

    fn try_add_next_cube(&mut self) {
        if self.container.cube_count() == self.container.size() {
            let hash = self.container.calc_hash();
            if self.seen.insert(hash) {
                self.counter += 1;
            }
            return;
        }

        // snapshot: cubes added below must not seed growth at this level
        let snapshot = self.container.cubes().to_vec();
        for cube in snapshot {
            for dir in DIRECTIONS {
                let location = cube + dir;
                if !self.container.occupied(location) {
                    self.container.add_cube(location);
                    self.try_add_next_cube();
                    self.container.remove_last_cube();
                }
            }
        }
    }
}
