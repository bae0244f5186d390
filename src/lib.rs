//! Polycube Counting Library
//!
//! Enumerates connected shapes of unit cubes on a 3D integer lattice and
//! counts the distinct ones up to translation ("fixed" polycubes). The
//! search is exhaustive backtracking from a fixed seed cube; deduplication
//! uses a translation-invariant positional hash recomputed at every
//! complete configuration.

pub mod array3d;
pub mod container;
pub mod coords;
pub mod generator;

pub use generator::Generator;
