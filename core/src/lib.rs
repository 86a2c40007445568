//! Grid model and maze algorithms
//!
//! This crate holds the cell/grid representation, the randomized
//! depth-first carver, the loop injector and the farthest-cell search.
//! Everything here is a pure, single-threaded computation over an
//! exclusively owned [`Grid`]; serialization and rendering live in the
//! `mazeforge-export` crate.
//!
//! Seeded generation is bit-for-bit reproducible: the same
//! `(width, height, seed)` always carves the same passage layout,
//! on every platform.

pub mod error;
pub mod generate;
pub mod grid;
pub mod rng;
pub mod search;

// Re-export commonly used types for convenience
pub use error::MazeError;
pub use generate::{add_loops, generate, generate_with};
pub use grid::{Cell, Coord, Direction, Grid};
pub use rng::SimpleLcg;
pub use search::farthest;
