//! Maze assembly and export surfaces.
//!
//! [`build_maze`] is the generation entry point consumed by UI and CLI
//! collaborators: it validates its inputs, carves a grid, optionally
//! injects loops, resolves the start and end cells and freezes the
//! result into an immutable [`Maze`]. The three exporters
//! ([`to_canonical`], [`render_ascii`] and [`render_svg`]) are
//! stateless read-only views over that value and can be called in any
//! order.

mod ascii;
mod canonical;
mod vector;

pub use mazeforge_core::{Cell, Coord, Direction, Grid, MazeError, SimpleLcg};

pub use ascii::render_ascii;
pub use canonical::{from_canonical, to_canonical};
pub use vector::render_svg;

use mazeforge_core::{add_loops, farthest, generate_with};

/// A finished maze: the carved grid plus its designated start and end
/// cells and the loop factor requested at build time.
///
/// Immutable after construction; exporters take it by shared reference
/// and share no mutable state, so independent mazes can be built and
/// rendered concurrently without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
    loop_factor: f64,
}

impl Maze {
    /// Wraps an already-carved grid. Fails with
    /// [`MazeError::OutOfBounds`] when either endpoint lies outside the
    /// grid, or [`MazeError::InvalidLoopFactor`] for a factor outside
    /// `[0.0, 1.0]`.
    pub fn from_parts(
        grid: Grid,
        start: Coord,
        end: Coord,
        loop_factor: f64,
    ) -> Result<Self, MazeError> {
        if !(0.0..=1.0).contains(&loop_factor) {
            return Err(MazeError::InvalidLoopFactor(loop_factor));
        }
        for coord in [start, end] {
            if !grid.contains(coord) {
                return Err(MazeError::OutOfBounds {
                    x: coord.x,
                    y: coord.y,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
        }
        Ok(Self {
            grid,
            start,
            end,
            loop_factor,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// The loop factor the maze was built with. This records the
    /// request, not the achieved density; compare
    /// `grid().open_passage_count()` against `width * height - 1` for
    /// the number of loops actually opened.
    pub fn loop_factor(&self) -> f64 {
        self.loop_factor
    }
}

/// Builds a finished maze.
///
/// Carving and loop injection run on one seeded stream, so the whole
/// pipeline is reproducible from `(width, height, seed, loop_factor)`.
/// When `seed` is `None` one is drawn from OS entropy. `start` defaults
/// to (0, 0); a missing `end` resolves to the farthest reachable cell
/// from the resolved start.
///
/// All validation happens here, before any carving: a failed call never
/// returns a partial maze.
pub fn build_maze(
    width: usize,
    height: usize,
    seed: Option<u32>,
    loop_factor: f64,
    start: Option<Coord>,
    end: Option<Coord>,
) -> Result<Maze, MazeError> {
    if width < 1 || height < 1 {
        return Err(MazeError::InvalidDimension { width, height });
    }
    if !(0.0..=1.0).contains(&loop_factor) {
        return Err(MazeError::InvalidLoopFactor(loop_factor));
    }
    let start = start.unwrap_or(Coord::new(0, 0));
    for coord in [Some(start), end].into_iter().flatten() {
        if coord.x >= width || coord.y >= height {
            return Err(MazeError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                width,
                height,
            });
        }
    }

    let seed = seed.unwrap_or_else(rand::random);
    tracing::debug!(width, height, seed, loop_factor, "carving maze");

    let mut rng = SimpleLcg::new(seed);
    let mut grid = generate_with(width, height, &mut rng)?;
    let opened = add_loops(&mut grid, loop_factor, &mut rng)?;
    if opened > 0 {
        tracing::debug!(opened, "loop injection opened extra passages");
    }

    let end = match end {
        Some(end) => end,
        None => farthest(&grid, start)?,
    };
    tracing::debug!(%start, %end, "maze ready");

    Maze::from_parts(grid, start, end, loop_factor)
}
