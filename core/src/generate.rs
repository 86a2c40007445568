//! Randomized depth-first carving and loop injection.

use crate::error::MazeError;
use crate::grid::{Coord, Direction, Grid};
use crate::rng::SimpleLcg;

/// Carves a perfect maze: a spanning tree over the cell graph with
/// exactly `width * height - 1` open passage pairs and a single path
/// between any two cells.
///
/// The same `(width, height, seed)` always produces a bit-identical
/// layout. Fails with [`MazeError::InvalidDimension`] when either
/// dimension is below 1.
pub fn generate(width: usize, height: usize, seed: u32) -> Result<Grid, MazeError> {
    generate_with(width, height, &mut SimpleLcg::new(seed))
}

/// Like [`generate`], but drives an existing random stream so a caller
/// can keep carving and loop injection on one seeded sequence.
pub fn generate_with(
    width: usize,
    height: usize,
    rng: &mut SimpleLcg,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    carve(&mut grid, rng);
    Ok(grid)
}

/// Iterative backtracker over an explicit stack; recursion depth would
/// otherwise scale with `width * height`.
///
/// Inspect the stack top, pick a uniformly random unvisited in-bounds
/// neighbor, open the passage and push it; pop to backtrack when no
/// candidate is left. Every cell is visited exactly once, so the carve
/// terminates with the stack empty and the grid fully connected.
fn carve(grid: &mut Grid, rng: &mut SimpleLcg) {
    let start = Coord::new(0, 0);
    let mut visited = vec![false; grid.width() * grid.height()];
    visited[grid.index(start)] = true;

    let mut stack = Vec::with_capacity(grid.width() * grid.height());
    stack.push(start);

    while let Some(&current) = stack.last() {
        let (candidates, count) = unvisited_neighbors(grid, current, &visited);
        if count == 0 {
            stack.pop();
            continue;
        }

        let (direction, next) = candidates[rng.choice_index(count)];
        grid.open_passage(current, direction);
        visited[grid.index(next)] = true;
        stack.push(next);
    }
}

/// Unvisited in-bounds neighbors of `coord` in N, E, S, W order, as a
/// fixed four-slot array plus count.
fn unvisited_neighbors(
    grid: &Grid,
    coord: Coord,
    visited: &[bool],
) -> ([(Direction, Coord); 4], usize) {
    let mut found = [(Direction::North, coord); 4];
    let mut count = 0;

    for direction in Direction::ALL {
        if let Some(next) = grid.neighbor(coord, direction) {
            if !visited[grid.index(next)] {
                found[count] = (direction, next);
                count += 1;
            }
        }
    }

    (found, count)
}

/// Opens up to `floor(width * height * loop_factor)` extra passages at
/// uniformly random closed walls, turning a perfect maze into one with
/// cycles. Returns the number of passages actually opened.
///
/// Attempts are capped at `max(1000, target * 10)`: a dense grid can
/// run out of closeable walls, and delivering fewer loops than
/// requested is an expected outcome, not an error. A factor of 0 is a
/// guaranteed no-op; factors outside `[0.0, 1.0]` are rejected with
/// [`MazeError::InvalidLoopFactor`].
pub fn add_loops(
    grid: &mut Grid,
    loop_factor: f64,
    rng: &mut SimpleLcg,
) -> Result<usize, MazeError> {
    if !(0.0..=1.0).contains(&loop_factor) {
        return Err(MazeError::InvalidLoopFactor(loop_factor));
    }

    let target = ((grid.width() * grid.height()) as f64 * loop_factor) as usize;
    let max_attempts = (target * 10).max(1000);

    let mut opened = 0;
    let mut attempts = 0;
    while opened < target && attempts < max_attempts {
        let x = rng.randint(0, grid.width() - 1);
        let y = rng.randint(0, grid.height() - 1);
        let coord = Coord::new(x, y);

        let (walled, count) = closed_directions(grid, coord);
        if count > 0 {
            grid.open_passage(coord, walled[rng.choice_index(count)]);
            opened += 1;
        }
        attempts += 1;
    }

    Ok(opened)
}

/// Directions from `coord` that point at an in-bounds neighbor through
/// a still-closed wall, in N, E, S, W order.
fn closed_directions(grid: &Grid, coord: Coord) -> ([Direction; 4], usize) {
    let mut found = [Direction::North; 4];
    let mut count = 0;

    for direction in Direction::ALL {
        if grid.neighbor(coord, direction).is_some() && !grid.is_open(coord, direction) {
            found[count] = direction;
            count += 1;
        }
    }

    (found, count)
}
