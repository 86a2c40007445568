//! Breadth-first distance search over the carved passage graph.

use std::collections::VecDeque;

use crate::error::MazeError;
use crate::grid::{Coord, Direction, Grid};

/// Returns the cell with the greatest shortest-path distance (in
/// passage hops) from `start`, or [`MazeError::OutOfBounds`] when
/// `start` lies outside the grid.
///
/// The tracked cell only updates when a strictly greater distance is
/// dequeued, so ties keep the first cell found at the maximum distance.
/// Together with the FIFO frontier and the fixed N, E, S, W neighbor
/// order this makes the result reproducible for a given grid. Carving
/// leaves every cell reachable, and loop injection only adds passages,
/// so the search always covers the whole grid.
pub fn farthest(grid: &Grid, start: Coord) -> Result<Coord, MazeError> {
    if !grid.contains(start) {
        return Err(MazeError::OutOfBounds {
            x: start.x,
            y: start.y,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    visited[grid.index(start)] = true;

    let mut frontier = VecDeque::new();
    frontier.push_back((start, 0usize));

    let mut best = start;
    let mut max_distance = 0;

    while let Some((coord, distance)) = frontier.pop_front() {
        if distance > max_distance {
            max_distance = distance;
            best = coord;
        }

        for direction in Direction::ALL {
            if !grid.is_open(coord, direction) {
                continue;
            }
            if let Some(next) = grid.neighbor(coord, direction) {
                if !visited[grid.index(next)] {
                    visited[grid.index(next)] = true;
                    frontier.push_back((next, distance + 1));
                }
            }
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;

    #[test]
    fn corridor_farthest_is_the_far_end() {
        let grid = generate(5, 1, 123).unwrap();
        assert_eq!(farthest(&grid, Coord::new(0, 0)).unwrap(), Coord::new(4, 0));

        let grid = generate(1, 5, 99).unwrap();
        assert_eq!(farthest(&grid, Coord::new(0, 0)).unwrap(), Coord::new(0, 4));
    }

    #[test]
    fn search_is_idempotent() {
        let grid = generate(9, 7, 2024).unwrap();
        let start = Coord::new(3, 2);
        assert_eq!(
            farthest(&grid, start).unwrap(),
            farthest(&grid, start).unwrap()
        );
    }

    #[test]
    fn single_cell_farthest_is_start() {
        let grid = generate(1, 1, 5).unwrap();
        assert_eq!(farthest(&grid, Coord::new(0, 0)).unwrap(), Coord::new(0, 0));
    }

    #[test]
    fn rejects_out_of_bounds_start() {
        let grid = generate(3, 3, 1).unwrap();
        assert_eq!(
            farthest(&grid, Coord::new(3, 0)),
            Err(MazeError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn farthest_cell_differs_from_start_in_a_multi_cell_maze() {
        for seed in [1, 2, 3, 4, 5] {
            let grid = generate(6, 6, seed).unwrap();
            let start = Coord::new(0, 0);
            assert_ne!(farthest(&grid, start).unwrap(), start);
        }
    }
}
