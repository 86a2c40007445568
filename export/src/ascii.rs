//! Fixed-width text rendering.

use mazeforge_core::{Coord, Direction};

use crate::Maze;

/// Renders the maze as an ASCII character grid.
///
/// Each cell is a 3-character interior sharing `+`, `-` and `|` border
/// characters with its neighbors; east and south walls are omitted
/// where the passage is open. The start cell is marked `S` and the end
/// cell `E`.
pub fn render_ascii(maze: &Maze) -> String {
    let grid = maze.grid();
    let mut lines = Vec::with_capacity(grid.height() * 2 + 1);
    lines.push(format!("+{}", "---+".repeat(grid.width())));

    for y in 0..grid.height() {
        let mut row = String::from("|");
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            row.push_str(if coord == maze.start() {
                " S "
            } else if coord == maze.end() {
                " E "
            } else {
                "   "
            });
            row.push(if grid.is_open(coord, Direction::East) {
                ' '
            } else {
                '|'
            });
        }
        lines.push(row);

        let mut sill = String::from("+");
        for x in 0..grid.width() {
            sill.push_str(if grid.is_open(Coord::new(x, y), Direction::South) {
                "   +"
            } else {
                "---+"
            });
        }
        lines.push(sill);
    }

    lines.join("\n")
}
