//! Wall-segment rendering to SVG.

use svg::node::element::{Circle, Line};
use svg::Document;

use mazeforge_core::{Coord, Direction};

use crate::Maze;

const CELL_SIZE: u32 = 24;
const WALL_WIDTH: u32 = 2;
const MARKER_RADIUS: u32 = CELL_SIZE / 4;

/// Renders the maze as an SVG document.
///
/// A wall segment is emitted only where a passage is closed; an open
/// passage is the absence of a segment. The four outer boundary lines
/// are always drawn: edge cells carry no closed passage toward the
/// outside, so the boundary cannot come from the per-cell walls. Green
/// and red circles mark the start and end cell centers.
pub fn render_svg(maze: &Maze) -> Document {
    let grid = maze.grid();
    let canvas_width = grid.width() as u32 * CELL_SIZE + WALL_WIDTH;
    let canvas_height = grid.height() as u32 * CELL_SIZE + WALL_WIDTH;

    let mut document = Document::new()
        .set("width", canvas_width)
        .set("height", canvas_height)
        .set("style", "background:#fff")
        .add(wall(0, 0, canvas_width, 0))
        .add(wall(0, 0, 0, canvas_height))
        .add(wall(canvas_width, 0, canvas_width, canvas_height))
        .add(wall(0, canvas_height, canvas_width, canvas_height));

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            let px = x as u32 * CELL_SIZE;
            let py = y as u32 * CELL_SIZE;

            if !grid.is_open(coord, Direction::North) {
                document = document.add(wall(px, py, px + CELL_SIZE, py));
            }
            if !grid.is_open(coord, Direction::East) {
                document = document.add(wall(px + CELL_SIZE, py, px + CELL_SIZE, py + CELL_SIZE));
            }
            if !grid.is_open(coord, Direction::South) {
                document = document.add(wall(px, py + CELL_SIZE, px + CELL_SIZE, py + CELL_SIZE));
            }
            if !grid.is_open(coord, Direction::West) {
                document = document.add(wall(px, py, px, py + CELL_SIZE));
            }
        }
    }

    document
        .add(marker(maze.start(), "green"))
        .add(marker(maze.end(), "red"))
}

fn wall(x1: u32, y1: u32, x2: u32, y2: u32) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", "black")
        .set("stroke-width", WALL_WIDTH)
}

fn marker(cell: Coord, fill: &str) -> Circle {
    Circle::new()
        .set("cx", cell.x as u32 * CELL_SIZE + CELL_SIZE / 2)
        .set("cy", cell.y as u32 * CELL_SIZE + CELL_SIZE / 2)
        .set("r", MARKER_RADIUS)
        .set("fill", fill)
}
