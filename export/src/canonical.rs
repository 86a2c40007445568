//! Canonical text serialization, the interchange format.
//!
//! One cell per line in row-major order (y ascending, then x), with a
//! fixed field layout, so two identical mazes always serialize to
//! identical bytes. The emitted text is plain JSON; decoding therefore
//! goes through `serde_json` and rebuilds the grid passage by passage.

use serde::Deserialize;

use mazeforge_core::{farthest, Coord, Direction, Grid, MazeError};

use crate::Maze;

/// Serializes a maze to its canonical text form: dimensions, start and
/// end, the loop factor, then every cell's position and N/E/S/W passage
/// flags as 0/1.
pub fn to_canonical(maze: &Maze) -> String {
    let grid = maze.grid();
    let total = grid.width() * grid.height();

    let mut lines = Vec::with_capacity(total + 8);
    lines.push("{".to_string());
    lines.push(format!("  \"width\": {},", grid.width()));
    lines.push(format!("  \"height\": {},", grid.height()));
    lines.push(format!(
        "  \"start\": [{}, {}],",
        maze.start().x,
        maze.start().y
    ));
    lines.push(format!("  \"end\": [{}, {}],", maze.end().x, maze.end().y));
    lines.push(format!(
        "  \"difficulty\": {{ \"loops\": {} }},",
        json_number(maze.loop_factor())
    ));
    lines.push("  \"cells\": [".to_string());

    let mut written = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let flags = grid.cell(Coord::new(x, y)).passages().map(u8::from);
            written += 1;
            let comma = if written < total { "," } else { "" };
            lines.push(format!(
                "    {{ \"position\": [{}, {}], \"directions\": [{}, {}, {}, {}] }}{}",
                x, y, flags[0], flags[1], flags[2], flags[3], comma
            ));
        }
    }

    lines.push("  ]".to_string());
    lines.push("}".to_string());
    lines.join("\n")
}

/// Formats a loop factor so the canonical text stays valid JSON and
/// byte-stable: whole values keep one decimal place.
fn json_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[derive(Deserialize)]
struct MazeDoc {
    width: usize,
    height: usize,
    #[serde(default)]
    start: Option<[usize; 2]>,
    #[serde(default)]
    end: Option<[usize; 2]>,
    #[serde(default)]
    difficulty: DifficultyDoc,
    cells: Vec<CellDoc>,
}

#[derive(Deserialize, Default)]
struct DifficultyDoc {
    #[serde(default)]
    loops: f64,
}

#[derive(Deserialize)]
struct CellDoc {
    position: [usize; 2],
    directions: [u8; 4],
}

/// Reconstructs a [`Maze`] from its canonical text without re-running
/// generation.
///
/// The cell census is validated (count, bounds, duplicates) and the
/// grid is rebuilt through `open_passage`, so the symmetric-adjacency
/// invariant holds by construction. A missing `start` defaults to
/// (0, 0) and a missing `end` is recomputed as the farthest reachable
/// cell, mirroring the build-time defaults. Text that does not parse is
/// [`MazeError::MalformedInput`].
pub fn from_canonical(text: &str) -> Result<Maze, MazeError> {
    let doc: MazeDoc =
        serde_json::from_str(text).map_err(|err| MazeError::MalformedInput(err.to_string()))?;

    let mut grid = Grid::new(doc.width, doc.height)?;
    let expected = doc.width * doc.height;
    if doc.cells.len() != expected {
        return Err(MazeError::MalformedInput(format!(
            "expected {} cells for a {}x{} grid, found {}",
            expected,
            doc.width,
            doc.height,
            doc.cells.len()
        )));
    }

    let mut seen = vec![false; expected];
    for cell in &doc.cells {
        let coord = Coord::new(cell.position[0], cell.position[1]);
        if !grid.contains(coord) {
            return Err(MazeError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                width: doc.width,
                height: doc.height,
            });
        }
        let slot = coord.y * doc.width + coord.x;
        if seen[slot] {
            return Err(MazeError::MalformedInput(format!(
                "duplicate cell at ({}, {})",
                coord.x, coord.y
            )));
        }
        seen[slot] = true;

        for direction in Direction::ALL {
            if cell.directions[direction.index()] != 0
                && grid.neighbor(coord, direction).is_some()
            {
                grid.open_passage(coord, direction);
            }
        }
    }

    let start = doc
        .start
        .map(|[x, y]| Coord::new(x, y))
        .unwrap_or(Coord::new(0, 0));
    let end = match doc.end {
        Some([x, y]) => Coord::new(x, y),
        None => farthest(&grid, start)?,
    };
    Maze::from_parts(grid, start, end, doc.difficulty.loops)
}
