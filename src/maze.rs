use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::{
    grid::{Grid, Position},
    Error,
};

/// A walled maze decoded from text: `#` wall, `.` floor, `S` start, `E` end.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    start_pos: Position,
    end_pos: Position,
}

impl Maze {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start_pos(&self) -> Position {
        self.start_pos
    }

    pub fn end_pos(&self) -> Position {
        self.end_pos
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[derive(Debug)]
pub struct MazeBuilder {
    walls: Vec<Position>,
    row_n: usize,
    col_n: Option<usize>,
    start_pos: Option<Position>,
    end_pos: Option<Position>,
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self {
            walls: Vec::new(),
            row_n: 0,
            col_n: None,
            start_pos: None,
            end_pos: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for (ind, c) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, ind);
            match c {
                'S' => {
                    if let Some(last_pos) = self.start_pos {
                        return Err(Error::MultipleStartPosition(last_pos, pos));
                    }

                    self.start_pos = Some(pos);
                }
                'E' => {
                    if let Some(last_pos) = self.end_pos {
                        return Err(Error::MultipleEndPosition(last_pos, pos));
                    }

                    self.end_pos = Some(pos);
                }
                '#' => self.walls.push(pos),
                '.' => (),
                other => return Err(Error::InvalidCharForMap(other)),
            }
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Maze, Error> {
        let Some(start_pos) = self.start_pos else {
            return Err(Error::NoStartPosition);
        };
        let Some(end_pos) = self.end_pos else {
            return Err(Error::NoEndPosition);
        };

        Ok(Maze {
            grid: Grid::with_obstructions(self.row_n, self.col_n.unwrap_or(0), &self.walls)?,
            start_pos,
            end_pos,
        })
    }
}

impl TryFrom<&str> for Maze {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = MazeBuilder::new();
        for line in value.lines().filter(|line| !line.is_empty()) {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MazeBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.is_empty() {
            continue;
        }
        builder.add_row(line.as_str())?
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_markers_and_walls() {
        let maze = Maze::try_from("#####\n#S.E#\n#####\n").unwrap();
        assert_eq!(maze.start_pos(), Position::new(1, 1));
        assert_eq!(maze.end_pos(), Position::new(1, 3));
        assert_eq!(maze.grid().row_n(), 3);
        assert_eq!(maze.grid().col_n(), 5);
        let wall_n = (0..3)
            .flat_map(|r| (0..5).map(move |c| Position::new(r, c)))
            .filter(|pos| maze.grid().is_obstructed(pos))
            .count();
        assert_eq!(wall_n, 12);
        assert!(maze.grid().is_open(&Position::new(1, 2)));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(
            Maze::try_from("#S#\n#E\n").unwrap_err(),
            Error::InconsistentRow(3, 2)
        );
        assert_eq!(
            Maze::try_from("SS.E").unwrap_err(),
            Error::MultipleStartPosition(Position::new(0, 0), Position::new(0, 1))
        );
        assert_eq!(
            Maze::try_from("S.EE").unwrap_err(),
            Error::MultipleEndPosition(Position::new(0, 2), Position::new(0, 3))
        );
        assert_eq!(Maze::try_from("S.x.E").unwrap_err(), Error::InvalidCharForMap('x'));
        assert_eq!(Maze::try_from("..E").unwrap_err(), Error::NoStartPosition);
        assert_eq!(Maze::try_from("S..").unwrap_err(), Error::NoEndPosition);
    }
}
