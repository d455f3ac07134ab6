use std::{
    collections::HashSet,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

/// Parses the `x,y` form used by falling-byte lists, where `x` is the column.
impl TryFrom<&str> for Position {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let comma_pos = value.find(',').ok_or(Error::NoCommaInPositonText)?;
        let c_text = value[..comma_pos].trim();
        let c = c_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCoordinateText(c_text.to_string()))?;
        let r_text = value[(comma_pos + 1)..].trim();
        let r = r_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCoordinateText(r_text.to_string()))?;

        Ok(Position::new(r, c))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn row(&self) -> usize {
        self.r
    }

    pub fn col(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        Some(Self::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "^"),
            Direction::East => write!(f, ">"),
            Direction::South => write!(f, "v"),
            Direction::West => write!(f, "<"),
        }
    }
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    /// Unit vector as (row delta, column delta).
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }
}

/// Bounded rectangular grid with a set of impassable positions.
///
/// The obstruction set only grows, and only through [`Grid::add_obstruction`].
#[derive(Debug, Clone)]
pub struct Grid {
    row_n: usize,
    col_n: usize,
    obstructions: HashSet<Position>,
}

impl Grid {
    pub fn new(row_n: usize, col_n: usize) -> Self {
        Self {
            row_n,
            col_n,
            obstructions: HashSet::new(),
        }
    }

    pub fn new_square(side_len: usize) -> Self {
        Self::new(side_len, side_len)
    }

    pub fn with_obstructions<'a, I>(row_n: usize, col_n: usize, positions: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut grid = Self::new(row_n, col_n);
        for pos in positions {
            match grid.add_obstruction(*pos) {
                Ok(()) | Err(Error::AlreadyObstructed(_)) => (),
                Err(e) => return Err(e),
            }
        }

        Ok(grid)
    }

    pub fn add_obstruction(&mut self, pos: Position) -> Result<(), Error> {
        if !self.is_inside(&pos) {
            return Err(Error::ObstructionOutOfGrid(pos));
        }

        if !self.obstructions.insert(pos) {
            return Err(Error::AlreadyObstructed(pos));
        }

        Ok(())
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub fn is_obstructed(&self, pos: &Position) -> bool {
        self.obstructions.contains(pos)
    }

    /// Inside the bounds and not obstructed.
    pub fn is_open(&self, pos: &Position) -> bool {
        self.is_inside(pos) && !self.is_obstructed(pos)
    }

    pub fn open_neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.neighbor(dir).filter(|next_pos| self.is_open(next_pos))
    }
}

pub fn read_positions<P: AsRef<Path>>(path: P) -> Result<Vec<Position>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |s| !s.trim().is_empty()))
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} from given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                Position::try_from(s.as_str())
                    .with_context(|| format!("Failed to parse position in line {}.", ind + 1))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parses_column_first() {
        assert_eq!(Position::try_from("6,1"), Ok(Position::new(1, 6)));
        assert_eq!(
            Position::try_from("61"),
            Err(Error::NoCommaInPositonText)
        );
        assert_eq!(
            Position::try_from("a,1"),
            Err(Error::InvalidCoordinateText("a".to_string()))
        );
    }

    #[test]
    fn neighbor_stops_at_zero() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.neighbor(Direction::North), None);
        assert_eq!(origin.neighbor(Direction::West), None);
        assert_eq!(origin.neighbor(Direction::East), Some(Position::new(0, 1)));
        assert_eq!(origin.neighbor(Direction::South), Some(Position::new(1, 0)));
    }

    #[test]
    fn turns_are_consistent() {
        for dir in Direction::all_dirs() {
            assert_eq!(dir.turn_clockwise().turn_counterclockwise(), *dir);
            let (dr, dc) = dir.offset();
            let (rr, rc) = dir.turn_clockwise().turn_clockwise().offset();
            assert_eq!((dr + rr, dc + rc), (0, 0));
        }
    }

    #[test]
    fn add_obstruction_reports_duplicates_and_bounds() {
        let mut grid = Grid::new(2, 3);
        let pos = Position::new(1, 2);
        assert_eq!(grid.add_obstruction(pos), Ok(()));
        assert_eq!(grid.add_obstruction(pos), Err(Error::AlreadyObstructed(pos)));
        assert!(grid.is_obstructed(&pos));
        assert!(!grid.is_open(&pos));

        let outside = Position::new(2, 0);
        assert_eq!(
            grid.add_obstruction(outside),
            Err(Error::ObstructionOutOfGrid(outside))
        );
        assert!(!grid.is_open(&outside));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 2);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
    }
}
