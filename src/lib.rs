pub mod cost;
pub mod grid;
pub mod incremental;
pub mod maze;
pub mod race;
pub mod search;

use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub use cost::{CostModel, Heading, SearchState, StepCost, TurnCost};
pub use grid::{read_positions, Direction, Grid, Position};
pub use incremental::{first_blocking, IncrementalSolver, Resolve};
pub use maze::{read_maze, Maze};
pub use search::{Entry, EntryId, Goal, GoalAt, Search, SearchResult, TiePolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize),
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    InvalidCharForMap(char),
    NoStartPosition,
    NoEndPosition,
    NoCommaInPositonText,
    InvalidCoordinateText(String),
    ObstructionOutOfGrid(Position),
    AlreadyObstructed(Position),
    InvalidStartState(Position),
    EmptyFrontier,
    NonPositiveCost(usize, usize),
    NoPathBeforeInsertion,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_pos, pos
            ),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::NoStartPosition => write!(f, "No start position in map."),
            Error::NoEndPosition => write!(f, "No end position in map."),
            Error::NoCommaInPositonText => write!(
                f,
                "Expect a comma to separate coordinates of position in text."
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of position.", s)
            }
            Error::ObstructionOutOfGrid(pos) => {
                write!(f, "Obstruction at {} is outside of the grid.", pos)
            }
            Error::AlreadyObstructed(pos) => write!(f, "Position {} is already obstructed.", pos),
            Error::InvalidStartState(pos) => write!(
                f,
                "Start position {} is outside of the grid or obstructed.",
                pos
            ),
            Error::EmptyFrontier => write!(f, "No more entries in the search frontier."),
            Error::NonPositiveCost(forward, turn) => write!(
                f,
                "Expect positive move costs, given forward {} and turn {}.",
                forward, turn
            ),
            Error::NoPathBeforeInsertion => write!(
                f,
                "The goal is already unreachable before any obstruction is inserted."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct MazeCLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct MemoryCLIArgs {
    pub input_path: PathBuf,
    pub map_size: usize,
    pub corrupt_size: Option<usize>,
}

#[derive(Debug, Parser)]
pub struct RaceCLIArgs {
    pub input_path: PathBuf,
    pub cheat_duration: usize,
    pub save_threshold: Option<usize>,
}
