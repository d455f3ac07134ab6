use std::{fmt::Debug, hash::Hash};

use crate::{
    grid::{Direction, Grid, Position},
    Error,
};

/// Identity of a search node. Two states are the same node iff they compare equal.
pub trait SearchState: Debug + Clone + Eq + Hash {
    fn pos(&self) -> &Position;
}

impl SearchState for Position {
    fn pos(&self) -> &Position {
        self
    }
}

/// Position plus the heading it was entered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heading {
    pos: Position,
    dir: Direction,
}

impl Heading {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }
}

impl SearchState for Heading {
    fn pos(&self) -> &Position {
        &self.pos
    }
}

/// Rules of movement for one kind of puzzle.
pub trait CostModel {
    type State: SearchState;

    /// Append every legal `(next state, cost)` pair reachable from `state` in one step.
    /// Costs must be positive and no transition may enter a cell that isn't open.
    fn transitions(&self, grid: &Grid, state: &Self::State, buf: &mut Vec<(Self::State, usize)>);
}

/// Axis-aligned unit moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepCost;

impl CostModel for StepCost {
    type State = Position;

    fn transitions(&self, grid: &Grid, state: &Position, buf: &mut Vec<(Position, usize)>) {
        buf.extend(
            Direction::all_dirs()
                .iter()
                .filter_map(|dir| grid.open_neighbor(state, *dir))
                .map(|next_pos| (next_pos, 1)),
        );
    }
}

/// Moving on in the current heading costs `forward`, turning 90° and moving costs `turn`.
/// Reversing is never offered.
#[derive(Debug, Clone, Copy)]
pub struct TurnCost {
    forward: usize,
    turn: usize,
}

impl Default for TurnCost {
    fn default() -> Self {
        Self {
            forward: 1,
            turn: 1001,
        }
    }
}

impl TurnCost {
    pub fn new(forward: usize, turn: usize) -> Result<Self, Error> {
        if forward == 0 || turn == 0 {
            return Err(Error::NonPositiveCost(forward, turn));
        }

        Ok(Self { forward, turn })
    }

    pub fn forward(&self) -> usize {
        self.forward
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    fn candidates(&self, dir: Direction) -> [(Direction, usize); 3] {
        [
            (dir, self.forward),
            (dir.turn_clockwise(), self.turn),
            (dir.turn_counterclockwise(), self.turn),
        ]
    }
}

impl CostModel for TurnCost {
    type State = Heading;

    fn transitions(&self, grid: &Grid, state: &Heading, buf: &mut Vec<(Heading, usize)>) {
        buf.extend(
            self.candidates(state.dir)
                .into_iter()
                .filter_map(|(next_dir, cost)| {
                    grid.open_neighbor(&state.pos, next_dir)
                        .map(|next_pos| (Heading::new(next_pos, next_dir), cost))
                }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transitions_of<M: CostModel>(
        model: &M,
        grid: &Grid,
        state: &M::State,
    ) -> Vec<(M::State, usize)> {
        let mut buf = Vec::new();
        model.transitions(grid, state, &mut buf);
        buf
    }

    #[test]
    fn step_cost_skips_walls_and_bounds() {
        let grid = Grid::with_obstructions(3, 3, &[Position::new(0, 1)]).unwrap();
        let next = transitions_of(&StepCost, &grid, &Position::new(0, 0));
        assert_eq!(next, vec![(Position::new(1, 0), 1)]);

        let center = transitions_of(&StepCost, &grid, &Position::new(1, 1));
        assert_eq!(center.len(), 3);
        assert!(center.iter().all(|(pos, cost)| *cost == 1 && grid.is_open(pos)));
    }

    #[test]
    fn turn_cost_never_reverses() {
        let grid = Grid::new(3, 3);
        let state = Heading::new(Position::new(1, 1), Direction::East);
        let next = transitions_of(&TurnCost::default(), &grid, &state);
        assert_eq!(next.len(), 3);
        assert!(next.contains(&(Heading::new(Position::new(1, 2), Direction::East), 1)));
        assert!(next.contains(&(Heading::new(Position::new(2, 1), Direction::South), 1001)));
        assert!(next.contains(&(Heading::new(Position::new(0, 1), Direction::North), 1001)));
        assert!(next.iter().all(|(s, _)| s.dir() != Direction::West));
    }

    #[test]
    fn transitions_are_deterministic() {
        let grid = Grid::with_obstructions(4, 4, &[Position::new(2, 1)]).unwrap();
        let model = TurnCost::new(2, 7).unwrap();
        let state = Heading::new(Position::new(1, 1), Direction::South);
        assert_eq!(
            transitions_of(&model, &grid, &state),
            transitions_of(&model, &grid, &state)
        );
        assert_eq!(transitions_of(&model, &grid, &state).len(), 2);
    }

    #[test]
    fn turn_cost_rejects_free_moves() {
        assert_eq!(TurnCost::new(0, 1001).unwrap_err(), Error::NonPositiveCost(0, 1001));
        assert_eq!(TurnCost::new(1, 0).unwrap_err(), Error::NonPositiveCost(1, 0));
        let model = TurnCost::new(3, 5).unwrap();
        assert_eq!((model.forward(), model.turn()), (3, 5));
    }
}
