use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn memory_exit_output_right_answer() {
    let mut cmd = Command::cargo_bin("memory_exit").unwrap();
    cmd.arg("tests/data/bytes.txt").arg("7").arg("12");

    cmd.assert().success().stdout(str::contains("at least 22 steps"));
}

#[test]
fn memory_cutoff_output_right_answer() {
    let mut cmd = Command::cargo_bin("memory_cutoff").unwrap();
    cmd.arg("tests/data/bytes.txt").arg("7");

    cmd.assert().success().stdout(str::contains("is 6,1."));
}

#[test]
fn memory_cutoff_with_safe_prefix() {
    let mut cmd = Command::cargo_bin("memory_cutoff").unwrap();
    cmd.arg("tests/data/bytes.txt").arg("7").arg("12");

    cmd.assert().success().stdout(str::contains("is 6,1."));
}

#[test]
fn incremental_cutoff_agrees_with_fresh_searches() {
    use gridpath::{GoalAt, Grid, IncrementalSolver, Position, Search, StepCost, TiePolicy};

    let positions = gridpath::read_positions("tests/data/bytes.txt").unwrap();
    let new_search = |grid: Grid| {
        Search::new(
            grid,
            Position::new(0, 0),
            StepCost,
            GoalAt(Position::new(6, 6)),
            TiePolicy::Inclusive,
        )
        .unwrap()
    };
    let mut solver = IncrementalSolver::new(new_search(Grid::new_square(7)));
    let mut grid = Grid::new_square(7);
    for pos in &positions {
        grid.add_obstruction(*pos).unwrap();
        solver.add_obstruction(*pos).unwrap();
        let fresh = new_search(grid.clone()).run();
        assert_eq!(solver.best_score(), fresh.best_score());
        assert_eq!(
            solver.result().reconstruct_all_optimal_cells(),
            fresh.reconstruct_all_optimal_cells()
        );
    }
    assert!(solver.research_n() < positions.len() + 1);
}

#[test]
fn memory_cutoff_with_blocking_prefix() {
    let mut cmd = Command::cargo_bin("memory_cutoff").unwrap();
    cmd.arg("tests/data/bytes.txt").arg("7").arg("22");

    cmd.assert().success().stdout(str::contains("is 6,1."));
}

#[test]
fn cutoff_of_an_already_blocked_space_is_an_error() {
    use gridpath::{
        first_blocking, Error, GoalAt, Grid, IncrementalSolver, Position, Search, StepCost,
        TiePolicy,
    };

    let positions = gridpath::read_positions("tests/data/bytes.txt").unwrap();
    let grid = Grid::with_obstructions(7, 7, &positions[..21]).unwrap();
    let search = Search::new(
        grid,
        Position::new(0, 0),
        StepCost,
        GoalAt(Position::new(6, 6)),
        TiePolicy::Strict,
    )
    .unwrap();
    let mut solver = IncrementalSolver::new(search);
    assert_eq!(
        first_blocking(&mut solver, &positions[21..]),
        Err(Error::NoPathBeforeInsertion)
    );
}
