use anyhow::{Context, Result};
use clap::Parser;
use gridpath::{
    first_blocking, GoalAt, Grid, IncrementalSolver, MemoryCLIArgs, Position, Search, StepCost,
    TiePolicy,
};
use log::{debug, warn};

fn memory_solver(
    map_size: usize,
    corr_positions: &[Position],
) -> Result<IncrementalSolver<StepCost, GoalAt>> {
    let mut grid = Grid::new_square(map_size);
    for pos in corr_positions {
        if let Err(e) = grid.add_obstruction(*pos) {
            warn!("Skip corrupted position {}: {}", pos, e);
        }
    }

    let end_pos = Position::new(map_size.saturating_sub(1), map_size.saturating_sub(1));
    let search = Search::new(
        grid,
        Position::new(0, 0),
        StepCost,
        GoalAt(end_pos),
        TiePolicy::Strict,
    )
    .context("Failed to set up search on memory space.")?;

    Ok(IncrementalSolver::new(search))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = MemoryCLIArgs::parse();
    let corr_positions = gridpath::read_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read corrupted positions from given file({}).",
            args.input_path.display()
        )
    })?;
    let safe_size = args.corrupt_size.unwrap_or(0).min(corr_positions.len());
    let (mut safe_positions, mut falling_positions) = corr_positions.split_at(safe_size);

    let mut solver = memory_solver(args.map_size, safe_positions)?;
    if !solver.result().is_found() {
        // The cut lies inside the prefix, look for it from an empty space.
        warn!(
            "The first {} corrupted positions already block the path, start from none instead.",
            safe_size
        );
        (safe_positions, falling_positions) = corr_positions.split_at(0);
        solver = memory_solver(args.map_size, safe_positions)?;
    }

    let start_pos = Position::new(0, 0);
    let end_pos = Position::new(args.map_size.saturating_sub(1), args.map_size.saturating_sub(1));
    let first_break_corrupt_pos = first_blocking(&mut solver, falling_positions)
        .context("Failed to corrupt positions one by one.")?;
    debug!("Ran {} full search(es).", solver.research_n());

    if let Some(pos) = first_break_corrupt_pos {
        println!(
            "The first corrupted position that makes no path from {} to {} exists is {},{}.",
            start_pos,
            end_pos,
            pos.col(),
            pos.row()
        );
    } else {
        eprintln!(
            "There's no corrupted position can break the path from {} to {}.",
            start_pos, end_pos
        );
    }

    Ok(())
}
