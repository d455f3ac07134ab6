use anyhow::{Context, Result};
use clap::Parser;
use gridpath::{GoalAt, Grid, MemoryCLIArgs, Position, Search, StepCost, TiePolicy};
use log::warn;

fn main() -> Result<()> {
    env_logger::init();
    let args = MemoryCLIArgs::parse();
    let corr_positions = gridpath::read_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read corrupted positions from given file({}).",
            args.input_path.display()
        )
    })?;
    let corrupt_size = args
        .corrupt_size
        .unwrap_or(corr_positions.len())
        .min(corr_positions.len());

    let mut grid = Grid::new_square(args.map_size);
    for pos in &corr_positions[..corrupt_size] {
        if let Err(e) = grid.add_obstruction(*pos) {
            warn!("Skip corrupted position {}: {}", pos, e);
        }
    }

    let start_pos = Position::new(0, 0);
    let end_pos = Position::new(args.map_size.saturating_sub(1), args.map_size.saturating_sub(1));
    let search = Search::new(grid, start_pos, StepCost, GoalAt(end_pos), TiePolicy::Strict)
        .context("Failed to set up search on memory space.")?;
    if let Some(min_exit_steps_n) = search.run().best_score() {
        println!(
            "It takes at least {} steps moving from {} to {} after corrupting given positions.",
            min_exit_steps_n, start_pos, end_pos
        );
    } else {
        eprintln!(
            "There's no path from {} to {} after corrupting given positions.",
            start_pos, end_pos
        );
    }

    Ok(())
}
