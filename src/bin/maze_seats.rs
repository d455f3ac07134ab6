use anyhow::{Context, Result};
use clap::Parser;
use gridpath::{Direction, GoalAt, Heading, MazeCLIArgs, Search, TiePolicy, TurnCost};

fn main() -> Result<()> {
    env_logger::init();
    let args = MazeCLIArgs::parse();
    let maze = gridpath::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;

    let start = Heading::new(maze.start_pos(), Direction::East);
    let goal = GoalAt(maze.end_pos());
    let search = Search::new(
        maze.into_grid(),
        start,
        TurnCost::default(),
        goal,
        TiePolicy::Inclusive,
    )
    .context("Failed to set up search on given maze.")?;

    let result = search.run();
    if result.is_found() {
        println!(
            "There are {} positions in maze that's on at least one path with the minimium score.",
            result.reconstruct_all_optimal_cells().len()
        );
    } else {
        eprintln!("There's no path can complete the given maze.");
    }

    Ok(())
}
