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
        TiePolicy::Strict,
    )
    .context("Failed to set up search on given maze.")?;

    if let Some(min_score) = search.run().best_score() {
        println!("The minimium score of completing the maze is {}.", min_score);
    } else {
        eprintln!("There's no path can complete the given maze.");
    }

    Ok(())
}
