use anyhow::{Context, Result};
use clap::Parser;
use gridpath::{
    race::{cheat_savings, cheats_saving_at_least},
    GoalAt, RaceCLIArgs, Search, StepCost, TiePolicy,
};

fn main() -> Result<()> {
    env_logger::init();
    let args = RaceCLIArgs::parse();
    let maze = gridpath::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read racetrack from given file({}).",
            args.input_path.display()
        )
    })?;

    let start_pos = maze.start_pos();
    let goal = GoalAt(maze.end_pos());
    let search = Search::new(maze.into_grid(), start_pos, StepCost, goal, TiePolicy::Strict)
        .context("Failed to set up search on given racetrack.")?;
    let Some(path) = search.run().reconstruct_single_path() else {
        eprintln!("Given racetrack has no path if no cheat is allowed.");
        return Ok(());
    };

    let save_threshold = args.save_threshold.unwrap_or(100);
    let savings = cheat_savings(&path, args.cheat_duration);
    println!(
        "There is(are) {} cheat ways to save at least {} steps on given racetrack.",
        cheats_saving_at_least(&savings, save_threshold),
        save_threshold
    );

    Ok(())
}
