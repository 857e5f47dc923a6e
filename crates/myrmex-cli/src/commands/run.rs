//! Run a headless foraging simulation.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use myrmex::prelude::*;
use std::path::Path;

use crate::config::Config;

/// Options collected from the command line.
pub struct RunArgs {
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
    pub food: Vec<String>,
    pub obstacles: Vec<String>,
    pub snapshot: Option<String>,
    pub trails: bool,
    pub parallel: bool,
    pub verbose: bool,
}

/// Parse an `x,y` pair.
fn parse_point(raw: &str) -> Result<Position> {
    let Some((x, y)) = raw.split_once(',') else {
        bail!("expected x,y but got {:?}", raw);
    };
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {:?}", raw))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {:?}", raw))?;
    Ok(Position::new(x, y))
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = Config::load()?;
    let mut simulation = config.simulation.clone();
    if args.seed.is_some() {
        simulation.seed = args.seed;
    }
    if args.parallel {
        simulation.colony.parallel = true;
    }
    let ticks = args.ticks.unwrap_or(config.run.ticks);

    let food_size = simulation.colony.food_size;
    let obstacle_size = simulation.colony.obstacle_size;
    let mut colony = Colony::from_config(simulation)?;

    let food = config
        .run
        .food
        .iter()
        .map(|[x, y]| Ok(Position::new(*x, *y)))
        .chain(args.food.iter().map(|raw| parse_point(raw)))
        .collect::<Result<Vec<_>>>()?;
    for position in food {
        colony.place_food(position, food_size)?;
    }
    let obstacles = config
        .run
        .obstacles
        .iter()
        .map(|[x, y]| Ok(Position::new(*x, *y)))
        .chain(args.obstacles.iter().map(|raw| parse_point(raw)))
        .collect::<Result<Vec<_>>>()?;
    for origin in obstacles {
        colony.place_obstacle(origin, obstacle_size)?;
    }

    let bounds = colony.bounds();
    println!(
        "{} Running {} ticks on a {}x{} field (seed {})...",
        "→".blue(),
        ticks.to_string().cyan(),
        bounds.width,
        bounds.height,
        colony.seed().to_string().cyan()
    );

    let pb = ProgressBar::new(ticks);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    for _ in 0..ticks {
        let events = colony.tick();
        if args.verbose {
            for event in &events {
                if let ColonyEvent::FoodDepleted { position, .. } = event {
                    pb.println(format!(
                        "  {} food at ({:.0}, {:.0}) depleted",
                        "•".yellow(),
                        position.x,
                        position.y
                    ));
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    if let Some(path) = &args.snapshot {
        let options = ExportOptions {
            include_trails: args.trails,
            pretty: true,
        };
        save_snapshot_with(&colony, Path::new(path), options)?;
        println!("  {} Snapshot written to {}", "✓".green(), path);
    }

    let stats = colony.stats();
    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    println!("  Foragers:       {}", stats.foragers_alive.to_string().green());
    println!("  Carrying:       {}", stats.foragers_carrying.to_string().green());
    println!("  Food delivered: {}", stats.food_delivered.to_string().green());
    println!(
        "  Food remaining: {} in {} sources",
        stats.food_remaining.to_string().yellow(),
        stats.food_sources.to_string().yellow()
    );
    println!(
        "  Trail mass:     search {:.2}, return {:.2}",
        stats.search_trail_mass, stats.return_trail_mass
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        let p = parse_point("12.5, 40").unwrap();
        assert_eq!(p, Position::new(12.5, 40.0));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
    }
}
