mod config;
mod render;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mealcal")]
#[command(about = "Generate a printable monthly meal-plan calendar from your configured meal rotation")]
struct Cli {
    /// Year to generate (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Month to generate, 1-12 (defaults to the current month)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Path to the config file (defaults to ~/.config/mealcal/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the HTML file (defaults to meal_plan_<year>_<month>.html)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let today = Local::now().date_naive();
    let year = cli.year.unwrap_or_else(|| today.year());
    let month = cli.month.unwrap_or_else(|| today.month());

    let cfg = config::load_config(cli.config.as_deref())?;

    // Build the grid before touching the output path, so an invalid date or
    // empty rotation never leaves a partial file behind
    let grid = mealcal_core::grid::build(year, month, &cfg.meals)?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(render::output_filename(year, month)));

    render::write_html(&grid, &output)?;

    println!(
        "Meal plan for {} {} saved to {}",
        render::month_name(month),
        year,
        output.display()
    );

    Ok(())
}
