use anyhow::Result;
use clap::{Parser, Subcommand};
use plateup::cli::{self, App, FavoritesCommand, PantryCommand};

/// plateup - cook with what you have
#[derive(Parser)]
#[command(name = "plateup")]
#[command(about = "Find recipes for the ingredients you already have", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recipes that use at least half of their ingredients from a selection
    Match {
        /// Ingredients to match, the saved pantry selection when omitted
        ingredients: Vec<String>,

        /// Show every match instead of the first six
        #[arg(long)]
        all: bool,
    },
    /// Manage the saved ingredient selection
    Pantry {
        #[command(subcommand)]
        command: PantryCommand,
    },
    /// Recipes suited to the current season
    Seasonal {
        /// Month to use instead of today, 0 for January through 11 for December
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=11))]
        month: Option<u8>,
    },
    /// Manage favorite recipes
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
    /// Show a recipe with quantities scaled to a number of servings
    Show {
        /// Recipe id
        id: u32,

        /// Servings between 1 and 8 (overrides config file)
        #[arg(long)]
        servings: Option<u32>,
    },
    /// Run the countdown of a recipe step
    Timer {
        /// Recipe id
        id: u32,

        /// Step number, starting at 1
        step: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = plateup::Config::load(args.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    plateup::observability::init_observability(
        "plateup",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    let app = App::load(config)?;

    match args.command {
        Commands::Match { ingredients, all } => cli::match_ingredients(&app, ingredients, all),
        Commands::Pantry { command } => cli::pantry(&app, command),
        Commands::Seasonal { month } => cli::seasonal(&app, month),
        Commands::Favorites { command } => cli::favorites(&app, command),
        Commands::Show { id, servings } => cli::show(&app, id, servings),
        Commands::Timer { id, step } => cli::timer(&app, id, step).await,
    }
}
