use anyhow::Result;
/// Career recommender CLI
///
/// Provides the interactive skill form plus non-interactive recommend and skills commands.
use career_cli::commands::{load_recommender, recommend_output};
use career_cli::{report, ui};
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "career-cli", version)]
#[command(about = "Career Recommender - rate your skills, get a role", long_about = None)]
struct Cli {
    /// Path to the YAML config file (optional)
    #[arg(short, long, global = true, default_value = "career.yaml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive skill form
    Tui,
    /// Recommend a role for one set of ratings (non-interactive)
    Recommend {
        /// 17 comma-separated ratings, as numbers 0-6 or names
        #[arg(short, long)]
        ratings: String,
        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the skill attributes and the rating scale
    Skills,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Tui => "off",
        _ => "info",
    };
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));

    match cli.command {
        Commands::Tui => {
            let recommender = load_recommender(&cli.config)?;
            ui::run_tui(recommender)?;
        }
        Commands::Recommend { ratings, json } => {
            let recommender = load_recommender(&cli.config)?;
            print!("{}", recommend_output(&recommender, &ratings, json)?);
        }
        Commands::Skills => {
            print!("{}", report::skills_text());
        }
    }

    Ok(())
}
