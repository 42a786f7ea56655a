//! Nefis command-line entry point.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use nefis::{AppConfig, NefisResult};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match run(cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> NefisResult<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    info!("Starting nefis");

    match cli.command {
        Commands::Recipe {
            ingredients,
            preferences,
            format,
        } => cli::handle_recipe_command(&config, ingredients, preferences, format).await,
        Commands::MealPlan {
            profile,
            preferences,
            format,
        } => {
            let targets = profile.to_profile()?.report().targets();
            cli::generate_meal_plan(&config, targets, preferences, format).await
        }
        Commands::Calories {
            profile,
            meal_plan,
            preferences,
            format,
        } => {
            cli::handle_calories_command(&config, &profile, meal_plan, preferences, format).await
        }
        Commands::ResolveImage { url } => cli::handle_resolve_image_command(&config, &url).await,
    }
}
