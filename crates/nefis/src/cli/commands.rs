//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use nefis::{ActivityLevel, BodyProfile, Goal, NutritionError, Sex};
use std::path::PathBuf;

/// AI-assisted recipes, meal plans and calorie targets.
#[derive(Parser, Debug)]
#[command(name = "nefis")]
#[command(about = "AI-assisted recipe suggestions, weekly meal plans and calorie targets")]
#[command(version)]
pub struct Cli {
    /// Path to a nefis.toml configuration file
    #[arg(short, long, global = true, env = "NEFIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a recipe for the ingredients you have
    Recipe {
        /// Available ingredients, e.g. "eggs, tomatoes, peppers"
        #[arg(short, long)]
        ingredients: String,

        /// Taste, diet or cuisine preferences
        #[arg(short, long)]
        preferences: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate a seven-day meal plan for your calorie targets
    MealPlan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Diet preferences or exclusions
        #[arg(short, long)]
        preferences: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Calculate BMR, BMI and daily calorie and macro targets
    Calories {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Also generate a weekly meal plan for the computed targets
        #[arg(long)]
        meal_plan: bool,

        /// Diet preferences for the meal plan
        #[arg(short, long, requires = "meal_plan")]
        preferences: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve a share link or recipe page to a direct image URL
    ResolveImage {
        /// Link to resolve
        url: String,
    },
}

/// Body measurements for the calorie calculator.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// male or female
    #[arg(long)]
    pub sex: Sex,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,

    /// Height in centimetres
    #[arg(long)]
    pub height: f64,

    /// sedentary, light, moderate, very_active or extra_active
    #[arg(long, default_value = "sedentary")]
    pub activity: ActivityLevel,

    /// lose, maintain or gain
    #[arg(long, default_value = "maintain")]
    pub goal: Goal,
}

impl ProfileArgs {
    /// Validate the measurements.
    pub fn to_profile(&self) -> Result<BodyProfile, NutritionError> {
        BodyProfile::new(
            self.sex,
            self.age,
            self.weight,
            self.height,
            self.activity,
            self.goal,
        )
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}
