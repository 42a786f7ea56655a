//! Nefis: AI-assisted recipe suggestions and weekly meal plans.
//!
//! This crate re-exports the workspace crates behind one import path and
//! owns the layered application configuration used by the `nefis` binary.
//!
//! # Example
//!
//! ```no_run
//! use nefis::{AppConfig, RecipeAssistant, RecipeRequest};
//!
//! # async fn run() -> nefis::NefisResult<()> {
//! let config = AppConfig::load(None)?;
//! let assistant = RecipeAssistant::from_config(config.gemini())?;
//! let recipe = assistant
//!     .suggest_recipe(&RecipeRequest::new("eggs, tomatoes, green peppers"))
//!     .await?;
//! println!("{}", recipe.title);
//! # Ok(())
//! # }
//! ```

mod settings;

pub use settings::{API_KEY_VAR, AppConfig, CONFIG_FILE_NAME, ENV_PREFIX, default_config_path};

pub use nefis_core::{
    ActivityLevel, BmiCategory, BodyProfile, DayPlan, GeneratedRecipe, Goal, MacroTotals, Meal,
    MealPlanRequest, NutritionReport, NutritionTargets, RecipeRequest, Sex, ShapeContract,
    WeeklyMealPlan,
};
pub use nefis_error::{
    ConfigError, ExtractionError, ExtractionErrorKind, GeminiError, GeminiErrorKind, MediaError,
    NefisError, NefisErrorKind, NefisResult, NutritionError, NutritionErrorKind,
};
pub use nefis_generation::{RecipeAssistant, decode, meal_plan_prompt, recipe_prompt};
pub use nefis_media::{ImageResolver, ImageResolverConfig};
pub use nefis_models::{CompletionOptions, GeminiClient, GeminiConfig, RetryPolicy};
