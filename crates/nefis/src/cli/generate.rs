//! Recipe and meal plan command handlers.

use super::OutputFormat;
use nefis::{
    AppConfig, GeneratedRecipe, MealPlanRequest, NefisResult, NutritionTargets, RecipeAssistant,
    RecipeRequest, WeeklyMealPlan,
};
use tracing::info;

/// Handles the recipe command.
#[tracing::instrument(skip_all)]
pub async fn handle_recipe_command(
    config: &AppConfig,
    ingredients: String,
    preferences: Option<String>,
    format: OutputFormat,
) -> NefisResult<()> {
    let assistant = RecipeAssistant::from_config(config.gemini())?;

    let mut request = RecipeRequest::new(ingredients);
    if let Some(preferences) = preferences {
        request = request.with_preferences(preferences);
    }

    info!("Requesting recipe suggestion");
    let recipe = assistant.suggest_recipe(&request).await?;
    print_recipe(&recipe, format)
}

/// Generates and prints a weekly plan for `targets`.
#[tracing::instrument(skip_all, fields(calories = targets.calories))]
pub async fn generate_meal_plan(
    config: &AppConfig,
    targets: NutritionTargets,
    preferences: Option<String>,
    format: OutputFormat,
) -> NefisResult<()> {
    let assistant = RecipeAssistant::from_config(config.gemini())?;

    let mut request = MealPlanRequest::new(targets);
    if let Some(preferences) = preferences {
        request = request.with_preferences(preferences);
    }

    info!("Requesting weekly meal plan");
    let plan = assistant.weekly_meal_plan(&request).await?;
    print_meal_plan(&plan, format)
}

fn print_recipe(recipe: &GeneratedRecipe, format: OutputFormat) -> NefisResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_pretty_json(recipe)),
        OutputFormat::Text => {
            println!("{}", recipe.title);
            println!("{}", recipe.description);
            println!();
            println!(
                "Prep: {} min | Cook: {} min | Total: {} min | Serves {}",
                recipe.prep_time,
                recipe.cook_time,
                recipe.total_time(),
                recipe.servings
            );
            println!();
            println!("Ingredients:");
            println!("{}", recipe.ingredients_text());
            println!();
            println!("Instructions:");
            println!("{}", recipe.instructions_text());
        }
    }
    Ok(())
}

fn print_meal_plan(plan: &WeeklyMealPlan, format: OutputFormat) -> NefisResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_pretty_json(plan)),
        OutputFormat::Text => {
            for day in &plan.days {
                let totals = day.totals();
                println!(
                    "{} ({:.0} kcal, P {:.0} g, C {:.0} g, F {:.0} g)",
                    day.day, totals.calories, totals.protein, totals.carbs, totals.fat
                );
                for meal in &day.meals {
                    println!(
                        "  {}: {} ({:.0} kcal)",
                        meal.name,
                        meal.foods.join(", "),
                        meal.calories
                    );
                }
            }
            let average = plan.average_daily_totals();
            println!();
            println!("Daily average: {:.0} kcal", average.calories);
        }
    }
    Ok(())
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
