//! Prompts for recipe and meal plan generation.
//!
//! Each prompt embeds an example object serialized from the same record type
//! the response is decoded into, so the keys the model sees are the keys the
//! extractor expects.

use nefis_core::{GeneratedRecipe, MealPlanRequest, RecipeRequest, WeeklyMealPlan};
use serde::Serialize;

/// Prompt name used in logs.
pub const RECIPE_PROMPT_NAME: &str = "recipe";
/// Prompt name used in logs.
pub const MEAL_PLAN_PROMPT_NAME: &str = "weekly_meal_plan";

/// Render the recipe suggestion prompt.
pub fn recipe_prompt(request: &RecipeRequest) -> String {
    let preferences = request
        .preferences
        .as_deref()
        .unwrap_or("No special preferences");

    format!(
        r#"You are a professional chef. Suggest one recipe that can be cooked with the ingredients below.

Available ingredients: {ingredients}
Preferences: {preferences}

Rules:
- Use mainly the available ingredients; assume basic pantry items (salt, pepper, oil, water).
- Respect the preferences.
- List every ingredient with its quantity, one per entry.
- Give the instructions as ordered steps, one per entry.
- prep_time and cook_time are whole minutes; servings is a whole number.

Respond with ONLY a JSON object in exactly this format, with no text before or after it:
{schema}"#,
        ingredients = request.ingredients.trim(),
        preferences = preferences,
        schema = schema_json(&GeneratedRecipe::schema_example()),
    )
}

/// Render the weekly meal plan prompt.
pub fn meal_plan_prompt(request: &MealPlanRequest) -> String {
    let targets = &request.targets;
    let preferences = request
        .preferences
        .as_deref()
        .unwrap_or("No special preferences");

    format!(
        r#"You are a registered dietitian. Create a healthy {days}-day meal plan for the daily targets below.

Daily targets:
- Calories: {calories} kcal
- Protein: {protein} g
- Carbohydrates: {carbs} g
- Fat: {fat} g
Preferences: {preferences}

Rules:
- Cover all {days} days in order, Monday through Sunday.
- Each day has breakfast, lunch, dinner and one or two snacks.
- Each day's totals should be close to the daily targets.
- List foods with portions; give calories in kcal and protein, carbs and fat in grams as numbers.

Respond with ONLY a JSON object in exactly this format, with no text before or after it. The example shows one day; the "days" array must contain all {days}:
{schema}"#,
        days = WeeklyMealPlan::DAYS,
        calories = targets.calories,
        protein = targets.protein_grams,
        carbs = targets.carb_grams,
        fat = targets.fat_grams,
        preferences = preferences,
        schema = schema_json(&WeeklyMealPlan::schema_example()),
    )
}

fn schema_json<T: Serialize>(example: &T) -> String {
    serde_json::to_string_pretty(example).unwrap_or_default()
}
