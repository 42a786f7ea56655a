//! Core data types for the Nefis recipe assistant.
//!
//! Records produced by the model (recipes, weekly meal plans), the requests
//! that drive generation, and the calorie calculator whose targets feed the
//! meal plan prompt.

mod meal_plan;
mod nutrition;
mod recipe;
mod request;
mod shape;

pub use meal_plan::{DayPlan, MacroTotals, Meal, WeeklyMealPlan};
pub use nutrition::{
    ActivityLevel, BmiCategory, BodyProfile, Goal, NutritionReport, NutritionTargets, Sex,
};
pub use recipe::GeneratedRecipe;
pub use request::{MealPlanRequest, RecipeRequest};
pub use shape::ShapeContract;
