//! Calorie calculator command handler.

use super::generate::{generate_meal_plan, to_pretty_json};
use super::{OutputFormat, ProfileArgs};
use nefis::{AppConfig, NefisResult, NutritionReport};
use tracing::info;

/// Handles the calories command, optionally chaining into a meal plan.
#[tracing::instrument(skip(config, profile, preferences))]
pub async fn handle_calories_command(
    config: &AppConfig,
    profile: &ProfileArgs,
    meal_plan: bool,
    preferences: Option<String>,
    format: OutputFormat,
) -> NefisResult<()> {
    let report = profile.to_profile()?.report();
    info!(target_calories = report.target_calories(), "Calculated targets");

    print_report(&report, format);

    if meal_plan {
        generate_meal_plan(config, report.targets(), preferences, format).await?;
    }
    Ok(())
}

fn print_report(report: &NutritionReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", to_pretty_json(report)),
        OutputFormat::Text => {
            println!("BMR:             {} kcal", report.bmr());
            println!("Daily need:      {} kcal", report.daily_calories());
            println!(
                "Target ({}): {} kcal",
                report.goal(),
                report.target_calories()
            );
            println!("BMI:             {} ({})", report.bmi(), report.bmi_category());
            println!("Protein:         {} g", report.protein_grams());
            println!("Carbohydrates:   {} g", report.carb_grams());
            println!("Fat:             {} g", report.fat_grams());
        }
    }
}
