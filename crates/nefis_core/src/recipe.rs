//! AI-suggested recipe record.

use crate::ShapeContract;
use serde::{Deserialize, Deserializer, Serialize, de};

/// A recipe produced by the model from a list of available ingredients.
///
/// Field names are part of the prompt contract: the prompt embeds
/// [`GeneratedRecipe::schema_example`] serialized with these exact keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Recipe name
    pub title: String,
    /// One or two sentence summary
    pub description: String,
    /// Ingredients with quantities, in order of use
    pub ingredients: Vec<String>,
    /// Preparation steps, in order
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    #[serde(deserialize_with = "whole_number")]
    pub prep_time: u32,
    /// Cooking time in minutes
    #[serde(deserialize_with = "whole_number")]
    pub cook_time: u32,
    /// Number of servings
    #[serde(deserialize_with = "whole_number")]
    pub servings: u32,
}

/// Accepts integers and floats such as `12.0` or `12.5`, rounding halves to even.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!(
            "expected a non-negative count, got {}",
            value
        )));
    }
    Ok(value.round_ties_even() as u32)
}

impl GeneratedRecipe {
    /// Example instance embedded in prompts to show the expected JSON shape.
    pub fn schema_example() -> Self {
        Self {
            title: "Recipe name".to_string(),
            description: "Short description of the dish".to_string(),
            ingredients: vec![
                "2 eggs".to_string(),
                "1 tablespoon butter".to_string(),
            ],
            instructions: vec![
                "Melt the butter in a pan".to_string(),
                "Add the eggs and stir".to_string(),
            ],
            prep_time: 10,
            cook_time: 15,
            servings: 2,
        }
    }

    /// Total time from start to table, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Ingredients joined one per line, the layout recipe storage uses.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join("\n")
    }

    /// Instructions numbered and joined one per line.
    pub fn instructions_text(&self) -> String {
        self.instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ShapeContract for GeneratedRecipe {
    fn check_shape(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("recipe title is empty".to_string());
        }
        if self.ingredients.is_empty() {
            return Err("recipe has no ingredients".to_string());
        }
        if self.instructions.is_empty() {
            return Err("recipe has no instructions".to_string());
        }
        Ok(())
    }
}
