//! Per-call generation requests.

use crate::NutritionTargets;
use serde::{Deserialize, Serialize};

/// Ask for a recipe that uses the given ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Free-text list of what the user has at hand
    pub ingredients: String,
    /// Optional taste, diet or cuisine preferences
    pub preferences: Option<String>,
}

impl RecipeRequest {
    /// Request without preferences.
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            preferences: None,
        }
    }

    /// Attach preferences; blank text is treated as none.
    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = non_blank(preferences.into());
        self
    }
}

/// Ask for a weekly meal plan hitting daily nutrition targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    /// Daily calorie and macro targets
    pub targets: NutritionTargets,
    /// Optional diet preferences or exclusions
    pub preferences: Option<String>,
}

impl MealPlanRequest {
    /// Request without preferences.
    pub fn new(targets: NutritionTargets) -> Self {
        Self {
            targets,
            preferences: None,
        }
    }

    /// Attach preferences; blank text is treated as none.
    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = non_blank(preferences.into());
        self
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
