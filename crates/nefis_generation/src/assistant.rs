//! Recipe and meal plan generation over a completion client.

use crate::{decode, meal_plan_prompt, recipe_prompt};
use nefis_core::{GeneratedRecipe, MealPlanRequest, RecipeRequest, WeeklyMealPlan};
use nefis_error::{GeminiError, NefisResult};
use nefis_models::{
    CompletionOptions, GeminiClient, GeminiConfig, GeminiTransport, ReqwestTransport,
};
use tracing::{debug, info, instrument};

/// Builds prompts, calls the model and decodes the answers.
#[derive(Debug, Clone)]
pub struct RecipeAssistant<T = ReqwestTransport> {
    client: GeminiClient<T>,
}

impl RecipeAssistant<ReqwestTransport> {
    /// Creates an assistant backed by the production HTTP client.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiError> {
        Ok(Self::new(GeminiClient::new(config)?))
    }
}

impl<T> RecipeAssistant<T>
where
    T: GeminiTransport,
{
    /// Wraps an existing client.
    pub fn new(client: GeminiClient<T>) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &GeminiClient<T> {
        &self.client
    }

    /// Suggests one recipe for the given ingredients.
    #[instrument(skip(self, request), fields(model = self.client.model_name()))]
    pub async fn suggest_recipe(&self, request: &RecipeRequest) -> NefisResult<GeneratedRecipe> {
        let prompt = recipe_prompt(request);
        debug!(prompt_len = prompt.len(), "Built recipe prompt");

        let text = self
            .client
            .complete(&prompt, &CompletionOptions::recipe())
            .await?;
        let recipe: GeneratedRecipe = decode(&text)?;

        info!(title = %recipe.title, steps = recipe.instructions.len(), "Generated recipe");
        Ok(recipe)
    }

    /// Generates a seven-day meal plan for the given targets.
    #[instrument(
        skip(self, request),
        fields(model = self.client.model_name(), calories = request.targets.calories)
    )]
    pub async fn weekly_meal_plan(&self, request: &MealPlanRequest) -> NefisResult<WeeklyMealPlan> {
        let prompt = meal_plan_prompt(request);
        debug!(prompt_len = prompt.len(), "Built meal plan prompt");

        let text = self
            .client
            .complete(&prompt, &CompletionOptions::weekly_plan())
            .await?;
        let plan: WeeklyMealPlan = decode(&text)?;

        info!(
            days = plan.days.len(),
            avg_calories = plan.average_daily_totals().calories,
            "Generated weekly meal plan"
        );
        Ok(plan)
    }
}
