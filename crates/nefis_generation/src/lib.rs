//! AI recipe generation: prompts, response extraction and the assistant
//! that ties them to the completion client.

mod assistant;
mod extraction;
mod prompt;

pub use assistant::RecipeAssistant;
pub use extraction::{decode, normalize_newlines, object_span, strip_code_fence};
pub use prompt::{MEAL_PLAN_PROMPT_NAME, RECIPE_PROMPT_NAME, meal_plan_prompt, recipe_prompt};
