//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the nefis binary.

mod calories;
mod commands;
mod generate;
mod image;

pub use calories::handle_calories_command;
pub use commands::{Cli, Commands, OutputFormat, ProfileArgs};
pub use generate::{generate_meal_plan, handle_recipe_command};
pub use image::handle_resolve_image_command;
