//! Weekly meal plan records.

use crate::ShapeContract;
use serde::{Deserialize, Serialize};

/// A single meal with its foods and nutrition values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name, e.g. "Breakfast"
    pub name: String,
    /// Foods with portions
    pub foods: Vec<String>,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// Meals for one day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day name, e.g. "Monday"
    pub day: String,
    /// Meals in the order they are eaten
    pub meals: Vec<Meal>,
}

/// Summed nutrition values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl DayPlan {
    /// Sum of all meals of the day.
    pub fn totals(&self) -> MacroTotals {
        self.meals
            .iter()
            .fold(MacroTotals::default(), |acc, meal| MacroTotals {
                calories: acc.calories + meal.calories,
                protein: acc.protein + meal.protein,
                carbs: acc.carbs + meal.carbs,
                fat: acc.fat + meal.fat,
            })
    }
}

/// A seven-day meal plan, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    /// Exactly [`WeeklyMealPlan::DAYS`] entries
    pub days: Vec<DayPlan>,
}

impl WeeklyMealPlan {
    /// Number of days a plan must cover.
    pub const DAYS: usize = 7;

    /// Example embedded in prompts. Holds a single day; the prompt states
    /// that seven are required.
    pub fn schema_example() -> Self {
        Self {
            days: vec![DayPlan {
                day: "Monday".to_string(),
                meals: vec![
                    Meal {
                        name: "Breakfast".to_string(),
                        foods: vec!["2 boiled eggs".to_string(), "1 slice wholegrain bread".to_string()],
                        calories: 350.0,
                        protein: 20.0,
                        carbs: 30.0,
                        fat: 15.0,
                    },
                    Meal {
                        name: "Lunch".to_string(),
                        foods: vec!["150g grilled chicken".to_string(), "1 cup rice".to_string()],
                        calories: 600.0,
                        protein: 45.0,
                        carbs: 60.0,
                        fat: 15.0,
                    },
                ],
            }],
        }
    }

    /// Average daily totals across the plan.
    pub fn average_daily_totals(&self) -> MacroTotals {
        if self.days.is_empty() {
            return MacroTotals::default();
        }
        let n = self.days.len() as f64;
        let sum = self
            .days
            .iter()
            .map(DayPlan::totals)
            .fold(MacroTotals::default(), |acc, t| MacroTotals {
                calories: acc.calories + t.calories,
                protein: acc.protein + t.protein,
                carbs: acc.carbs + t.carbs,
                fat: acc.fat + t.fat,
            });
        MacroTotals {
            calories: sum.calories / n,
            protein: sum.protein / n,
            carbs: sum.carbs / n,
            fat: sum.fat / n,
        }
    }
}

impl ShapeContract for WeeklyMealPlan {
    fn check_shape(&self) -> Result<(), String> {
        if self.days.len() != Self::DAYS {
            return Err(format!(
                "expected {} days, found {}",
                Self::DAYS,
                self.days.len()
            ));
        }
        for day in &self.days {
            if day.meals.is_empty() {
                return Err(format!("day '{}' has no meals", day.day));
            }
            let invalid = day.meals.iter().find(|m| {
                [m.calories, m.protein, m.carbs, m.fat]
                    .iter()
                    .any(|v| !v.is_finite() || *v < 0.0)
            });
            if let Some(meal) = invalid {
                return Err(format!(
                    "meal '{}' on '{}' has a negative or non-finite nutrition value",
                    meal.name, day.day
                ));
            }
        }
        Ok(())
    }
}
