//! Calorie, BMI and macro calculator.
//!
//! Uses the Mifflin-St Jeor equation for basal metabolic rate, scales it by an
//! activity multiplier, then shifts it by a fixed 500 kcal for weight loss or
//! gain. Macro targets follow a 2 g/kg protein, 25 % fat split with the
//! remainder from carbohydrates.

use derive_getters::Getters;
use nefis_error::{NutritionError, NutritionErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Daily surplus or deficit applied for a weight goal, in kcal.
const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;
/// Protein grams per kilogram of body weight.
const PROTEIN_PER_KG: f64 = 2.0;
/// Share of target calories that come from fat.
const FAT_SHARE: f64 = 0.25;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Biological sex used by the BMR equation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

/// How active the person is during a typical week.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Exercise 1-3 days a week
    Light,
    /// Exercise 3-5 days a week
    Moderate,
    /// Exercise 6-7 days a week
    VeryActive,
    /// Training twice a day
    ExtraActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily expenditure.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

/// Weight goal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Goal {
    /// Lose weight
    Lose,
    /// Keep current weight
    #[default]
    Maintain,
    /// Gain weight
    Gain,
}

impl Goal {
    fn adjustment(self) -> f64 {
        match self {
            Goal::Lose => -GOAL_ADJUSTMENT_KCAL,
            Goal::Maintain => 0.0,
            Goal::Gain => GOAL_ADJUSTMENT_KCAL,
        }
    }
}

/// BMI bands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    Normal,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Body measurements and goals entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct BodyProfile {
    sex: Sex,
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    activity: ActivityLevel,
    goal: Goal,
}

impl BodyProfile {
    /// Create a profile, rejecting measurements the formulas cannot use.
    pub fn new(
        sex: Sex,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, NutritionError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(NutritionError::new(NutritionErrorKind::InvalidWeight(weight_kg)));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(NutritionError::new(NutritionErrorKind::InvalidHeight(height_cm)));
        }
        if age == 0 {
            return Err(NutritionError::new(NutritionErrorKind::InvalidAge(age)));
        }
        Ok(Self {
            sex,
            age,
            weight_kg,
            height_cm,
            activity,
            goal,
        })
    }

    /// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
    pub fn bmr(&self) -> f64 {
        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * f64::from(self.age);
        match self.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    }

    /// Body mass index, unrounded.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Run the full calculation.
    #[instrument(skip(self), fields(sex = %self.sex, activity = %self.activity, goal = %self.goal))]
    pub fn report(&self) -> NutritionReport {
        let bmr = self.bmr();
        let daily_calories = bmr * self.activity.multiplier();
        let target_calories = daily_calories + self.goal.adjustment();
        let bmi = self.bmi();

        let protein_grams = self.weight_kg * PROTEIN_PER_KG;
        let protein_calories = protein_grams * KCAL_PER_GRAM_PROTEIN;
        let fat_calories = target_calories * FAT_SHARE;
        let fat_grams = fat_calories / KCAL_PER_GRAM_FAT;
        let carb_grams = (target_calories - protein_calories - fat_calories) / KCAL_PER_GRAM_CARB;

        debug!(bmr, daily_calories, target_calories, bmi, "Computed nutrition report");

        NutritionReport {
            bmr: bmr.round_ties_even() as i64,
            daily_calories: daily_calories.round_ties_even() as i64,
            target_calories: target_calories.round_ties_even() as i64,
            bmi: (bmi * 10.0).round_ties_even() / 10.0,
            bmi_category: BmiCategory::from_bmi(bmi),
            protein_grams: protein_grams.round_ties_even() as i64,
            carb_grams: carb_grams.round_ties_even() as i64,
            fat_grams: fat_grams.round_ties_even() as i64,
            goal: self.goal,
        }
    }
}

/// Calculator output. Halves round to the nearest even value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct NutritionReport {
    bmr: i64,
    daily_calories: i64,
    target_calories: i64,
    bmi: f64,
    bmi_category: BmiCategory,
    protein_grams: i64,
    carb_grams: i64,
    fat_grams: i64,
    goal: Goal,
}

impl NutritionReport {
    /// Daily targets to hand to the meal plan prompt. Negative values clamp to zero.
    pub fn targets(&self) -> NutritionTargets {
        let clamp = |v: i64| u32::try_from(v.max(0)).unwrap_or(u32::MAX);
        NutritionTargets {
            calories: clamp(self.target_calories),
            protein_grams: clamp(self.protein_grams),
            carb_grams: clamp(self.carb_grams),
            fat_grams: clamp(self.fat_grams),
        }
    }
}

/// Daily calorie and macro goals for meal planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// kcal per day
    pub calories: u32,
    /// Protein grams per day
    pub protein_grams: u32,
    /// Carbohydrate grams per day
    pub carb_grams: u32,
    /// Fat grams per day
    pub fat_grams: u32,
}
