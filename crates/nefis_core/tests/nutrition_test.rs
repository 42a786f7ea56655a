//! Tests for the calorie and BMI calculator.

use nefis_core::{ActivityLevel, BmiCategory, BodyProfile, Goal, Sex};
use nefis_error::NutritionErrorKind;

#[test]
fn test_male_weight_loss_report() -> Result<(), Box<dyn std::error::Error>> {
    let profile = BodyProfile::new(Sex::Male, 30, 80.0, 180.0, ActivityLevel::Moderate, Goal::Lose)?;
    let report = profile.report();

    assert_eq!(*report.bmr(), 1780);
    assert_eq!(*report.daily_calories(), 2759);
    assert_eq!(*report.target_calories(), 2259);
    assert_eq!(*report.bmi(), 24.7);
    assert_eq!(*report.bmi_category(), BmiCategory::Normal);
    assert_eq!(*report.protein_grams(), 160);
    assert_eq!(*report.fat_grams(), 63);
    assert_eq!(*report.carb_grams(), 264);
    Ok(())
}

#[test]
fn test_female_maintenance_report() -> Result<(), Box<dyn std::error::Error>> {
    let profile = BodyProfile::new(
        Sex::Female,
        25,
        60.0,
        165.0,
        ActivityLevel::Sedentary,
        Goal::Maintain,
    )?;
    let report = profile.report();

    assert_eq!(*report.bmr(), 1345);
    assert_eq!(*report.daily_calories(), 1614);
    assert_eq!(report.target_calories(), report.daily_calories());
    assert_eq!(*report.bmi(), 22.0);
    assert_eq!(*report.protein_grams(), 120);
    assert_eq!(*report.fat_grams(), 45);
    assert_eq!(*report.carb_grams(), 183);
    Ok(())
}

#[test]
fn test_halves_round_to_even() -> Result<(), Box<dyn std::error::Error>> {
    // 700 + 1062.5 - 155 + 5 = 1612.5
    let profile =
        BodyProfile::new(Sex::Male, 31, 70.0, 170.0, ActivityLevel::Sedentary, Goal::Maintain)?;
    assert_eq!(profile.bmr(), 1612.5);
    assert_eq!(*profile.report().bmr(), 1612);

    // 70.25 kg * 2 g/kg = 140.5 g
    let profile =
        BodyProfile::new(Sex::Male, 30, 70.25, 170.0, ActivityLevel::Sedentary, Goal::Maintain)?;
    assert_eq!(*profile.report().protein_grams(), 140);

    // 700 + 1062.5 - 150 + 5 = 1617.5 goes up to the even neighbour
    let profile =
        BodyProfile::new(Sex::Male, 30, 70.0, 170.0, ActivityLevel::Sedentary, Goal::Maintain)?;
    assert_eq!(*profile.report().bmr(), 1618);
    Ok(())
}

#[test]
fn test_gain_adds_surplus() -> Result<(), Box<dyn std::error::Error>> {
    let maintain =
        BodyProfile::new(Sex::Male, 40, 90.0, 175.0, ActivityLevel::Light, Goal::Maintain)?;
    let gain = BodyProfile::new(Sex::Male, 40, 90.0, 175.0, ActivityLevel::Light, Goal::Gain)?;

    let diff = gain.report().target_calories() - maintain.report().target_calories();
    assert_eq!(diff, 500);
    Ok(())
}

#[test]
fn test_bmi_category_boundaries() {
    assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_targets_follow_report() -> Result<(), Box<dyn std::error::Error>> {
    let profile = BodyProfile::new(Sex::Male, 30, 80.0, 180.0, ActivityLevel::Moderate, Goal::Lose)?;
    let targets = profile.report().targets();

    assert_eq!(targets.calories, 2259);
    assert_eq!(targets.protein_grams, 160);
    assert_eq!(targets.carb_grams, 264);
    assert_eq!(targets.fat_grams, 63);
    Ok(())
}

#[test]
fn test_invalid_measurements_rejected() {
    let err = BodyProfile::new(Sex::Female, 30, 0.0, 170.0, ActivityLevel::Light, Goal::Lose)
        .unwrap_err();
    assert_eq!(*err.kind(), NutritionErrorKind::InvalidWeight(0.0));

    let err = BodyProfile::new(Sex::Female, 30, 60.0, f64::NAN, ActivityLevel::Light, Goal::Lose)
        .unwrap_err();
    assert!(matches!(err.kind(), NutritionErrorKind::InvalidHeight(_)));

    let err = BodyProfile::new(Sex::Female, 0, 60.0, 170.0, ActivityLevel::Light, Goal::Lose)
        .unwrap_err();
    assert_eq!(*err.kind(), NutritionErrorKind::InvalidAge(0));
}

#[test]
fn test_enum_parsing_matches_form_values() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!("very_active".parse::<ActivityLevel>()?, ActivityLevel::VeryActive);
    assert_eq!("Extra_Active".parse::<ActivityLevel>()?, ActivityLevel::ExtraActive);
    assert_eq!("female".parse::<Sex>()?, Sex::Female);
    assert_eq!("gain".parse::<Goal>()?, Goal::Gain);
    assert_eq!(ActivityLevel::VeryActive.to_string(), "very_active");
    assert!("couch".parse::<ActivityLevel>().is_err());
    Ok(())
}
