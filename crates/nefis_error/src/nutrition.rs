//! Calculator input errors.

/// Invalid body measurements handed to the calorie calculator.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum NutritionErrorKind {
    /// Weight must be a positive, finite number of kilograms.
    #[display("Invalid weight: {_0} kg")]
    InvalidWeight(f64),
    /// Height must be a positive, finite number of centimetres.
    #[display("Invalid height: {_0} cm")]
    InvalidHeight(f64),
    /// Age must be at least one year.
    #[display("Invalid age: {_0}")]
    InvalidAge(u32),
}

/// Calculator error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Nutrition Error: {} at line {} in {}", kind, line, file)]
pub struct NutritionError {
    kind: NutritionErrorKind,
    line: u32,
    file: &'static str,
}

impl NutritionError {
    /// Create a new calculator error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NutritionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NutritionErrorKind {
        &self.kind
    }
}
